//! User-entered drafts for new reviews and new places.
//!
//! The store trusts its caller and validates nothing. Screens collect input
//! into these drafts and turn them into records; a draft that fails its
//! presence checks never reaches the store.

use chrono::NaiveDate;

use crate::{
  ValidationError,
  place::{Amenities, Category, Crowdedness, NoiseLevel, PLACEHOLDER_PHOTO, PlaceRecord},
  review::{CURRENT_USER_ID, CURRENT_USER_NAME, ReviewRecord},
};

// ─── Reviews ─────────────────────────────────────────────────────────────────

/// A review as typed by the user. `rating == 0` means "not chosen yet".
#[derive(Debug, Clone, Default)]
pub struct ReviewDraft {
  pub rating:  u8,
  pub comment: String,
}

impl ReviewDraft {
  pub fn new(rating: u8, comment: impl Into<String>) -> Self {
    Self { rating, comment: comment.into() }
  }

  /// Validate and build the review. `now_millis` seeds the id, `today` is
  /// the submission date.
  pub fn into_review(
    self,
    today: NaiveDate,
    now_millis: i64,
  ) -> Result<ReviewRecord, ValidationError> {
    match self.rating {
      0 => return Err(ValidationError::MissingRating),
      1..=5 => {}
      other => return Err(ValidationError::RatingOutOfRange(other)),
    }
    let comment = self.comment.trim();
    if comment.is_empty() {
      return Err(ValidationError::EmptyComment);
    }

    Ok(ReviewRecord {
      id:        format!("r{now_millis}"),
      user_id:   CURRENT_USER_ID.to_owned(),
      user_name: CURRENT_USER_NAME.to_owned(),
      rating:    self.rating,
      comment:   comment.to_owned(),
      date:      today,
    })
  }
}

// ─── Places ──────────────────────────────────────────────────────────────────

/// A new place as typed by the user. Defaults mirror the add-place form.
#[derive(Debug, Clone)]
pub struct PlaceDraft {
  pub name:              String,
  pub location:          String,
  pub description:       String,
  pub photo_url:         String,
  pub noise_level:       NoiseLevel,
  pub crowdedness:       Crowdedness,
  pub seating_available: bool,
  pub amenities:         Amenities,
  pub categories:        Vec<Category>,
}

impl Default for PlaceDraft {
  fn default() -> Self {
    Self {
      name:              String::new(),
      location:          String::new(),
      description:       String::new(),
      photo_url:         String::new(),
      noise_level:       NoiseLevel::Moderate,
      crowdedness:       Crowdedness::Medium,
      seating_available: true,
      amenities:         Amenities::default(),
      categories:        Vec::new(),
    }
  }
}

impl PlaceDraft {
  /// Add `category` if absent, remove it if present.
  pub fn toggle_category(&mut self, category: Category) {
    if let Some(pos) = self.categories.iter().position(|c| *c == category) {
      self.categories.remove(pos);
    } else {
      self.categories.push(category);
    }
  }

  /// Validate and build an unreviewed place with id `place-<now_millis>`.
  pub fn into_place(
    self,
    now_millis: i64,
  ) -> Result<PlaceRecord, ValidationError> {
    for (field, value) in [
      ("name", &self.name),
      ("location", &self.location),
      ("description", &self.description),
    ] {
      if value.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField(field));
      }
    }

    let mut categories = Vec::with_capacity(self.categories.len());
    for category in self.categories {
      if !categories.contains(&category) {
        categories.push(category);
      }
    }

    let photo_url = if self.photo_url.trim().is_empty() {
      PLACEHOLDER_PHOTO.to_owned()
    } else {
      self.photo_url
    };

    Ok(PlaceRecord {
      id: format!("place-{now_millis}"),
      name: self.name,
      location: self.location,
      description: self.description,
      photo_url,
      rating: 0.0,
      review_count: 0,
      noise_level: self.noise_level,
      crowdedness: self.crowdedness,
      seating_available: self.seating_available,
      amenities: self.amenities,
      categories,
      reviews: Vec::new(),
    })
  }
}
