//! [`PlaceQuery`]: free-text search plus attribute filters over places.

use crate::place::{Category, Crowdedness, NoiseLevel, PlaceRecord};

/// Criteria for narrowing the place collection. Every populated field must
/// match; an empty query matches every place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceQuery {
  /// Case-insensitive substring over name, location, and description.
  /// Blank text is ignored.
  pub text:              Option<String>,
  pub noise_level:       Option<NoiseLevel>,
  pub crowdedness:       Option<Crowdedness>,
  pub has_food:          Option<bool>,
  pub has_outlets:       Option<bool>,
  pub seating_available: Option<bool>,
  /// `Some(true)` requires the `indoor` category, `Some(false)` requires
  /// `outdoor`.
  pub indoor:            Option<bool>,
  pub category:          Option<Category>,
}

impl PlaceQuery {
  pub fn new() -> Self { Self::default() }

  pub fn text(mut self, text: impl Into<String>) -> Self {
    self.text = Some(text.into());
    self
  }

  pub fn category(mut self, category: Category) -> Self {
    self.category = Some(category);
    self
  }

  pub fn is_empty(&self) -> bool {
    self.normalized_text().is_none()
      && self.noise_level.is_none()
      && self.crowdedness.is_none()
      && self.has_food.is_none()
      && self.has_outlets.is_none()
      && self.seating_available.is_none()
      && self.indoor.is_none()
      && self.category.is_none()
  }

  fn normalized_text(&self) -> Option<String> {
    self
      .text
      .as_deref()
      .map(str::trim)
      .filter(|t| !t.is_empty())
      .map(str::to_lowercase)
  }

  pub fn matches(&self, place: &PlaceRecord) -> bool {
    if let Some(needle) = self.normalized_text() {
      let hit = [&place.name, &place.location, &place.description]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle));
      if !hit {
        return false;
      }
    }

    self.noise_level.is_none_or(|n| place.noise_level == n)
      && self.crowdedness.is_none_or(|c| place.crowdedness == c)
      && self.has_food.is_none_or(|f| place.amenities.food_nearby == f)
      && self.has_outlets.is_none_or(|o| place.amenities.outlets == o)
      && self
        .seating_available
        .is_none_or(|s| place.seating_available == s)
      && self.indoor.is_none_or(|indoor| {
        place.has_category(if indoor {
          Category::Indoor
        } else {
          Category::Outdoor
        })
      })
      && self.category.is_none_or(|c| place.has_category(c))
  }

  /// Filter `places`, keeping their original order.
  pub fn apply<'a, P, I>(&self, places: I) -> Vec<P>
  where
    I: IntoIterator<Item = &'a P>,
    P: AsRef<PlaceRecord> + Clone + 'a,
  {
    places
      .into_iter()
      .filter(|p| self.matches((*p).as_ref()))
      .cloned()
      .collect()
  }
}

impl AsRef<PlaceRecord> for PlaceRecord {
  fn as_ref(&self) -> &PlaceRecord { self }
}
