//! Rating aggregation.

use crate::{place::PlaceRecord, review::ReviewRecord};

/// Mean review rating rounded to one decimal place; `0.0` with no reviews.
///
/// Halves round up on the tenths digit, so a mean of `4.25` becomes `4.3`.
pub fn average_rating(reviews: &[ReviewRecord]) -> f64 {
  if reviews.is_empty() {
    return 0.0;
  }
  let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
  let mean = f64::from(total) / reviews.len() as f64;
  (mean * 10.0).round() / 10.0
}

impl PlaceRecord {
  /// A new record with `review` appended and the derived fields recomputed.
  /// `self` is left untouched.
  pub fn with_review(&self, review: ReviewRecord) -> PlaceRecord {
    let mut next = self.clone();
    next.reviews.push(review);
    next.rating = average_rating(&next.reviews);
    next.review_count = next.reviews.len() as u32;
    next
  }
}
