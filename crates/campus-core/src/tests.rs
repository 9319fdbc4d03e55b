//! Unit tests for the data model, rating aggregation, queries, and drafts.

use chrono::NaiveDate;

use crate::{
  ValidationError,
  draft::{PlaceDraft, ReviewDraft},
  place::{
    Amenities, Category, Crowdedness, NoiseLevel, PLACEHOLDER_PHOTO, PlaceRecord,
  },
  query::PlaceQuery,
  rating::average_rating,
  review::ReviewRecord,
  seed::{SeedSource, seed_from_json},
};

fn date() -> NaiveDate { NaiveDate::from_ymd_opt(2024, 3, 14).unwrap() }

fn review(id: &str, rating: u8) -> ReviewRecord {
  ReviewRecord {
    id:        id.into(),
    user_id:   "u1".into(),
    user_name: "Sam".into(),
    rating,
    comment:   "fine".into(),
    date:      date(),
  }
}

fn place(id: &str) -> PlaceRecord {
  PlaceRecord {
    id:                id.into(),
    name:              "Central Library".into(),
    location:          "Main Campus, Building A".into(),
    description:       "Silent floors with long desks".into(),
    photo_url:         "https://example.com/lib.jpg".into(),
    rating:            0.0,
    review_count:      0,
    noise_level:       NoiseLevel::Quiet,
    crowdedness:       Crowdedness::Low,
    seating_available: true,
    amenities:         Amenities { wifi: true, outlets: true, food_nearby: false },
    categories:        vec![Category::Indoor, Category::Library],
    reviews:           Vec::new(),
  }
}

// ─── Rating ──────────────────────────────────────────────────────────────────

#[test]
fn average_of_no_reviews_is_zero() {
  assert_eq!(average_rating(&[]), 0.0);
}

#[test]
fn average_rounds_to_one_decimal() {
  let reviews = [review("a", 4), review("b", 4), review("c", 5)];
  // 13 / 3 = 4.333...
  assert_eq!(average_rating(&reviews), 4.3);
}

#[test]
fn average_rounds_halves_up() {
  let reviews = [review("a", 4), review("b", 4), review("c", 4), review("d", 5)];
  // 17 / 4 = 4.25
  assert_eq!(average_rating(&reviews), 4.3);
}

#[test]
fn with_review_recomputes_in_sequence() {
  let p0 = place("p1");
  let p1 = p0.with_review(review("r1", 4));
  assert_eq!((p1.rating, p1.review_count), (4.0, 1));
  let p2 = p1.with_review(review("r2", 5));
  assert_eq!((p2.rating, p2.review_count), (4.5, 2));
  let p3 = p2.with_review(review("r3", 3));
  assert_eq!((p3.rating, p3.review_count), (4.0, 3));

  let ids: Vec<_> = p3.reviews.iter().map(|r| r.id.as_str()).collect();
  assert_eq!(ids, ["r1", "r2", "r3"]);
  // The original is untouched.
  assert!(p0.reviews.is_empty());
}

// ─── Serialization ───────────────────────────────────────────────────────────

#[test]
fn place_json_uses_persisted_field_names() {
  let p = place("p1").with_review(review("r1", 5));
  let json = serde_json::to_value(&p).unwrap();

  assert_eq!(json["photo"], "https://example.com/lib.jpg");
  assert_eq!(json["reviewCount"], 1);
  assert_eq!(json["noiseLevel"], "Quiet");
  assert_eq!(json["crowdedness"], "Low");
  assert_eq!(json["seatingAvailable"], true);
  assert_eq!(json["amenities"]["foodNearby"], false);
  assert_eq!(json["categories"], serde_json::json!(["indoor", "library"]));
  assert_eq!(json["reviews"][0]["userName"], "Sam");
  assert_eq!(json["reviews"][0]["date"], "2024-03-14");
}

#[test]
fn collection_round_trips_through_json() {
  let places = vec![
    place("p1").with_review(review("r1", 2)).with_review(review("r2", 5)),
    PlaceRecord {
      categories: vec![Category::Outdoor, Category::Cafe],
      ..place("p2")
    },
  ];
  let json = serde_json::to_string(&places).unwrap();
  let back: Vec<PlaceRecord> = serde_json::from_str(&json).unwrap();
  assert_eq!(back, places);
  assert_eq!(back[0].rating, 3.5);
}

#[test]
fn seed_parses_handwritten_json() {
  let json = r#"[{
    "id": "1",
    "name": "Quad Lawn",
    "location": "North Quad",
    "description": "Grass and benches",
    "photo": "",
    "rating": 0,
    "reviewCount": 0,
    "noiseLevel": "Moderate",
    "crowdedness": "High",
    "seatingAvailable": false,
    "amenities": { "wifi": false, "outlets": false, "foodNearby": true },
    "categories": ["outdoor"],
    "reviews": []
  }]"#;
  let seed = seed_from_json(json).unwrap();
  assert_eq!(seed.len(), 1);
  assert_eq!(seed[0].display_photo(), PLACEHOLDER_PHOTO);
  assert_eq!(seed.seed_places(), seed);
}

#[test]
fn seed_rejects_malformed_json() {
  assert!(seed_from_json("[{").is_err());
}

// ─── Queries ─────────────────────────────────────────────────────────────────

fn sample() -> Vec<PlaceRecord> {
  vec![
    place("lib"),
    PlaceRecord {
      id: "cafe".into(),
      name: "Bean There".into(),
      location: "Student Union".into(),
      description: "Busy coffee shop".into(),
      noise_level: NoiseLevel::Loud,
      crowdedness: Crowdedness::High,
      amenities: Amenities { wifi: true, outlets: false, food_nearby: true },
      categories: vec![Category::Indoor, Category::Cafe],
      ..place("cafe")
    },
    PlaceRecord {
      id: "lawn".into(),
      name: "Quad Lawn".into(),
      location: "North Quad".into(),
      description: "Open grass near the LIBRARY steps".into(),
      noise_level: NoiseLevel::Moderate,
      seating_available: false,
      amenities: Amenities { wifi: false, outlets: false, food_nearby: true },
      categories: vec![Category::Outdoor],
      ..place("lawn")
    },
  ]
}

fn ids(places: &[PlaceRecord]) -> Vec<&str> {
  places.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn empty_query_matches_everything() {
  let places = sample();
  let q = PlaceQuery::new().text("   ");
  assert!(q.is_empty());
  assert_eq!(ids(&q.apply(&places)), ["lib", "cafe", "lawn"]);
}

#[test]
fn text_search_is_case_insensitive_across_fields() {
  let places = sample();
  let hits = PlaceQuery::new().text("library").apply(&places);
  assert_eq!(ids(&hits), ["lib", "lawn"]);

  let hits = PlaceQuery::new().text("UNION").apply(&places);
  assert_eq!(ids(&hits), ["cafe"]);
}

#[test]
fn filters_are_anded() {
  let places = sample();
  let q = PlaceQuery {
    has_food: Some(true),
    indoor: Some(true),
    ..PlaceQuery::default()
  };
  assert_eq!(ids(&q.apply(&places)), ["cafe"]);

  let q = PlaceQuery {
    noise_level: Some(NoiseLevel::Quiet),
    crowdedness: Some(Crowdedness::High),
    ..PlaceQuery::default()
  };
  assert!(q.apply(&places).is_empty());
}

#[test]
fn indoor_false_requires_outdoor_category() {
  let places = sample();
  let q = PlaceQuery { indoor: Some(false), ..PlaceQuery::default() };
  assert_eq!(ids(&q.apply(&places)), ["lawn"]);
}

#[test]
fn boolean_filters_match_exactly() {
  let places = sample();
  let q = PlaceQuery { seating_available: Some(false), ..PlaceQuery::default() };
  assert_eq!(ids(&q.apply(&places)), ["lawn"]);

  let q = PlaceQuery { has_outlets: Some(true), ..PlaceQuery::default() };
  assert_eq!(ids(&q.apply(&places)), ["lib"]);
}

#[test]
fn category_filter() {
  let places = sample();
  let hits = PlaceQuery::new().category(Category::Cafe).apply(&places);
  assert_eq!(ids(&hits), ["cafe"]);
}

#[test]
fn enums_parse_case_insensitively() {
  assert_eq!("quiet".parse::<NoiseLevel>().unwrap(), NoiseLevel::Quiet);
  assert_eq!("HIGH".parse::<Crowdedness>().unwrap(), Crowdedness::High);
  assert_eq!("Library".parse::<Category>().unwrap(), Category::Library);
  assert_eq!(Category::Cafe.to_string(), "cafe");
  assert!("noisy".parse::<NoiseLevel>().is_err());
}

// ─── Drafts ──────────────────────────────────────────────────────────────────

#[test]
fn review_draft_requires_a_rating() {
  let err = ReviewDraft::new(0, "nice").into_review(date(), 1).unwrap_err();
  assert_eq!(err, ValidationError::MissingRating);
  assert_eq!(err.to_string(), "Please select a rating");

  let err = ReviewDraft::new(6, "nice").into_review(date(), 1).unwrap_err();
  assert_eq!(err, ValidationError::RatingOutOfRange(6));
}

#[test]
fn review_draft_requires_a_comment() {
  let err = ReviewDraft::new(3, "  \n ").into_review(date(), 1).unwrap_err();
  assert_eq!(err, ValidationError::EmptyComment);
}

#[test]
fn review_draft_builds_attributed_review() {
  let r = ReviewDraft::new(4, "  good light  ")
    .into_review(date(), 1_700_000_000_000)
    .unwrap();
  assert_eq!(r.id, "r1700000000000");
  assert_eq!(r.user_id, "current-user");
  assert_eq!(r.user_name, "You");
  assert_eq!(r.comment, "good light");
  assert_eq!(r.date, date());
}

#[test]
fn place_draft_requires_text_fields() {
  let draft = PlaceDraft {
    name: "Somewhere".into(),
    location: "  ".into(),
    description: "desc".into(),
    ..PlaceDraft::default()
  };
  let err = draft.into_place(1).unwrap_err();
  assert_eq!(err, ValidationError::MissingRequiredField("location"));
  assert_eq!(err.to_string(), "Please fill in all required fields");
}

#[test]
fn place_draft_fills_defaults() {
  let mut draft = PlaceDraft {
    name: "Roof Garden".into(),
    location: "Science Block".into(),
    description: "Tables among planters".into(),
    categories: vec![Category::Outdoor, Category::Quiet, Category::Outdoor],
    ..PlaceDraft::default()
  };
  draft.toggle_category(Category::Quiet);
  draft.toggle_category(Category::Cafe);

  let p = draft.into_place(42).unwrap();
  assert_eq!(p.id, "place-42");
  assert_eq!(p.photo_url, PLACEHOLDER_PHOTO);
  assert_eq!(p.categories, [Category::Outdoor, Category::Cafe]);
  assert_eq!(p.noise_level, NoiseLevel::Moderate);
  assert_eq!(p.crowdedness, Crowdedness::Medium);
  assert!(p.seating_available);
  assert_eq!(p.amenities, Amenities::default());
  assert_eq!((p.rating, p.review_count), (0.0, 0));
  assert!(p.reviews.is_empty());
}
