//! Integration tests for `SqliteStorage`, alone and underneath `AppStore`.

use campus_core::{
  place::{Amenities, Crowdedness, NoiseLevel, PlaceRecord},
  storage::{KEY_FAVORITES, KEY_PLACES, KeyValueStorage},
};
use campus_store::{AppStore, PlacesOrigin};

use crate::{Error, SqliteStorage};

fn storage() -> SqliteStorage {
  SqliteStorage::open_in_memory().expect("in-memory storage")
}

fn place(id: &str) -> PlaceRecord {
  PlaceRecord {
    id:                id.into(),
    name:              "Engineering Atrium".into(),
    location:          "East Campus".into(),
    description:       "High ceilings, long benches".into(),
    photo_url:         String::new(),
    rating:            0.0,
    review_count:      0,
    noise_level:       NoiseLevel::Moderate,
    crowdedness:       Crowdedness::Medium,
    seating_available: true,
    amenities:         Amenities::default(),
    categories:        Vec::new(),
    reviews:           Vec::new(),
  }
}

// ─── Key-value operations ────────────────────────────────────────────────────

#[test]
fn get_missing_key_returns_none() {
  let s = storage();
  assert!(s.get("favorites").unwrap().is_none());
}

#[test]
fn set_then_get() {
  let mut s = storage();
  s.set("favorites", r#"["a"]"#).unwrap();
  assert_eq!(s.get("favorites").unwrap().as_deref(), Some(r#"["a"]"#));
}

#[test]
fn set_overwrites_whole_value() {
  let mut s = storage();
  s.set("visited", r#"["a","b"]"#).unwrap();
  s.set("visited", "[]").unwrap();
  assert_eq!(s.get("visited").unwrap().as_deref(), Some("[]"));
  assert_eq!(s.keys().unwrap(), ["visited"]);
}

#[test]
fn remove_and_clear() {
  let mut s = storage();
  s.set("a", "1").unwrap();
  s.set("b", "2").unwrap();
  s.set("c", "3").unwrap();

  s.remove("b").unwrap();
  s.remove("never-set").unwrap();
  assert_eq!(s.keys().unwrap(), ["a", "c"]);

  s.clear().unwrap();
  assert!(s.keys().unwrap().is_empty());
}

// ─── Files ───────────────────────────────────────────────────────────────────

#[test]
fn file_scope_survives_reopen() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("local.db");

  let mut s = SqliteStorage::open(&path).unwrap();
  s.set(KEY_FAVORITES, r#"["p1"]"#).unwrap();
  drop(s);

  let s = SqliteStorage::open(&path).unwrap();
  assert_eq!(s.get(KEY_FAVORITES).unwrap().as_deref(), Some(r#"["p1"]"#));
}

#[test]
fn newer_schema_is_rejected() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("future.db");
  {
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 99;").unwrap();
  }
  let err = SqliteStorage::open(&path).unwrap_err();
  assert!(matches!(err, Error::SchemaVersion(99)));
}

// ─── Underneath the store ────────────────────────────────────────────────────

#[test]
fn store_round_trips_through_sqlite_scopes() {
  let dir = tempfile::tempdir().unwrap();
  let local_path = dir.path().join("local.db");
  let session_path = dir.path().join("session.db");
  let seed = vec![place("p1"), place("p2")];

  let mut store = AppStore::open(
    SqliteStorage::open(&local_path).unwrap(),
    SqliteStorage::open(&session_path).unwrap(),
    &seed,
  )
  .unwrap();
  assert_eq!(store.origin(), PlacesOrigin::Seeded);
  store.toggle_favorite("p2").unwrap();
  store.add_place(place("p3")).unwrap();
  drop(store);

  let store = AppStore::open(
    SqliteStorage::open(&local_path).unwrap(),
    SqliteStorage::open(&session_path).unwrap(),
    &seed,
  )
  .unwrap();
  assert_eq!(store.origin(), PlacesOrigin::Session);
  assert_eq!(store.places().len(), 3);
  assert!(store.is_favorite("p2"));
}

#[test]
fn store_reseeds_over_corrupt_sqlite_value() {
  let mut session = storage();
  session.set(KEY_PLACES, "not json at all").unwrap();

  let store = AppStore::open(storage(), session, &vec![place("p1")]).unwrap();
  assert_eq!(store.origin(), PlacesOrigin::RecoveredFromMalformed);

  let (_, session) = store.into_storages();
  let stored: Vec<PlaceRecord> =
    serde_json::from_str(&session.get(KEY_PLACES).unwrap().unwrap()).unwrap();
  assert_eq!(stored, [place("p1")]);
}
