//! [`AppStore`]: the single source of truth for places, favourites, and
//! visited status.

use std::sync::Arc;

use campus_core::{
  place::PlaceRecord,
  query::PlaceQuery,
  review::ReviewRecord,
  seed::SeedSource,
  storage::KeyValueStorage,
};
use tracing::{debug, info, warn};

use crate::{
  Result,
  events::{Observers, StoreEvent, SubscriptionId},
  repository::{Membership, MembershipRepository, PlaceRepository, Stored},
};

/// Where the working collection came from when the store was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacesOrigin {
  /// Loaded from the short-lived scope.
  Session,
  /// The short-lived scope was empty; the seed list became the baseline.
  Seeded,
  /// The short-lived scope held unparsable data; it was replaced by the seed
  /// list.
  RecoveredFromMalformed,
}

/// Counts shown on the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActivityStats {
  pub favorites: usize,
  pub visited:   usize,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// The application state store.
///
/// `L` is the long-lived scope (favourites, visited), `S` the short-lived
/// scope (the place collection). A store only exists once loading has
/// finished, so nothing can observe or overwrite a half-loaded collection.
///
/// Every mutation updates memory first, notifies subscribers, and then
/// writes the affected scope in full before returning. A storage failure is
/// returned to the caller; the in-memory change stands.
///
/// Ids that match nothing are not errors: [`AppStore::get_place`] returns
/// `None` and [`AppStore::add_review`] does nothing. Toggles accept any id,
/// existing or not.
pub struct AppStore<L, S> {
  memberships: MembershipRepository<L>,
  session:     PlaceRepository<S>,
  places:      Vec<Arc<PlaceRecord>>,
  favorites:   Vec<String>,
  visited:     Vec<String>,
  origin:      PlacesOrigin,
  observers:   Observers,
}

impl<L, S> AppStore<L, S>
where
  L: KeyValueStorage,
  S: KeyValueStorage,
{
  /// Load state from `long_lived` and `short_lived`, falling back to `seed`
  /// for the place collection.
  ///
  /// Favourite and visited sets default to empty when absent or unreadable.
  /// The place collection comes from the short-lived scope when it parses;
  /// otherwise the seed list is used and written back straight away, so
  /// memory and storage agree from the start.
  pub fn open(
    long_lived: L,
    short_lived: S,
    seed: &(impl SeedSource + ?Sized),
  ) -> Result<Self> {
    let memberships = MembershipRepository::new(long_lived);
    let favorites = load_ids(&memberships, Membership::Favorite)?;
    let visited = load_ids(&memberships, Membership::Visited)?;

    let mut session = PlaceRepository::new(short_lived);
    let (places, origin) = match session.load()? {
      Stored::Found(places) => (places, PlacesOrigin::Session),
      Stored::Absent => (seed.seed_places(), PlacesOrigin::Seeded),
      Stored::Malformed(e) => {
        warn!(error = %e, "stored place collection is unreadable; reseeding");
        (seed.seed_places(), PlacesOrigin::RecoveredFromMalformed)
      }
    };
    let places: Vec<_> = places.into_iter().map(Arc::new).collect();
    if origin != PlacesOrigin::Session {
      session.save(&places)?;
    }

    info!(
      places = places.len(),
      favorites = favorites.len(),
      visited = visited.len(),
      ?origin,
      "store ready"
    );

    Ok(Self {
      memberships,
      session,
      places,
      favorites,
      visited,
      origin,
      observers: Observers::default(),
    })
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  pub fn places(&self) -> &[Arc<PlaceRecord>] { &self.places }

  pub fn favorites(&self) -> &[String] { &self.favorites }

  pub fn visited(&self) -> &[String] { &self.visited }

  pub fn origin(&self) -> PlacesOrigin { self.origin }

  /// The first place with `id`, or `None`.
  pub fn get_place(&self, id: &str) -> Option<Arc<PlaceRecord>> {
    self.places.iter().find(|p| p.id == id).cloned()
  }

  pub fn is_favorite(&self, id: &str) -> bool {
    self.favorites.iter().any(|f| f == id)
  }

  pub fn is_visited(&self, id: &str) -> bool {
    self.visited.iter().any(|v| v == id)
  }

  /// Places matching `query`, in collection order.
  pub fn search(&self, query: &PlaceQuery) -> Vec<Arc<PlaceRecord>> {
    query.apply(&self.places)
  }

  /// Favourite places in collection order. Favourited ids with no place are
  /// skipped.
  pub fn favorite_places(&self) -> Vec<Arc<PlaceRecord>> {
    self
      .places
      .iter()
      .filter(|p| self.is_favorite(&p.id))
      .cloned()
      .collect()
  }

  /// Visited places in collection order.
  pub fn visited_places(&self) -> Vec<Arc<PlaceRecord>> {
    self
      .places
      .iter()
      .filter(|p| self.is_visited(&p.id))
      .cloned()
      .collect()
  }

  /// Raw set sizes, dangling ids included.
  pub fn stats(&self) -> ActivityStats {
    ActivityStats {
      favorites: self.favorites.len(),
      visited:   self.visited.len(),
    }
  }

  // ── Subscriptions ─────────────────────────────────────────────────────────

  /// Register `listener` to be called after every effective mutation.
  pub fn subscribe(
    &mut self,
    listener: impl FnMut(&StoreEvent) + 'static,
  ) -> SubscriptionId {
    self.observers.subscribe(Box::new(listener))
  }

  /// Returns `false` if `id` was not subscribed.
  pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
    self.observers.unsubscribe(id)
  }

  // ── Mutations ─────────────────────────────────────────────────────────────

  /// Flip `id` in the favourite set and persist it. Returns the new
  /// membership. The id is not checked against the place collection.
  pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
    let member = toggle(&mut self.favorites, id);
    debug!(place_id = id, member, "toggled favourite");
    self.observers.emit(&StoreEvent::FavoritesChanged {
      place_id: id.to_owned(),
      member,
    });
    self.memberships.save(Membership::Favorite, &self.favorites)?;
    Ok(member)
  }

  /// Flip `id` in the visited set and persist it. Returns the new
  /// membership.
  pub fn toggle_visited(&mut self, id: &str) -> Result<bool> {
    let member = toggle(&mut self.visited, id);
    debug!(place_id = id, member, "toggled visited");
    self.observers.emit(&StoreEvent::VisitedChanged {
      place_id: id.to_owned(),
      member,
    });
    self.memberships.save(Membership::Visited, &self.visited)?;
    Ok(member)
  }

  /// Append `review` to the place with `place_id` and recompute its rating
  /// and review count.
  ///
  /// The reviewed place is replaced by a new `Arc`; every other place keeps
  /// its existing `Arc`. Should several places share the id, each receives
  /// the review. Returns `Ok(false)` without touching memory or storage when
  /// no place has the id.
  pub fn add_review(
    &mut self,
    place_id: &str,
    review: ReviewRecord,
  ) -> Result<bool> {
    let mut found = false;
    for slot in self.places.iter_mut().filter(|p| p.id == place_id) {
      *slot = Arc::new(slot.with_review(review.clone()));
      found = true;
    }
    if !found {
      debug!(place_id, "review for unknown place ignored");
      return Ok(false);
    }

    debug!(place_id, review_id = %review.id, "added review");
    self.observers.emit(&StoreEvent::PlacesChanged {
      place_id: place_id.to_owned(),
    });
    self.session.save(&self.places)?;
    Ok(true)
  }

  /// Append `place` to the collection as-is. The caller picks a unique id.
  pub fn add_place(&mut self, place: PlaceRecord) -> Result<()> {
    let place_id = place.id.clone();
    self.places.push(Arc::new(place));
    debug!(%place_id, total = self.places.len(), "added place");
    self
      .observers
      .emit(&StoreEvent::PlacesChanged { place_id });
    self.session.save(&self.places)
  }

  /// End the session: clear the short-lived scope and start over from
  /// `seed`, exactly as if the store had been opened on an empty session.
  /// Favourites, visited, and subscriptions are kept.
  pub fn end_session(
    &mut self,
    seed: &(impl SeedSource + ?Sized),
  ) -> Result<()> {
    self.session.clear()?;
    self.places = seed.seed_places().into_iter().map(Arc::new).collect();
    self.origin = PlacesOrigin::Seeded;
    info!(places = self.places.len(), "session ended; reseeded");
    self.observers.emit(&StoreEvent::SessionEnded);
    self.session.save(&self.places)
  }

  /// Give back both storage scopes.
  pub fn into_storages(self) -> (L, S) {
    (self.memberships.into_inner(), self.session.into_inner())
  }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn load_ids<L: KeyValueStorage>(
  repo: &MembershipRepository<L>,
  set: Membership,
) -> Result<Vec<String>> {
  Ok(match repo.load(set)? {
    Stored::Found(ids) => {
      let mut unique: Vec<String> = Vec::with_capacity(ids.len());
      for id in ids {
        if !unique.contains(&id) {
          unique.push(id);
        }
      }
      unique
    }
    Stored::Absent => Vec::new(),
    Stored::Malformed(e) => {
      warn!(key = set.key(), error = %e, "stored id set is unreadable; starting empty");
      Vec::new()
    }
  })
}

/// Remove `id` if present, else append it. Returns the new membership.
fn toggle(set: &mut Vec<String>, id: &str) -> bool {
  if let Some(pos) = set.iter().position(|x| x == id) {
    set.remove(pos);
    false
  } else {
    set.push(id.to_owned());
    true
  }
}
