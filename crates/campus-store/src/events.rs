//! Change notifications emitted by the store.

use std::fmt;

/// What changed. Emitted once per effective mutation; a mutation that turns
/// out to be a no-op emits nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
  /// The place collection changed (a place was added or reviewed).
  PlacesChanged { place_id: String },
  FavoritesChanged { place_id: String, member: bool },
  VisitedChanged { place_id: String, member: bool },
  /// The short-lived scope was cleared and the collection reseeded.
  SessionEnded,
}

/// Handle returned by [`crate::AppStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

#[derive(Default)]
pub(crate) struct Observers {
  next_id:   u64,
  listeners: Vec<(SubscriptionId, Listener)>,
}

impl Observers {
  pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
    let id = SubscriptionId(self.next_id);
    self.next_id += 1;
    self.listeners.push((id, listener));
    id
  }

  pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
    let before = self.listeners.len();
    self.listeners.retain(|(lid, _)| *lid != id);
    self.listeners.len() != before
  }

  /// Listeners run in subscription order.
  pub fn emit(&mut self, event: &StoreEvent) {
    for (_, listener) in &mut self.listeners {
      listener(event);
    }
  }
}

impl fmt::Debug for Observers {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Observers")
      .field("listeners", &self.listeners.len())
      .finish()
  }
}
