//! The campus study-place store.
//!
//! [`AppStore`] owns the working place collection and the favourite and
//! visited id sets, and keeps them in sync with two [`KeyValueStorage`]
//! scopes. Screens read from it and call its mutation methods; they never
//! touch storage directly.
//!
//! [`KeyValueStorage`]: campus_core::storage::KeyValueStorage

mod events;
mod memory;
mod profile;
mod repository;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use events::{StoreEvent, SubscriptionId};
pub use memory::MemoryStorage;
pub use profile::{NotificationKind, NotificationPreferences, ProfileSettings};
pub use repository::{Membership, MembershipRepository, PlaceRepository};
pub use store::{ActivityStats, AppStore, PlacesOrigin};
