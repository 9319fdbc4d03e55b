//! Notification preferences kept by the profile screen.
//!
//! These share the long-lived scope with the favourite and visited sets but
//! are not part of [`crate::AppStore`].

use campus_core::storage::{KEY_NOTIFICATIONS, KeyValueStorage, StorageScope};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
  Result,
  repository::{Stored, read_json, write_json},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
  /// Alert when a favourite place gets crowded.
  pub crowdedness: bool,
  /// Alert when new places are added nearby.
  pub new_places:  bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
  Crowdedness,
  NewPlaces,
}

impl NotificationPreferences {
  pub fn get(&self, kind: NotificationKind) -> bool {
    match kind {
      NotificationKind::Crowdedness => self.crowdedness,
      NotificationKind::NewPlaces => self.new_places,
    }
  }

  fn flip(&mut self, kind: NotificationKind) {
    match kind {
      NotificationKind::Crowdedness => self.crowdedness = !self.crowdedness,
      NotificationKind::NewPlaces => self.new_places = !self.new_places,
    }
  }
}

/// Reads and writes [`NotificationPreferences`] under `notifications`.
#[derive(Debug)]
pub struct ProfileSettings<L> {
  storage: L,
}

impl<L: KeyValueStorage> ProfileSettings<L> {
  pub fn new(storage: L) -> Self { Self { storage } }

  /// Stored preferences, or all-off when nothing usable is stored.
  pub fn load(&self) -> Result<NotificationPreferences> {
    Ok(
      match read_json::<NotificationPreferences, _>(
        &self.storage,
        StorageScope::LongLived,
        KEY_NOTIFICATIONS,
      )? {
        Stored::Found(prefs) => prefs,
        Stored::Absent => NotificationPreferences::default(),
        Stored::Malformed(e) => {
          warn!(error = %e, "stored notification preferences are unreadable");
          NotificationPreferences::default()
        }
      },
    )
  }

  /// Flip one preference, persist the whole object, and return it.
  pub fn toggle(
    &mut self,
    kind: NotificationKind,
  ) -> Result<NotificationPreferences> {
    let mut prefs = self.load()?;
    prefs.flip(kind);
    write_json(
      &mut self.storage,
      StorageScope::LongLived,
      KEY_NOTIFICATIONS,
      &prefs,
    )?;
    Ok(prefs)
  }
}
