//! Review records. Reviews are append-only: once attached to a place they
//! are never edited or removed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// There is no authentication; every submission is attributed to this user.
pub const CURRENT_USER_ID: &str = "current-user";
pub const CURRENT_USER_NAME: &str = "You";

/// One user's review of one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
  pub id:        String,
  pub user_id:   String,
  pub user_name: String,
  /// 1 through 5 inclusive.
  pub rating:    u8,
  pub comment:   String,
  /// Calendar date of submission, serialised as `YYYY-MM-DD`.
  pub date:      NaiveDate,
}
