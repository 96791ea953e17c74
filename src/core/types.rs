//! Domain types for the key inventory.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Status of an access key as reported by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStatus {
    Active,
    Inactive,
}

/// One access key as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessKeyMeta {
    pub key_id: String,
    pub status: KeyStatus,
    pub created_at: DateTime<Utc>,
}

/// All access keys of one user, with the resolved contact address.
///
/// Users without keys never appear in the inventory. `contact` is empty
/// when the user carries no contact tag.
#[derive(Debug, Clone)]
pub struct UserKeys {
    pub user_name: String,
    pub contact: String,
    pub keys: Vec<AccessKeyMeta>,
}

/// One page of user names from the identity provider.
#[derive(Debug, Clone)]
pub struct UserPage {
    pub users: Vec<String>,
    /// Continuation marker; `None` on the last page.
    pub next_marker: Option<String>,
}

/// Counters for one enforcement pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Active keys inspected.
    pub scanned: usize,
    /// Reminders handed to the mail provider.
    pub notified: usize,
    /// Reminders skipped because the owner has no contact address.
    pub missing_contact: usize,
    /// Keys disabled for exceeding the deactivate threshold.
    pub deactivated: usize,
}
