//! Constants used throughout keywarden.
//!
//! Centralizes magic strings and policy values.

/// Environment variable holding the notify threshold in days.
pub const ENV_NOTIFY_AGE: &str = "NOTIFYKEYAGE";

/// Environment variable holding the reminder sender address.
pub const ENV_SOURCE_MAIL: &str = "SOURCEMAIL";

/// Notify threshold applied when NOTIFYKEYAGE is not set.
pub const DEFAULT_NOTIFY_AGE_DAYS: i64 = 30;

/// Days between the notify threshold and forced deactivation.
pub const GRACE_PERIOD_DAYS: i64 = 7;

/// User tag holding the owner's contact address.
pub const CONTACT_TAG: &str = "Contact";
