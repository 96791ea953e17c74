//! Age thresholds and the enforcement pass.
//!
//! A key older than the notify threshold earns its owner a reminder; a
//! key older than the deactivate threshold is disabled outright. The
//! deactivate threshold always sits a fixed grace window past the notify
//! threshold.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::core::constants::GRACE_PERIOD_DAYS;
use crate::core::inventory;
use crate::core::notify::Notifier;
use crate::core::provider::IdentityProvider;
use crate::core::types::{KeyStatus, RunSummary};
use crate::error::Result;

/// The two key age boundaries, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeThresholds {
    notify_after_days: i64,
    deactivate_after_days: i64,
}

/// What the policy decides for one active key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyAction {
    /// Between the thresholds: remind the owner.
    Notify,
    /// Past the deactivate threshold: disable the key.
    Deactivate,
    /// Younger than the notify threshold: nothing to do.
    InPolicy,
}

impl AgeThresholds {
    /// Build both thresholds from the configured notify age.
    ///
    /// The deactivate threshold is not independently configurable; it is
    /// always the notify threshold plus the fixed grace window.
    pub fn from_notify_days(notify_after_days: i64) -> Self {
        Self {
            notify_after_days,
            deactivate_after_days: notify_after_days + GRACE_PERIOD_DAYS,
        }
    }

    pub fn notify_after_days(&self) -> i64 {
        self.notify_after_days
    }

    pub fn deactivate_after_days(&self) -> i64 {
        self.deactivate_after_days
    }

    /// Classify one key by its creation instant.
    ///
    /// Both cutoffs are exclusive: a key created exactly at a cutoff is
    /// treated as the younger side of it.
    pub fn classify(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> KeyAction {
        let notify_cutoff = now - Duration::days(self.notify_after_days);
        let deactivate_cutoff = now - Duration::days(self.deactivate_after_days);

        if created_at < notify_cutoff && !(created_at < deactivate_cutoff) {
            KeyAction::Notify
        } else if created_at < deactivate_cutoff {
            KeyAction::Deactivate
        } else {
            KeyAction::InPolicy
        }
    }
}

/// Run one enforcement pass over the whole account.
///
/// Inactive keys are never touched, whatever their age. Provider
/// failures abort the pass; mail failures are absorbed by the notifier.
pub fn enforce(
    provider: &dyn IdentityProvider,
    notifier: &Notifier,
    thresholds: &AgeThresholds,
    now: DateTime<Utc>,
) -> Result<RunSummary> {
    let inventory = inventory::collect(provider)?;
    let mut summary = RunSummary::default();

    for owner in &inventory {
        for key in &owner.keys {
            if key.status != KeyStatus::Active {
                continue;
            }
            summary.scanned += 1;

            match thresholds.classify(key.created_at, now) {
                KeyAction::Notify => {
                    info!(user = %owner.user_name, key_id = %key.key_id, "access key is due for rotation");
                    if owner.contact.is_empty() {
                        warn!(user = %owner.user_name, key_id = %key.key_id, "contact details for credentials not provided");
                        summary.missing_contact += 1;
                    } else if notifier.notify(&owner.contact, &key.key_id) {
                        summary.notified += 1;
                    }
                }
                KeyAction::Deactivate => {
                    // Not contact-gated: the key is disabled whether or
                    // not anyone can be told about it.
                    provider.deactivate_key(&owner.user_name, &key.key_id)?;
                    error!(key_id = %key.key_id, "access key is now disabled");
                    summary.deactivated += 1;
                }
                KeyAction::InPolicy => {}
            }
        }
    }

    Ok(summary)
}
