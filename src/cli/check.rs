//! Report-only classification.
//!
//! Builds the inventory and classifies every key against the configured
//! thresholds without deactivating anything or sending mail.

use chrono::Utc;
use serde::Serialize;

use crate::cli::output;
use crate::core::config::PolicyConfig;
use crate::core::inventory;
use crate::core::policy::{AgeThresholds, KeyAction};
use crate::core::provider::AwsIdentityProvider;
use crate::core::types::KeyStatus;
use crate::error::Result;

#[derive(Serialize)]
struct ReportEntry {
    user: String,
    key_id: String,
    status: KeyStatus,
    age_days: i64,
    action: KeyAction,
}

/// Classify every key and print the report.
pub fn execute(json: bool) -> Result<()> {
    let config = PolicyConfig::from_env()?;
    let thresholds = AgeThresholds::from_notify_days(config.notify_after_days);
    let now = Utc::now();

    let provider = AwsIdentityProvider::connect()?;
    let inventory = inventory::collect(&provider)?;

    let mut entries = Vec::new();
    for owner in &inventory {
        for key in &owner.keys {
            // Inactive keys are reported but never acted on.
            let action = if key.status == KeyStatus::Active {
                thresholds.classify(key.created_at, now)
            } else {
                KeyAction::InPolicy
            };

            entries.push(ReportEntry {
                user: owner.user_name.clone(),
                key_id: key.key_id.clone(),
                status: key.status,
                age_days: (now - key.created_at).num_days(),
                action,
            });
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        output::dimmed("no access keys found");
        return Ok(());
    }

    output::section("Key age report");
    for entry in &entries {
        let state = match (entry.status, entry.action) {
            (KeyStatus::Inactive, _) => "inactive, ignored".to_string(),
            (_, KeyAction::Notify) => format!("{} days old, due for rotation", entry.age_days),
            (_, KeyAction::Deactivate) => {
                format!("{} days old, past grace window", entry.age_days)
            }
            (_, KeyAction::InPolicy) => format!("{} days old, within policy", entry.age_days),
        };
        output::kv(&format!("{} / {}", entry.user, entry.key_id), state);
    }

    Ok(())
}
