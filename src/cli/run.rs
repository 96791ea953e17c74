//! Full enforcement pass. This is the scheduler entry point.

use chrono::Utc;

use crate::cli::output;
use crate::core::config::PolicyConfig;
use crate::core::mail::SesMailer;
use crate::core::notify::Notifier;
use crate::core::policy::{self, AgeThresholds};
use crate::core::provider::AwsIdentityProvider;
use crate::error::Result;

/// Run one enforcement pass against the account.
pub fn execute() -> Result<()> {
    let config = PolicyConfig::from_env()?;
    let thresholds = AgeThresholds::from_notify_days(config.notify_after_days);

    let provider = AwsIdentityProvider::connect()?;
    let notifier = Notifier::new(config.source_mail, Box::new(SesMailer));

    let summary = policy::enforce(&provider, &notifier, &thresholds, Utc::now())?;

    output::section("Key age policy");
    output::kv(
        "notify after",
        format!("{} days", thresholds.notify_after_days()),
    );
    output::kv(
        "deactivate after",
        format!("{} days", thresholds.deactivate_after_days()),
    );
    output::kv("active keys scanned", summary.scanned);
    output::kv("reminders sent", summary.notified);
    output::kv("missing contact", summary.missing_contact);
    output::kv("keys deactivated", summary.deactivated);
    output::success("policy pass complete");

    Ok(())
}
