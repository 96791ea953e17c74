//! Environment-driven policy configuration.
//!
//! All configuration arrives via environment variables and is resolved
//! into an explicit struct once at startup.

use std::env;

use tracing::info;

use crate::core::constants::{DEFAULT_NOTIFY_AGE_DAYS, ENV_NOTIFY_AGE, ENV_SOURCE_MAIL};
use crate::error::{ConfigError, Result};

/// Resolved policy configuration.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    /// Days before an active key's owner is reminded to rotate.
    pub notify_after_days: i64,
    /// Sender address for reminder mail; `None` disables sending.
    pub source_mail: Option<String>,
}

impl PolicyConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            env::var(ENV_NOTIFY_AGE).ok(),
            env::var(ENV_SOURCE_MAIL).ok(),
        )
    }

    /// Build the configuration from raw variable values.
    ///
    /// A missing notify age falls back to the default with an info log;
    /// a malformed or negative value is a hard error.
    pub fn from_values(notify_age: Option<String>, source_mail: Option<String>) -> Result<Self> {
        let notify_after_days = match notify_age {
            Some(raw) => {
                let days: i64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidNotifyAge(raw.clone()))?;
                if days < 0 {
                    return Err(ConfigError::NegativeNotifyAge(days).into());
                }
                days
            }
            None => {
                info!(
                    "{} not set, falling back to {} days",
                    ENV_NOTIFY_AGE, DEFAULT_NOTIFY_AGE_DAYS
                );
                DEFAULT_NOTIFY_AGE_DAYS
            }
        };

        let source_mail = source_mail.filter(|s| !s.is_empty());

        Ok(Self {
            notify_after_days,
            source_mail,
        })
    }
}
