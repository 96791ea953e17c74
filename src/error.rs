use thiserror::Error;

/// Top-level error type for keywarden operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Startup configuration failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("NOTIFYKEYAGE is not a number of days: {0:?}")]
    InvalidNotifyAge(String),

    #[error("NOTIFYKEYAGE must not be negative: {0}")]
    NegativeNotifyAge(i64),
}

/// Identity-provider call failures.
///
/// Any of these aborts the run: the remaining classification and
/// notification work is skipped and the process exits nonzero.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("failed to start provider runtime: {0}")]
    Runtime(String),

    #[error("listing users failed: {0}")]
    ListUsers(String),

    #[error("reading user {user} failed: {reason}")]
    GetUser { user: String, reason: String },

    #[error("listing access keys for {user} failed: {reason}")]
    ListAccessKeys { user: String, reason: String },

    #[error("deactivating access key {key_id} failed: {reason}")]
    DeactivateKey { key_id: String, reason: String },

    #[error("access key {0} has no creation timestamp")]
    MissingCreateDate(String),
}

/// Mail capability failures.
///
/// Never fatal; the notifier logs these and moves on.
#[derive(Error, Debug)]
pub enum MailError {
    #[error("send failed: {0}")]
    SendFailed(String),
}

/// Input validation failures.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid sender address {addr:?}: {reason}")]
    InvalidSenderAddress { addr: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
