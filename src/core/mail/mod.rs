//! Mail capability.
//!
//! A narrow trait over the mail provider: one single-recipient plaintext
//! message at a time, sent best-effort.

use crate::error::MailError;

pub mod ses;

pub use ses::SesMailer;

/// A single-recipient plaintext message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Capability trait over the mail provider.
pub trait Mailer {
    /// Send one message.
    ///
    /// Failures carry a reason and are expected to be absorbed by the
    /// caller; nothing here retries.
    fn send(&self, mail: &OutboundMail) -> Result<(), MailError>;
}
