//! Best-effort reminder dispatch.
//!
//! Never lets a mail problem escape: a missing sender address, an
//! invalid sender address, and any send failure all degrade to logged
//! warnings while the run continues.

use tracing::{info, warn};

use crate::core::constants::ENV_SOURCE_MAIL;
use crate::core::mail::{Mailer, OutboundMail};
use crate::core::validation;

/// Dispatches rotation reminders through the mail capability.
pub struct Notifier {
    source: Option<String>,
    mailer: Box<dyn Mailer>,
}

impl Notifier {
    /// `source` is the configured sender address, if any.
    pub fn new(source: Option<String>, mailer: Box<dyn Mailer>) -> Self {
        Self { source, mailer }
    }

    /// Send one rotation reminder.
    ///
    /// Returns whether the message was handed to the mail provider
    /// successfully. The recipient address is used as-is.
    pub fn notify(&self, contact: &str, key_id: &str) -> bool {
        let source = match &self.source {
            Some(source) => source,
            None => {
                warn!(
                    "{} not set, reminder for key {} not sent",
                    ENV_SOURCE_MAIL, key_id
                );
                return false;
            }
        };

        if let Err(e) = validation::validate_sender_address(source) {
            warn!("{}", e);
            warn!("reminders will not be sent");
            return false;
        }

        let mail = OutboundMail {
            from: source.clone(),
            to: contact.to_string(),
            subject: format!("Rotate your AWS credentials (key {})", key_id),
            body: format!(
                "Dear {},\n\n\
                 Please rotate your AWS access key immediately.\n\
                 It will be disabled shortly otherwise.\n\n\
                 Your keywarden service",
                contact
            ),
        };

        match self.mailer.send(&mail) {
            Ok(()) => {
                info!(contact = %contact, key_id = %key_id, "rotation reminder sent");
                true
            }
            Err(e) => {
                warn!("reminder could not be sent: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MailError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder {
        outbox: Rc<RefCell<Vec<OutboundMail>>>,
        fail: bool,
    }

    impl Mailer for Recorder {
        fn send(&self, mail: &OutboundMail) -> Result<(), MailError> {
            if self.fail {
                return Err(MailError::SendFailed("smtp unreachable".to_string()));
            }
            self.outbox.borrow_mut().push(mail.clone());
            Ok(())
        }
    }

    #[test]
    fn test_sends_with_valid_source() {
        let recorder = Recorder::default();
        let notifier = Notifier::new(
            Some("ops@example.com".to_string()),
            Box::new(recorder.clone()),
        );

        assert!(notifier.notify("alice@x.com", "AKIAEXAMPLE"));

        let outbox = recorder.outbox.borrow();
        assert_eq!(outbox.len(), 1);
        assert_eq!(outbox[0].from, "ops@example.com");
        assert_eq!(outbox[0].to, "alice@x.com");
        assert!(outbox[0].subject.contains("AKIAEXAMPLE"));
        assert!(outbox[0].body.contains("alice@x.com"));
    }

    #[test]
    fn test_no_source_no_send() {
        let recorder = Recorder::default();
        let notifier = Notifier::new(None, Box::new(recorder.clone()));

        assert!(!notifier.notify("alice@x.com", "AKIAEXAMPLE"));
        assert!(recorder.outbox.borrow().is_empty());
    }

    #[test]
    fn test_invalid_source_no_send() {
        let recorder = Recorder::default();
        let notifier = Notifier::new(
            Some("not-an-email".to_string()),
            Box::new(recorder.clone()),
        );

        assert!(!notifier.notify("alice@x.com", "AKIAEXAMPLE"));
        assert!(recorder.outbox.borrow().is_empty());
    }

    #[test]
    fn test_send_failure_is_swallowed() {
        let recorder = Recorder {
            fail: true,
            ..Default::default()
        };
        let notifier = Notifier::new(
            Some("ops@example.com".to_string()),
            Box::new(recorder.clone()),
        );

        // Returns false, does not panic or propagate.
        assert!(!notifier.notify("alice@x.com", "AKIAEXAMPLE"));
    }
}
