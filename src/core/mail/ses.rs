//! AWS SES mail sender.
//!
//! Builds the runtime and client per send. Reminder volume is a handful
//! of messages per run, and keeping the sender stateless lets every
//! failure flow through `MailError` to the dispatch site.

use aws_sdk_ses::types::{Body, Content, Destination, Message};

use super::{Mailer, OutboundMail};
use crate::error::MailError;

pub struct SesMailer;

impl Mailer for SesMailer {
    fn send(&self, mail: &OutboundMail) -> Result<(), MailError> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| MailError::SendFailed(format!("failed to create runtime: {}", e)))?;

        rt.block_on(async {
            let config =
                aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = aws_sdk_ses::Client::new(&config);

            let subject = Content::builder()
                .data(mail.subject.as_str())
                .build()
                .map_err(|e| MailError::SendFailed(e.to_string()))?;
            let text = Content::builder()
                .data(mail.body.as_str())
                .build()
                .map_err(|e| MailError::SendFailed(e.to_string()))?;
            let message = Message::builder()
                .subject(subject)
                .body(Body::builder().text(text).build())
                .build();

            client
                .send_email()
                .source(mail.from.as_str())
                .destination(
                    Destination::builder()
                        .to_addresses(mail.to.as_str())
                        .build(),
                )
                .message(message)
                .send()
                .await
                .map_err(|e| MailError::SendFailed(e.to_string()))?;

            Ok(())
        })
    }
}
