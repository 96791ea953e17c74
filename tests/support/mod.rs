//! Test support utilities for keywarden integration tests.
//!
//! Provides an in-memory identity provider with scripted pagination and
//! a mailer that records messages instead of sending them.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use keywarden::core::mail::{Mailer, OutboundMail};
use keywarden::core::provider::IdentityProvider;
use keywarden::core::types::{AccessKeyMeta, KeyStatus, UserPage};
use keywarden::error::{MailError, ProviderError};

/// Fixed "current time" so key ages are exact.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Creation timestamp for a key that is `days` old at `now()`.
pub fn days_ago(days: i64) -> DateTime<Utc> {
    now() - Duration::days(days)
}

/// One scripted user: name, tags, keys.
#[derive(Clone, Default)]
pub struct FakeUser {
    pub name: String,
    pub tags: BTreeMap<String, String>,
    pub keys: Vec<AccessKeyMeta>,
}

impl FakeUser {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn tag(mut self, key: &str, value: &str) -> Self {
        self.tags.insert(key.to_string(), value.to_string());
        self
    }

    pub fn contact(self, address: &str) -> Self {
        self.tag("Contact", address)
    }

    pub fn key(mut self, key_id: &str, status: KeyStatus, age_days: i64) -> Self {
        self.keys.push(AccessKeyMeta {
            key_id: key_id.to_string(),
            status,
            created_at: days_ago(age_days),
        });
        self
    }
}

/// In-memory identity provider with scripted pagination.
///
/// Markers are page indices; `deactivated` records every status update
/// the policy applies.
pub struct FakeProvider {
    pages: Vec<Vec<String>>,
    users: BTreeMap<String, FakeUser>,
    pub deactivated: RefCell<Vec<(String, String)>>,
    pub fail_listing: bool,
}

impl FakeProvider {
    /// Single-page provider over the given users.
    pub fn new(users: Vec<FakeUser>) -> Self {
        let page = users.iter().map(|u| u.name.clone()).collect();
        Self::paged(users, vec![page])
    }

    /// Provider serving user names in the given page layout.
    pub fn paged(users: Vec<FakeUser>, pages: Vec<Vec<String>>) -> Self {
        Self {
            pages,
            users: users.into_iter().map(|u| (u.name.clone(), u)).collect(),
            deactivated: RefCell::new(Vec::new()),
            fail_listing: false,
        }
    }

    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }
}

impl IdentityProvider for FakeProvider {
    fn list_users(&self, marker: Option<&str>) -> Result<UserPage, ProviderError> {
        if self.fail_listing {
            return Err(ProviderError::ListUsers("scripted failure".to_string()));
        }

        let index: usize = marker.map(|m| m.parse().unwrap()).unwrap_or(0);
        let users = self.pages.get(index).cloned().unwrap_or_default();
        let next_marker = if index + 1 < self.pages.len() {
            Some((index + 1).to_string())
        } else {
            None
        };

        Ok(UserPage { users, next_marker })
    }

    fn user_tags(&self, user_name: &str) -> Result<BTreeMap<String, String>, ProviderError> {
        Ok(self
            .users
            .get(user_name)
            .map(|u| u.tags.clone())
            .unwrap_or_default())
    }

    fn list_access_keys(&self, user_name: &str) -> Result<Vec<AccessKeyMeta>, ProviderError> {
        Ok(self
            .users
            .get(user_name)
            .map(|u| u.keys.clone())
            .unwrap_or_default())
    }

    fn deactivate_key(&self, user_name: &str, key_id: &str) -> Result<(), ProviderError> {
        self.deactivated
            .borrow_mut()
            .push((user_name.to_string(), key_id.to_string()));
        Ok(())
    }
}

/// Mailer that records every message instead of sending.
///
/// Clones share the same outbox, so a clone can be boxed into a
/// `Notifier` while the test keeps the original for assertions.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    pub outbox: Rc<RefCell<Vec<OutboundMail>>>,
    pub fail: bool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<OutboundMail> {
        self.outbox.borrow().clone()
    }
}

impl Mailer for RecordingMailer {
    fn send(&self, mail: &OutboundMail) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::SendFailed("scripted failure".to_string()));
        }
        self.outbox.borrow_mut().push(mail.clone());
        Ok(())
    }
}
