//! AWS IAM identity provider.
//!
//! Drives the async AWS SDK from synchronous code through a
//! current-thread runtime. Credentials come from the default provider
//! chain (environment, shared profile, instance role).

use std::collections::BTreeMap;

use aws_sdk_iam::types::StatusType;
use chrono::{DateTime, Utc};
use tracing::debug;

use super::IdentityProvider;
use crate::core::types::{AccessKeyMeta, KeyStatus, UserPage};
use crate::error::ProviderError;

pub struct AwsIdentityProvider {
    rt: tokio::runtime::Runtime,
    client: aws_sdk_iam::Client,
}

impl AwsIdentityProvider {
    /// Connect using the default AWS credential chain.
    pub fn connect() -> Result<Self, ProviderError> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ProviderError::Runtime(e.to_string()))?;

        let config =
            rt.block_on(aws_config::load_defaults(aws_config::BehaviorVersion::latest()));
        let client = aws_sdk_iam::Client::new(&config);

        Ok(Self { rt, client })
    }
}

impl IdentityProvider for AwsIdentityProvider {
    fn list_users(&self, marker: Option<&str>) -> Result<UserPage, ProviderError> {
        self.rt.block_on(async {
            let mut request = self.client.list_users();
            if let Some(marker) = marker {
                request = request.marker(marker);
            }

            let response = request
                .send()
                .await
                .map_err(|e| ProviderError::ListUsers(e.to_string()))?;

            let users: Vec<String> = response
                .users()
                .iter()
                .map(|u| u.user_name().to_string())
                .collect();

            // The marker is only meaningful while the listing is truncated.
            let next_marker = if response.is_truncated() {
                response.marker().map(str::to_string)
            } else {
                None
            };

            debug!(
                count = users.len(),
                truncated = next_marker.is_some(),
                "fetched user page"
            );

            Ok(UserPage { users, next_marker })
        })
    }

    fn user_tags(&self, user_name: &str) -> Result<BTreeMap<String, String>, ProviderError> {
        self.rt.block_on(async {
            let response = self
                .client
                .get_user()
                .user_name(user_name)
                .send()
                .await
                .map_err(|e| ProviderError::GetUser {
                    user: user_name.to_string(),
                    reason: e.to_string(),
                })?;

            let tags = response
                .user()
                .map(|user| {
                    user.tags()
                        .iter()
                        .map(|tag| (tag.key().to_string(), tag.value().to_string()))
                        .collect()
                })
                .unwrap_or_default();

            Ok(tags)
        })
    }

    fn list_access_keys(&self, user_name: &str) -> Result<Vec<AccessKeyMeta>, ProviderError> {
        self.rt.block_on(async {
            let response = self
                .client
                .list_access_keys()
                .user_name(user_name)
                .send()
                .await
                .map_err(|e| ProviderError::ListAccessKeys {
                    user: user_name.to_string(),
                    reason: e.to_string(),
                })?;

            let mut keys = Vec::new();
            for meta in response.access_key_metadata() {
                let key_id = meta.access_key_id().unwrap_or_default().to_string();
                let status = match meta.status() {
                    Some(StatusType::Active) => KeyStatus::Active,
                    _ => KeyStatus::Inactive,
                };
                let created_at = meta
                    .create_date()
                    .and_then(to_utc)
                    .ok_or_else(|| ProviderError::MissingCreateDate(key_id.clone()))?;

                keys.push(AccessKeyMeta {
                    key_id,
                    status,
                    created_at,
                });
            }

            Ok(keys)
        })
    }

    fn deactivate_key(&self, user_name: &str, key_id: &str) -> Result<(), ProviderError> {
        self.rt.block_on(async {
            self.client
                .update_access_key()
                .user_name(user_name)
                .access_key_id(key_id)
                .status(StatusType::Inactive)
                .send()
                .await
                .map_err(|e| ProviderError::DeactivateKey {
                    key_id: key_id.to_string(),
                    reason: e.to_string(),
                })?;

            Ok(())
        })
    }
}

/// Convert an SDK timestamp into an explicit UTC instant.
fn to_utc(timestamp: &aws_sdk_iam::primitives::DateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp.secs(), timestamp.subsec_nanos())
}
