//! Identity-provider capability.
//!
//! A narrow trait over the identity provider plus a lazy iterator that
//! walks the paginated user listing.

use std::collections::BTreeMap;

use crate::core::types::{AccessKeyMeta, UserPage};
use crate::error::ProviderError;

pub mod aws;

pub use aws::AwsIdentityProvider;

/// Capability trait over the identity provider.
///
/// Every method failure is fatal for the run; implementations map
/// transport errors into `ProviderError` and the caller propagates.
pub trait IdentityProvider {
    /// Fetch one page of user names.
    ///
    /// `marker` is the continuation token returned with the previous
    /// page, or `None` for the first page.
    fn list_users(&self, marker: Option<&str>) -> Result<UserPage, ProviderError>;

    /// Fetch the tag set from a user's detail record.
    fn user_tags(&self, user_name: &str) -> Result<BTreeMap<String, String>, ProviderError>;

    /// List a user's access keys.
    fn list_access_keys(&self, user_name: &str) -> Result<Vec<AccessKeyMeta>, ProviderError>;

    /// Set an access key's status to inactive.
    fn deactivate_key(&self, user_name: &str, key_id: &str) -> Result<(), ProviderError>;
}

/// Lazy iterator over every user name in the account.
///
/// Follows continuation markers until the provider reports no further
/// page, yielding each user exactly once. A listing failure is yielded
/// as the final item and ends the iteration.
pub struct Users<'a> {
    provider: &'a dyn IdentityProvider,
    page: std::vec::IntoIter<String>,
    marker: Option<String>,
    state: PageState,
}

enum PageState {
    /// The next page must be fetched (first page, or follow `marker`).
    Fetch,
    /// The current page is the last one.
    Last,
    /// A listing call failed; iteration is over.
    Failed,
}

impl<'a> Users<'a> {
    pub fn new(provider: &'a dyn IdentityProvider) -> Self {
        Self {
            provider,
            page: Vec::new().into_iter(),
            marker: None,
            state: PageState::Fetch,
        }
    }
}

impl Iterator for Users<'_> {
    type Item = Result<String, ProviderError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(user) = self.page.next() {
                return Some(Ok(user));
            }

            match self.state {
                PageState::Fetch => match self.provider.list_users(self.marker.as_deref()) {
                    Ok(page) => {
                        self.marker = page.next_marker;
                        self.state = if self.marker.is_some() {
                            PageState::Fetch
                        } else {
                            PageState::Last
                        };
                        self.page = page.users.into_iter();
                    }
                    Err(e) => {
                        self.state = PageState::Failed;
                        return Some(Err(e));
                    }
                },
                PageState::Last | PageState::Failed => return None,
            }
        }
    }
}
