//! Access key inventory.
//!
//! Walks every identity user, resolves the contact address from the
//! user's tags, and lists the user's access keys. Users without keys are
//! omitted from the inventory entirely.

use tracing::{debug, warn};

use crate::core::constants::CONTACT_TAG;
use crate::core::provider::{IdentityProvider, Users};
use crate::core::types::UserKeys;
use crate::error::Result;

/// Build the full key inventory for the account.
pub fn collect(provider: &dyn IdentityProvider) -> Result<Vec<UserKeys>> {
    let mut inventory = Vec::new();

    for user_name in Users::new(provider) {
        let user_name = user_name?;
        let contact = resolve_contact(provider, &user_name)?;
        let keys = provider.list_access_keys(&user_name)?;

        if keys.is_empty() {
            debug!(user = %user_name, "no access keys, skipping");
            continue;
        }

        inventory.push(UserKeys {
            user_name,
            contact,
            keys,
        });
    }

    Ok(inventory)
}

/// Resolve the contact address from the user's tags.
///
/// Returns an empty string when the tag is absent. The value is not
/// checked for mail syntax; only the sender address is validated, and
/// only at dispatch time.
fn resolve_contact(provider: &dyn IdentityProvider, user_name: &str) -> Result<String> {
    let tags = provider.user_tags(user_name)?;

    match tags.get(CONTACT_TAG) {
        Some(contact) => Ok(contact.clone()),
        None => {
            warn!(user = %user_name, "contact details for user not provided");
            Ok(String::new())
        }
    }
}
