//! Identity resolution for message classification

use crate::error::{Error, Result};
use crate::models::{Account, UserIdentity};

/// Resolve the signed-in account into the stable triple used to classify
/// messages. Route protection upstream guarantees a user is present;
/// reaching this without one is a contract violation, not a user error.
pub fn resolve(account: Option<&Account>) -> Result<UserIdentity> {
    let account = account.ok_or_else(|| {
        Error::Unauthenticated("ride chat opened with no signed-in user".to_string())
    })?;

    crate::invariants::assert_account_valid(account);

    Ok(UserIdentity {
        id: account.id.clone(),
        display_name: account.name.clone(),
        role: account.role,
    })
}
