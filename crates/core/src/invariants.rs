//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use crate::channel::Channel;
use crate::models::{Account, UserIdentity};

/// Validate that a channel's log is internally consistent
pub fn assert_channel_invariants(channel: &Channel) {
    debug_assert!(
        !channel.driver_name().trim().is_empty(),
        "Channel {} has empty driver name",
        channel.ride_id()
    );

    let messages = channel.messages();
    for pair in messages.windows(2) {
        debug_assert!(
            pair[0].id < pair[1].id,
            "Channel {} ids out of order: {} then {}",
            channel.ride_id(),
            pair[0].id,
            pair[1].id
        );
        debug_assert!(
            pair[0].created_at <= pair[1].created_at,
            "Channel {} timestamps regress at message {}",
            channel.ride_id(),
            pair[1].id
        );
    }

    for message in messages {
        debug_assert!(
            !message.body.trim().is_empty(),
            "Channel {} message {} has blank body",
            channel.ride_id(),
            message.id
        );
    }
}

/// Validate that an account can act as a message author
pub fn assert_account_valid(account: &Account) {
    debug_assert!(
        !account.id.as_str().is_empty(),
        "Account has empty id"
    );

    debug_assert!(
        !account.name.trim().is_empty(),
        "Account {} has empty name",
        account.id
    );
}

/// Validate a resolved viewer identity
pub fn assert_identity_valid(identity: &UserIdentity) {
    debug_assert!(
        !identity.id.as_str().is_empty(),
        "Identity has empty id"
    );

    debug_assert!(
        !identity.display_name.trim().is_empty(),
        "Identity {} has empty display name",
        identity.id
    );
}
