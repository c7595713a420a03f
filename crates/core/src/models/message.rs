//! Message model for ride channel chat

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{UserId, UserRole};

/// Log-assigned message identifier, strictly increasing within a channel
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MessageId(u64);

impl MessageId {
    pub(crate) const fn new(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A chat message in a ride channel, immutable once appended
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender_id: UserId,
    /// Name captured at authorship time, never re-resolved
    pub sender_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    /// Role captured at authorship time; stays accurate if the sender's
    /// role changes later
    pub author_role: UserRole,
}

impl Message {
    pub fn format_timestamp(&self) -> String {
        self.created_at.format("%H:%M").to_string()
    }

    pub fn format_date(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }
}

/// Viewer-relative category of a message, used only for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Authored by the viewer
    Own,
    /// Authored by the ride's driver
    Driver,
    /// Authored by any other participant
    Other,
}
