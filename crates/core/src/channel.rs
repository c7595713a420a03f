//! Ride channel message log
//!
//! The append-only, chronologically ordered store of messages for one
//! ride. All mutation funnels through `append`; readers only ever see an
//! immutable slice in append order.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::models::{Classification, Message, MessageId, RideId, RideSummary, UserId, UserRole};
use crate::seed;

/// The message log scoped to one ride
#[derive(Debug, Clone)]
pub struct Channel {
    ride: RideSummary,
    /// Denormalized from the ride so classification never needs a lookup
    driver_id: UserId,
    driver_name: String,
    messages: Vec<Message>,
    next_id: u64,
}

impl Channel {
    /// Create an empty channel for a ride
    pub fn new(ride: RideSummary) -> Self {
        let driver_id = ride.driver_id.clone();
        let driver_name = ride.driver_name.clone();
        Self {
            ride,
            driver_id,
            driver_name,
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a channel pre-populated with its synthetic seed thread
    pub fn seeded(ride: RideSummary, now: DateTime<Utc>) -> Result<Self> {
        let thread = seed::departure_thread(&ride, now);
        let mut channel = Self::new(ride);
        for entry in thread {
            channel.append_at(
                entry.sender_id,
                entry.sender_name,
                entry.role,
                &entry.body,
                entry.sent_at,
            )?;
        }
        Ok(channel)
    }

    pub fn ride(&self) -> &RideSummary {
        &self.ride
    }

    pub fn ride_id(&self) -> &RideId {
        &self.ride.id
    }

    pub fn driver_id(&self) -> &UserId {
        &self.driver_id
    }

    pub fn driver_name(&self) -> &str {
        &self.driver_name
    }

    /// Messages in append order, which is also `(created_at, id)` order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn latest(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Append a new message authored now.
    ///
    /// The body is trimmed and blank bodies are rejected with `EmptyBody`.
    /// The log assigns the id, strictly greater than every existing id in
    /// the channel. This is the only mutation operation.
    pub fn append(
        &mut self,
        sender_id: UserId,
        sender_name: impl Into<String>,
        role: UserRole,
        body: &str,
    ) -> Result<&Message> {
        self.append_at(sender_id, sender_name, role, body, Utc::now())
    }

    /// Append with an explicit timestamp, used for seed history
    pub(crate) fn append_at(
        &mut self,
        sender_id: UserId,
        sender_name: impl Into<String>,
        role: UserRole,
        body: &str,
        created_at: DateTime<Utc>,
    ) -> Result<&Message> {
        let body = body.trim();
        if body.is_empty() {
            return Err(Error::EmptyBody);
        }

        // The wall clock may step backwards; the log order must not.
        let created_at = match self.messages.last() {
            Some(last) => created_at.max(last.created_at),
            None => created_at,
        };

        let message = Message {
            id: MessageId::new(self.next_id),
            sender_id,
            sender_name: sender_name.into(),
            body: body.to_string(),
            created_at,
            author_role: role,
        };
        self.next_id += 1;
        self.messages.push(message);

        crate::invariants::assert_channel_invariants(self);

        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Classify a message relative to a viewer. Total and mutually
    /// exclusive: own wins over driver, driver wins over other.
    pub fn classify(&self, message: &Message, viewer: &UserId) -> Classification {
        if &message.sender_id == viewer {
            Classification::Own
        } else if message.sender_id == self.driver_id || message.author_role.is_driver() {
            Classification::Driver
        } else {
            Classification::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveTime};

    fn make_ride() -> RideSummary {
        RideSummary {
            id: RideId::from("1"),
            origin: "UnB".to_string(),
            destination: "Shopping Conjunto Nacional".to_string(),
            departure_date: NaiveDate::from_ymd_opt(2023, 5, 20).unwrap(),
            departure_time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            driver_id: UserId::from("driver-1"),
            driver_name: "Carlos Silva".to_string(),
            rating: 4.8,
            price: 15.0,
            seats: 3,
            region: None,
        }
    }

    fn append_as(channel: &mut Channel, id: &str, name: &str, body: &str) -> MessageId {
        channel
            .append(UserId::from(id), name, UserRole::Passenger, body)
            .unwrap()
            .id
    }

    #[test]
    fn test_ids_strictly_increasing_and_unique() {
        let mut channel = Channel::new(make_ride());
        let a = append_as(&mut channel, "user-123", "Test User", "primeira");
        let b = append_as(&mut channel, "user-456", "Ana Paula", "segunda");
        let c = append_as(&mut channel, "user-123", "Test User", "terceira");

        assert!(a < b && b < c);
        let mut ids: Vec<_> = channel.messages().iter().map(|m| m.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_append_order_is_chronological() {
        let mut channel = Channel::new(make_ride());
        for i in 0..5 {
            append_as(&mut channel, "user-123", "Test User", &format!("msg {}", i));
        }

        for pair in channel.messages().windows(2) {
            assert!(
                (pair[0].created_at, pair[0].id) < (pair[1].created_at, pair[1].id)
            );
        }
    }

    #[test]
    fn test_clock_regression_does_not_reorder() {
        let now = Utc::now();
        let mut channel = Channel::new(make_ride());
        channel
            .append_at(
                UserId::from("user-123"),
                "Test User",
                UserRole::Passenger,
                "primeira",
                now,
            )
            .unwrap();
        // Simulates the wall clock stepping backwards between appends
        channel
            .append_at(
                UserId::from("user-456"),
                "Ana Paula",
                UserRole::Passenger,
                "segunda",
                now - Duration::minutes(5),
            )
            .unwrap();

        let messages = channel.messages();
        assert_eq!(messages[0].body, "primeira");
        assert!(messages[0].created_at <= messages[1].created_at);
        assert!(messages[0].id < messages[1].id);
    }

    #[test]
    fn test_body_is_trimmed() {
        let mut channel = Channel::new(make_ride());
        let message = channel
            .append(
                UserId::from("user-123"),
                "Test User",
                UserRole::Passenger,
                "  Posso ir também?  ",
            )
            .unwrap();
        assert_eq!(message.body, "Posso ir também?");
    }

    #[test]
    fn test_blank_body_rejected() {
        let mut channel = Channel::new(make_ride());
        for body in ["", "   ", "\t\n"] {
            let err = channel
                .append(UserId::from("user-123"), "Test User", UserRole::Passenger, body)
                .unwrap_err();
            assert!(matches!(err, Error::EmptyBody));
        }
        assert!(channel.is_empty());
    }

    #[test]
    fn test_classify_is_exclusive_and_total() {
        let mut channel = Channel::seeded(make_ride(), Utc::now()).unwrap();
        append_as(&mut channel, "user-123", "Test User", "Posso ir também?");

        let viewer = UserId::from("user-123");
        for message in channel.messages() {
            let classification = channel.classify(message, &viewer);
            match classification {
                Classification::Own => assert_eq!(message.sender_id, viewer),
                Classification::Driver => {
                    assert_ne!(message.sender_id, viewer);
                    assert!(message.author_role.is_driver());
                }
                Classification::Other => {
                    assert_ne!(message.sender_id, viewer);
                    assert!(!message.author_role.is_driver());
                }
            }
        }
    }

    #[test]
    fn test_own_wins_over_driver() {
        let mut channel = Channel::new(make_ride());
        channel
            .append(
                UserId::from("driver-1"),
                "Carlos Silva",
                UserRole::Driver,
                "Olá!",
            )
            .unwrap();

        let message = &channel.messages()[0];
        let as_driver = channel.classify(message, &UserId::from("driver-1"));
        let as_rider = channel.classify(message, &UserId::from("user-123"));
        assert_eq!(as_driver, Classification::Own);
        assert_eq!(as_rider, Classification::Driver);
    }

    #[test]
    fn test_same_message_differs_per_viewer() {
        let mut channel = Channel::new(make_ride());
        append_as(&mut channel, "user-123", "Test User", "Oi, qual o horário?");

        let message = &channel.messages()[0];
        assert_eq!(
            channel.classify(message, &UserId::from("user-123")),
            Classification::Own
        );
        assert_eq!(
            channel.classify(message, &UserId::from("user-789")),
            Classification::Other
        );
    }

    #[test]
    fn test_seeded_channel() {
        let now = Utc::now();
        let channel = Channel::seeded(make_ride(), now).unwrap();

        assert_eq!(channel.len(), 3);
        assert_eq!(channel.ride_id().as_str(), "1");
        assert_eq!(channel.driver_id(), &UserId::from("driver-1"));
        let messages = channel.messages();
        assert_eq!(messages[0].id, MessageId::new(1));
        assert_eq!(messages[2].id, MessageId::new(3));
        assert!(messages.iter().all(|m| m.created_at < now));

        let viewer = UserId::from("user-123");
        assert_eq!(channel.classify(&messages[0], &viewer), Classification::Driver);
        assert_eq!(channel.classify(&messages[1], &viewer), Classification::Other);
        assert_eq!(channel.classify(&messages[2], &viewer), Classification::Driver);
    }
}
