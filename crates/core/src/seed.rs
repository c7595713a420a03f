//! Synthetic seed history for newly opened ride channels
//!
//! A deterministic function of ride metadata and a supplied "now",
//! isolated here so a real history fetch can replace it without touching
//! the log or the controller.

use chrono::{DateTime, Duration, Utc};

use crate::models::{RideSummary, UserId, UserRole};

/// Fixed companion rider appearing in every seed thread
const COMPANION_ID: &str = "user-456";
const COMPANION_NAME: &str = "Ana Paula";

/// A seed entry before log insertion; ids are assigned by the channel
#[derive(Debug, Clone)]
pub struct SeedMessage {
    pub sender_id: UserId,
    pub sender_name: String,
    pub role: UserRole,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

/// The synthetic conversation opening every ride channel: the driver's
/// offer, a rider's question, and the driver's departure details.
/// Timestamps are strictly increasing and all earlier than `now`.
pub fn departure_thread(ride: &RideSummary, now: DateTime<Utc>) -> Vec<SeedMessage> {
    let seats_label = if ride.seats == 1 {
        "lugar disponível"
    } else {
        "lugares disponíveis"
    };

    vec![
        SeedMessage {
            sender_id: ride.driver_id.clone(),
            sender_name: ride.driver_name.clone(),
            role: UserRole::Driver,
            body: "Olá! Estou oferecendo carona. Alguém interessado?".to_string(),
            sent_at: now - Duration::minutes(60),
        },
        SeedMessage {
            sender_id: UserId::from(COMPANION_ID),
            sender_name: COMPANION_NAME.to_string(),
            role: UserRole::Passenger,
            body: "Oi! Estou interessada. Qual é o horário exato da saída?".to_string(),
            sent_at: now - Duration::minutes(50),
        },
        SeedMessage {
            sender_id: ride.driver_id.clone(),
            sender_name: ride.driver_name.clone(),
            role: UserRole::Driver,
            body: format!(
                "Saio às {} em ponto. Ainda tenho {} {}.",
                ride.format_departure_time(),
                ride.seats,
                seats_label
            ),
            sent_at: now - Duration::minutes(40),
        },
    ]
}
