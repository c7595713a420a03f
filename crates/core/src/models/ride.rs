//! Ride offer models

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::UserId;

/// Identifier for a ride offer. Route parameters arrive as strings or
/// numerals, so both convert in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RideId(String);

impl RideId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RideId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RideId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u32> for RideId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for RideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// A published ride offer, supplied by the catalog and treated as
/// read-only input by the chat subsystem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideSummary {
    pub id: RideId,
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub driver_id: UserId,
    pub driver_name: String,
    pub rating: f32,
    /// Price per seat in R$
    pub price: f64,
    /// Free seats remaining
    pub seats: u8,
    #[serde(default)]
    pub region: Option<String>,
}

impl RideSummary {
    pub fn format_departure_time(&self) -> String {
        self.departure_time.format("%H:%M").to_string()
    }

    pub fn format_departure_date(&self) -> String {
        self.departure_date.format("%Y-%m-%d").to_string()
    }

    pub fn route(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}
