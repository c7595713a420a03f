//! Channel registry: one materialized channel per ride
//!
//! Channels are created and seeded the first time their ride is opened
//! and live for the session. Reopening a ride returns the same channel
//! rather than re-seeding, so history is never duplicated on re-render.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::Utc;

use crate::catalog::RideCatalog;
use crate::channel::Channel;
use crate::error::{Error, Result};
use crate::models::RideId;

pub struct ChannelRegistry<C> {
    catalog: C,
    channels: HashMap<RideId, Channel>,
}

impl<C: RideCatalog> ChannelRegistry<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            channels: HashMap::new(),
        }
    }

    /// Open the channel for a ride, materializing and seeding it on first
    /// use. Unknown rides fail with `RideNotFound` and create nothing.
    pub fn open(&mut self, ride_id: &RideId) -> Result<&mut Channel> {
        match self.channels.entry(ride_id.clone()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(slot) => {
                let ride = self
                    .catalog
                    .ride(ride_id)
                    .ok_or_else(|| Error::RideNotFound(ride_id.clone()))?;
                let channel = Channel::seeded(ride, Utc::now())?;
                tracing::info!(
                    ride_id = %ride_id,
                    seed_count = channel.len(),
                    "Materialized ride channel"
                );
                Ok(slot.insert(channel))
            }
        }
    }

    /// Get an already materialized channel without loading
    pub fn get(&self, ride_id: &RideId) -> Option<&Channel> {
        self.channels.get(ride_id)
    }

    pub fn contains(&self, ride_id: &RideId) -> bool {
        self.channels.contains_key(ride_id)
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
