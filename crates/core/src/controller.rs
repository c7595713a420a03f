//! Channel view controller
//!
//! Mediates between the message log and the rendering surface: opening a
//! ride's channel, feeding viewer input into the log, and keeping the
//! newest message in view after every mutation.

use crate::catalog::RideCatalog;
use crate::error::Result;
use crate::models::{Classification, Message, RideId, RideSummary, UserIdentity};
use crate::registry::ChannelRegistry;

/// One message paired with its viewer-relative classification
#[derive(Debug, Clone)]
pub struct RenderEntry {
    pub message: Message,
    pub classification: Classification,
}

/// Full ordered view of a channel, re-emitted after every mutation
#[derive(Debug, Clone)]
pub struct RenderFrame {
    pub ride: RideSummary,
    pub entries: Vec<RenderEntry>,
}

/// Outbound contract to the rendering surface
pub trait RenderSink {
    /// Present the full ordered message list
    fn render(&mut self, frame: &RenderFrame);

    /// Bring the most recently appended message into view. Issued exactly
    /// once after every log mutation, not just on initial load.
    fn scroll_to_latest(&mut self);
}

/// Orchestrates the registry, the viewer identity, and the render sink
pub struct ChatController<C, S> {
    registry: ChannelRegistry<C>,
    viewer: UserIdentity,
    sink: S,
    current: Option<RideId>,
}

impl<C: RideCatalog, S: RenderSink> ChatController<C, S> {
    pub fn new(registry: ChannelRegistry<C>, viewer: UserIdentity, sink: S) -> Self {
        crate::invariants::assert_identity_valid(&viewer);
        Self {
            registry,
            viewer,
            sink,
            current: None,
        }
    }

    pub fn viewer(&self) -> &UserIdentity {
        &self.viewer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Open the channel for a ride and render its full history
    pub fn open(&mut self, ride_id: &RideId) -> Result<()> {
        let count = self.registry.open(ride_id)?.len();
        self.current = Some(ride_id.clone());
        tracing::debug!(ride_id = %ride_id, messages = count, "Opened ride channel");
        self.emit();
        Ok(())
    }

    /// Send viewer input to the open channel.
    ///
    /// Blank input is silently ignored: nothing is appended, nothing is
    /// rendered, and no error surfaces to the viewer.
    pub fn send(&mut self, text: &str) -> Result<()> {
        let body = text.trim();
        if body.is_empty() {
            return Ok(());
        }

        let ride_id = match &self.current {
            Some(id) => id.clone(),
            None => {
                tracing::warn!("Send with no open channel ignored");
                return Ok(());
            }
        };

        let channel = self.registry.open(&ride_id)?;
        channel.append(
            self.viewer.id.clone(),
            self.viewer.display_name.clone(),
            self.viewer.role,
            body,
        )?;
        self.emit();
        Ok(())
    }

    /// Re-emit the full ordered view plus one scroll directive
    fn emit(&mut self) {
        let ride_id = match &self.current {
            Some(id) => id,
            None => return,
        };
        let channel = match self.registry.get(ride_id) {
            Some(channel) => channel,
            None => return,
        };

        let entries = channel
            .messages()
            .iter()
            .map(|message| RenderEntry {
                message: message.clone(),
                classification: channel.classify(message, &self.viewer.id),
            })
            .collect();
        let frame = RenderFrame {
            ride: channel.ride().clone(),
            entries,
        };

        self.sink.render(&frame);
        self.sink.scroll_to_latest();
    }
}
