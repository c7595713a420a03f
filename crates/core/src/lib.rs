//! UniDriver Core Library
//!
//! Models, ride catalog, message log, and channel orchestration for the
//! UniDriver ride-sharing platform.

pub mod catalog;
pub mod channel;
pub mod controller;
pub mod error;
pub mod identity;
pub mod invariants;
pub mod models;
pub mod registry;
pub mod seed;

pub use catalog::{CatalogError, RideCatalog, StaticCatalog};
pub use channel::Channel;
pub use controller::{ChatController, RenderEntry, RenderFrame, RenderSink};
pub use error::{Error, Result};
pub use models::*;
pub use registry::ChannelRegistry;
