//! Data models for UniDriver

mod user;
mod ride;
mod message;

pub use user::*;
pub use ride::*;
pub use message::*;
