//! Error types for UniDriver Core

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::models::RideId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Ride not found: {0}")]
    RideNotFound(RideId),

    #[error("Message body is empty")]
    EmptyBody,

    #[error("No signed-in user: {0}")]
    Unauthenticated(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
