//! Ride catalog: the read-only source of ride offers
//!
//! The chat subsystem consumes ride metadata through the `RideCatalog`
//! trait. `StaticCatalog` backs it with an in-memory list, optionally
//! loaded from a TOML manifest.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{RideId, RideSummary};

/// Errors raised while loading a ride manifest
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid manifest: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Source of ride offers consumed by the chat subsystem
pub trait RideCatalog {
    /// Look up a ride by id
    fn ride(&self, id: &RideId) -> Option<RideSummary>;

    /// All published rides, in catalog order
    fn rides(&self) -> &[RideSummary];
}

/// Manifest root: a list of `[[rides]]` tables
#[derive(Debug, Deserialize)]
struct CatalogManifest {
    #[serde(default)]
    rides: Vec<RideSummary>,
}

/// In-memory ride catalog
#[derive(Debug, Default)]
pub struct StaticCatalog {
    rides: Vec<RideSummary>,
}

impl StaticCatalog {
    pub fn new(rides: Vec<RideSummary>) -> Self {
        Self { rides }
    }

    /// Load a catalog from a TOML manifest file
    pub fn from_manifest(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::ManifestNotFound(path.to_path_buf()));
        }

        let raw = std::fs::read_to_string(path)?;
        let manifest: CatalogManifest = toml::from_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            rides = manifest.rides.len(),
            "Loaded ride catalog"
        );

        Ok(Self::new(manifest.rides))
    }

    pub fn len(&self) -> usize {
        self.rides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }
}

impl RideCatalog for StaticCatalog {
    fn ride(&self, id: &RideId) -> Option<RideSummary> {
        self.rides.iter().find(|r| &r.id == id).cloned()
    }

    fn rides(&self) -> &[RideSummary] {
        &self.rides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"
[[rides]]
id = "1"
origin = "UnB"
destination = "Shopping Conjunto Nacional"
departure_date = "2023-05-20"
departure_time = "14:30:00"
driver_id = "driver-1"
driver_name = "Carlos Silva"
rating = 4.8
price = 15.0
seats = 3
region = "plano-piloto"

[[rides]]
id = "2"
origin = "Praça do Relógio"
destination = "Parque da Cidade"
departure_date = "2023-05-20"
departure_time = "16:45:00"
driver_id = "driver-2"
driver_name = "Maria Oliveira"
rating = 4.5
price = 12.0
seats = 2
"#;

    #[test]
    fn test_load_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rides.toml");
        fs::write(&path, MANIFEST).unwrap();

        let catalog = StaticCatalog::from_manifest(&path).unwrap();
        assert_eq!(catalog.len(), 2);

        let ride = catalog.ride(&RideId::from("1")).unwrap();
        assert_eq!(ride.driver_name, "Carlos Silva");
        assert_eq!(ride.seats, 3);
        assert_eq!(ride.format_departure_time(), "14:30");
        assert_eq!(ride.region.as_deref(), Some("plano-piloto"));

        let ride = catalog.ride(&RideId::from("2")).unwrap();
        assert_eq!(ride.route(), "Praça do Relógio → Parque da Cidade");
        assert_eq!(ride.region, None);
    }

    #[test]
    fn test_missing_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.toml");

        let err = StaticCatalog::from_manifest(&path).unwrap_err();
        assert!(matches!(err, CatalogError::ManifestNotFound(_)));
    }

    #[test]
    fn test_invalid_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rides.toml");
        fs::write(&path, "[[rides]]\nid = \"1\"\n").unwrap();

        let err = StaticCatalog::from_manifest(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_unknown_ride_lookup() {
        let catalog = StaticCatalog::default();
        assert!(catalog.ride(&RideId::from("99")).is_none());
    }
}
