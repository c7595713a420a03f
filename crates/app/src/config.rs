//! Application configuration
//!
//! Resolves the signed-in viewer and the ride catalog from a TOML config
//! file, falling back to built-in demo data when no config exists.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use unidriver_core::{Account, CatalogError, Result, RideCatalog, RideSummary, StaticCatalog};

/// Built-in demo viewer and catalog, mirroring the product's mock data
const DEMO_CONFIG: &str = r#"
[viewer]
id = "user-123"
name = "Test User"
email = "test@unidriver.br"
role = "passenger"

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
region = "plano-piloto"

[[rides]]
id = "3"
origin = "Biblioteca Nacional"
destination = "Setor Comercial Norte"
departure_date = "2023-05-21"
departure_time = "08:15:00"
driver_id = "driver-3"
driver_name = "João Pereira"
rating = 4.9
price = 18.0
seats = 1
region = "plano-piloto"
"#;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub viewer: Account,
    /// Optional external ride manifest, merged after the inline rides
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    #[serde(default)]
    pub rides: Vec<RideSummary>,
}

impl AppConfig {
    /// Load config from the first readable candidate path, falling back
    /// to the built-in demo data
    pub fn load() -> Self {
        for path in Self::candidate_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Loaded configuration");
                    return config;
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Ignoring unreadable config"
                    );
                }
            }
        }

        tracing::info!("No configuration found, using demo data");
        Self::demo()
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw).map_err(CatalogError::from)?;
        Ok(config)
    }

    /// Rides from the inline list plus the external manifest, if any
    pub fn load_rides(&self) -> Vec<RideSummary> {
        let mut rides = self.rides.clone();
        if let Some(path) = &self.catalog {
            match StaticCatalog::from_manifest(path) {
                Ok(catalog) => rides.extend(catalog.rides().iter().cloned()),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to load ride manifest"
                    );
                }
            }
        }
        rides
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dirs) = ProjectDirs::from("br", "unidriver", "unidriver") {
            paths.push(dirs.config_dir().join("unidriver.toml"));
        }
        paths.push(PathBuf::from("unidriver.toml"));
        paths
    }

    pub fn demo() -> Self {
        toml::from_str(DEMO_CONFIG).expect("demo config is valid")
    }
}
