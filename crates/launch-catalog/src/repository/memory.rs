//! # In-Memory Catalog
//!
//! Insertion-ordered catalog backend with JSON snapshot import/export.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::repository::CatalogRepository;
use launch_domain::{Launch, LaunchServiceProvider, Rocket};

/// In-memory catalog of rockets, providers, and launch records.
///
/// Keeps insertion order. Rockets and providers deduplicate on their natural
/// keys (first record wins); launches always append. Registering a launch
/// also registers its vehicle, the vehicle's manufacturer, and its provider.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct InMemoryCatalog {
    rockets: Vec<Rocket>,
    providers: Vec<LaunchServiceProvider>,
    launches: Vec<Launch>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider, keeping the first record per natural key
    pub fn add_provider(&mut self, provider: LaunchServiceProvider) {
        if !self.providers.contains(&provider) {
            self.providers.push(provider);
        }
    }

    /// Register a rocket together with its manufacturer
    pub fn add_rocket(&mut self, rocket: Rocket) {
        self.add_provider(rocket.manufacturer.clone());
        if !self.rockets.contains(&rocket) {
            self.rockets.push(rocket);
        }
    }

    /// Append a launch record, registering its vehicle and provider as well.
    ///
    /// Duplicate launch records are legal; each appended record counts once
    /// in every downstream ranking.
    pub fn add_launch(&mut self, launch: Launch) {
        self.add_rocket(launch.launch_vehicle.clone());
        self.add_provider(launch.launch_service_provider.clone());
        self.launches.push(launch);
    }

    /// Number of launch records in the catalog
    #[must_use]
    pub fn launch_count(&self) -> usize {
        self.launches.len()
    }

    /// True when no record of any kind is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rockets.is_empty() && self.providers.is_empty() && self.launches.is_empty()
    }

    /// Parse a catalog from a JSON snapshot, validating every record.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Serialization` on malformed JSON and
    /// `CatalogError::InvalidRecord` for the first record violating a field
    /// constraint.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        for rocket in &catalog.rockets {
            rocket.validate()?;
        }
        for provider in &catalog.providers {
            provider.validate()?;
        }
        for launch in &catalog.launches {
            launch.validate()?;
        }
        tracing::debug!(
            rockets = catalog.rockets.len(),
            providers = catalog.providers.len(),
            launches = catalog.launches.len(),
            "Catalog snapshot imported"
        );
        Ok(catalog)
    }

    /// Serialize the catalog to a pretty-printed JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Serialization` when encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a catalog from a JSON snapshot file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` when the file is unreadable, plus every
    /// error `from_json` can produce.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write the catalog to a JSON snapshot file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` when the file is unwritable.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn load_all_rockets(&self) -> Result<Vec<Rocket>> {
        Ok(self.rockets.clone())
    }

    fn load_all_providers(&self) -> Result<Vec<LaunchServiceProvider>> {
        Ok(self.providers.clone())
    }

    fn load_all_launches(&self) -> Result<Vec<Launch>> {
        Ok(self.launches.clone())
    }
}
