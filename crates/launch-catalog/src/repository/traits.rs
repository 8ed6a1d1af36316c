//! # Repository Traits
//!
//! Abstract catalog access for the analytics engine.
//! Implementations can be swapped for different backends (in-memory, mock, etc.)

use crate::error::Result;
use launch_domain::{Launch, LaunchServiceProvider, Rocket};

// =============================================================================
// CATALOG REPOSITORY
// =============================================================================

/// Read-side contract the analytics engine runs against.
///
/// Every load returns a finite, fully materialized snapshot that is consistent
/// as of the call. Nothing is pre-filtered, ordered, paginated, or streamed;
/// backends return records in insertion order, which stable sorts downstream
/// preserve on ties.
pub trait CatalogRepository {
    /// Load every rocket in the catalog
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot produce a snapshot.
    fn load_all_rockets(&self) -> Result<Vec<Rocket>>;

    /// Load every launch service provider in the catalog
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot produce a snapshot.
    fn load_all_providers(&self) -> Result<Vec<LaunchServiceProvider>>;

    /// Load every launch record in the catalog
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot produce a snapshot.
    fn load_all_launches(&self) -> Result<Vec<Launch>>;
}

impl<C: CatalogRepository + ?Sized> CatalogRepository for &C {
    fn load_all_rockets(&self) -> Result<Vec<Rocket>> {
        (**self).load_all_rockets()
    }

    fn load_all_providers(&self) -> Result<Vec<LaunchServiceProvider>> {
        (**self).load_all_providers()
    }

    fn load_all_launches(&self) -> Result<Vec<Launch>> {
        (**self).load_all_launches()
    }
}
