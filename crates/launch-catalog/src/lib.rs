//! # Launch Catalog Library
//!
//! Repository layer for the rocket launch catalog.
//!
//! ## Architecture
//!
//! This crate implements the Repository pattern around a single contract: the
//! analytics engine reads every record of a kind as a finite, fully
//! materialized, point-in-time snapshot.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              Analytics Engine               │
//! └─────────────────────────────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────────┐
//! │             CatalogRepository               │
//! │  (load_all_rockets / providers / launches)  │
//! └─────────────────────────────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────────┐
//! │              InMemoryCatalog                │
//! │        (JSON snapshot import/export)        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use launch_catalog::{CatalogRepository, InMemoryCatalog};
//!
//! let catalog = InMemoryCatalog::load_from_file("catalog.json")?;
//! let launches = catalog.load_all_launches()?;
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod repository;

// Re-export commonly used types
pub use error::{CatalogError, Result};
pub use repository::{CatalogRepository, InMemoryCatalog};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
