//! # Repository Module
//!
//! Catalog repository contract and backends.

pub mod memory;
pub mod traits;

pub use memory::InMemoryCatalog;
pub use traits::CatalogRepository;
