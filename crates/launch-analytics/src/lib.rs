//! # Launch Analytics
//!
//! Descriptive analytics engine over a catalog of rocket launch records.
//! Every query loads a point-in-time snapshot, transforms it in memory
//! (filter, group, rank, truncate), and returns an ordered result or a
//! descriptive validation error.
//!
//! ## Features
//!
//! - Top-k activity and reliability rankings
//! - Recency and cost rankings over all launches
//! - Revenue-per-provider rankings with exact decimal summation
//! - Dominant-country aggregation per orbit
//! - Successful launch rate per calendar year

#![forbid(unsafe_code)]
#![warn(clippy::all, missing_docs)]

pub mod engine;
pub mod error;
pub mod queries;

#[cfg(test)]
mod testkit;

pub use engine::AnalyticsEngine;
pub use error::{AnalyticsError, RankingPool};
