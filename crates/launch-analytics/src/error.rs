//! Analytics error types.

use launch_catalog::CatalogError;
use std::fmt;
use thiserror::Error;

/// Population a top-k query ranks over; names the pool in bound errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingPool {
    /// Distinct rockets with at least one successful launch
    Rockets,
    /// Distinct providers with at least one successful launch
    LaunchServiceProviders,
    /// Launch records in the snapshot under consideration
    Launches,
}

impl RankingPool {
    /// Label spliced into bound-error messages.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rockets => "rockets",
            Self::LaunchServiceProviders => "launch service providers",
            Self::Launches => "launches",
        }
    }
}

impl fmt::Display for RankingPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Analytics errors.
///
/// The message strings are part of the query contract and matched verbatim
/// by callers; do not rephrase them.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// Requested count exceeds the rankable population
    #[error("Input integer is higher than the number of {0}")]
    CountOutOfRange(RankingPool),

    /// No launch in the snapshot targets the requested orbit
    #[error("There are no rockets in this orbit.")]
    EmptyOrbit,

    /// Requested year lies beyond the current calendar year
    #[error("Input integer year is beyond a valid year of launches")]
    YearOutOfRange,

    /// No launch in the snapshot falls in the requested year
    #[error("There are no launches in year {0}")]
    EmptyYear(i32),

    /// No launch vehicle in the snapshot comes from the requested country
    #[error("There are no launches from this country")]
    EmptyCountry,

    /// Loading the catalog snapshot failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Result type for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;
