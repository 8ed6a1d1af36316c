//! Analytics engine: snapshot loading, ranking machinery, and top-k queries.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;

use crate::error::{AnalyticsError, RankingPool, Result};
use launch_catalog::CatalogRepository;
use launch_domain::{Launch, LaunchServiceProvider, Rocket};

/// Stateless query engine over a launch catalog.
///
/// Holds nothing but the catalog handle. Every operation loads a fresh
/// point-in-time snapshot, transforms it in memory, and returns; repeated
/// calls against an unchanged catalog give identical results.
#[derive(Debug, Clone)]
pub struct AnalyticsEngine<C> {
    catalog: C,
}

impl<C: CatalogRepository> AnalyticsEngine<C> {
    /// Create an engine over the given catalog.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Access the underlying catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub(crate) fn launches(&self) -> Result<Vec<Launch>> {
        let launches = self.catalog.load_all_launches()?;
        tracing::debug!(count = launches.len(), "Loaded launch snapshot");
        Ok(launches)
    }

    /// Top-k rockets by number of successful launches, most active first.
    ///
    /// Failed launches never count. Rockets tied on count rank by natural key
    /// `(name, country, manufacturer)` ascending.
    ///
    /// # Errors
    ///
    /// `CountOutOfRange` when `k` exceeds the number of distinct rockets with
    /// at least one successful launch.
    pub fn most_launched_rockets(&self, k: usize) -> Result<Vec<Rocket>> {
        let launches = self.launches()?;
        top_k_by_occurrence(
            launches
                .iter()
                .filter(|launch| launch.outcome.is_successful())
                .map(|launch| launch.launch_vehicle.clone()),
            k,
            RankingPool::Rockets,
        )
    }

    /// Top-k providers by number of successful launches, most reliable first.
    ///
    /// Failed launches never count. Providers tied on count rank by natural
    /// key `(name, year_founded, country)` ascending.
    ///
    /// # Errors
    ///
    /// `CountOutOfRange` when `k` exceeds the number of distinct providers
    /// with at least one successful launch.
    pub fn most_reliable_launch_service_providers(
        &self,
        k: usize,
    ) -> Result<Vec<LaunchServiceProvider>> {
        let launches = self.launches()?;
        top_k_by_occurrence(
            launches
                .iter()
                .filter(|launch| launch.outcome.is_successful())
                .map(|launch| launch.launch_service_provider.clone()),
            k,
            RankingPool::LaunchServiceProviders,
        )
    }

    /// The `k` most recent launches, newest first.
    ///
    /// Considers every launch regardless of outcome. Launches sharing a date
    /// keep their catalog order.
    ///
    /// # Errors
    ///
    /// `CountOutOfRange` when `k` exceeds the total number of launches.
    pub fn most_recent_launches(&self, k: usize) -> Result<Vec<Launch>> {
        let mut launches = self.launches()?;
        if k > launches.len() {
            return Err(AnalyticsError::CountOutOfRange(RankingPool::Launches));
        }
        launches.sort_by(|a, b| b.launch_date.cmp(&a.launch_date));
        launches.truncate(k);
        Ok(launches)
    }

    /// The `k` most expensive launches, priciest first.
    ///
    /// Prices compare exactly; launches sharing a price keep their catalog
    /// order.
    ///
    /// # Errors
    ///
    /// `CountOutOfRange` when `k` exceeds the total number of launches.
    pub fn most_expensive_launches(&self, k: usize) -> Result<Vec<Launch>> {
        let mut launches = self.launches()?;
        if k > launches.len() {
            return Err(AnalyticsError::CountOutOfRange(RankingPool::Launches));
        }
        launches.sort_by(|a, b| b.price.cmp(&a.price));
        launches.truncate(k);
        Ok(launches)
    }

    /// Top-k providers by summed launch revenue in `year`, highest first.
    ///
    /// Revenue is the exact decimal sum of launch prices per provider over
    /// the year's launches, successful or not. Providers tied on revenue rank
    /// by natural key ascending. `k` may exceed the number of distinct
    /// providers as long as it stays within the year's launch count; top-k
    /// truncates and never pads.
    ///
    /// # Errors
    ///
    /// `YearOutOfRange` for years beyond the current calendar year,
    /// `EmptyYear` when the year has no launches, and `CountOutOfRange` when
    /// `k` exceeds the year's launch count.
    pub fn highest_revenue_launch_service_providers(
        &self,
        k: usize,
        year: i32,
    ) -> Result<Vec<LaunchServiceProvider>> {
        if year > Utc::now().year() {
            return Err(AnalyticsError::YearOutOfRange);
        }
        let launches = self.launches()?;
        let in_year: Vec<&Launch> = launches
            .iter()
            .filter(|launch| launch.year() == year)
            .collect();
        if in_year.is_empty() {
            return Err(AnalyticsError::EmptyYear(year));
        }
        if k > in_year.len() {
            return Err(AnalyticsError::CountOutOfRange(RankingPool::Launches));
        }
        let mut revenue: HashMap<LaunchServiceProvider, Decimal> = HashMap::new();
        for launch in in_year {
            *revenue
                .entry(launch.launch_service_provider.clone())
                .or_insert(Decimal::ZERO) += launch.price;
        }
        Ok(rank_descending(revenue, k))
    }
}

// =============================================================================
// RANKING MACHINERY
// =============================================================================

/// Tally occurrences per key and return the `k` most frequent keys.
pub(crate) fn top_k_by_occurrence<K, I>(keys: I, k: usize, pool: RankingPool) -> Result<Vec<K>>
where
    I: IntoIterator<Item = K>,
    K: Eq + Hash + Ord,
{
    let mut occurrence: HashMap<K, usize> = HashMap::new();
    for key in keys {
        *occurrence.entry(key).or_insert(0) += 1;
    }
    if k > occurrence.len() {
        return Err(AnalyticsError::CountOutOfRange(pool));
    }
    Ok(rank_descending(occurrence, k))
}

/// Rank tallied keys by weight descending, ties by key ascending, first `k`.
pub(crate) fn rank_descending<K, W>(tallies: HashMap<K, W>, k: usize) -> Vec<K>
where
    K: Ord,
    W: Ord,
{
    let mut ranked: Vec<(K, W)> = tallies.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().take(k).map(|(key, _)| key).collect()
}
