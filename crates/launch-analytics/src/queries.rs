//! Filter and scalar queries over the launch snapshot.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::engine::{AnalyticsEngine, rank_descending};
use crate::error::{AnalyticsError, Result};
use launch_catalog::CatalogRepository;
use launch_domain::Launch;

impl<C: CatalogRepository> AnalyticsEngine<C> {
    /// Country whose rockets fly most often to `orbit`.
    ///
    /// Orbit comparison is exact and case-sensitive. Every matching launch
    /// contributes one count to its vehicle's country; vehicles are not
    /// deduplicated. Countries tied on count resolve to the lexicographically
    /// smallest name.
    ///
    /// # Errors
    ///
    /// `EmptyOrbit` when no launch targets the orbit.
    pub fn dominant_country(&self, orbit: &str) -> Result<String> {
        let launches = self.launches()?;
        let mut tally: HashMap<String, usize> = HashMap::new();
        for launch in launches.iter().filter(|l| l.orbit == orbit) {
            *tally
                .entry(launch.launch_vehicle.country.clone())
                .or_insert(0) += 1;
        }
        if tally.is_empty() {
            return Err(AnalyticsError::EmptyOrbit);
        }
        rank_descending(tally, 1)
            .pop()
            .ok_or(AnalyticsError::EmptyOrbit)
    }

    /// Every launch whose vehicle comes from `country`, in catalog order.
    ///
    /// Country comparison is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// `EmptyCountry` when no launch matches.
    pub fn launches_from_country(&self, country: &str) -> Result<Vec<Launch>> {
        let launches = self.launches()?;
        let from_country: Vec<Launch> = launches
            .into_iter()
            .filter(|launch| launch.launch_vehicle.country == country)
            .collect();
        if from_country.is_empty() {
            return Err(AnalyticsError::EmptyCountry);
        }
        Ok(from_country)
    }

    /// Fraction of `year`'s launches that succeeded, rounded to two decimal
    /// places with midpoints away from zero.
    ///
    /// The denominator counts every launch in the year regardless of outcome.
    ///
    /// # Errors
    ///
    /// `EmptyYear` when the year has no launches.
    pub fn successful_launch_rate_in_year(&self, year: i32) -> Result<Decimal> {
        let launches = self.launches()?;
        let in_year: Vec<&Launch> = launches
            .iter()
            .filter(|launch| launch.year() == year)
            .collect();
        if in_year.is_empty() {
            return Err(AnalyticsError::EmptyYear(year));
        }
        let successful = in_year
            .iter()
            .filter(|launch| launch.outcome.is_successful())
            .count();
        let rate = Decimal::from(successful) / Decimal::from(in_year.len());
        Ok(rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }
}
