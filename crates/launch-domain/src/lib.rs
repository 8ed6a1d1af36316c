//! # Rocket Launch Catalog - Domain Model
//!
//! Core domain entities for the launch analytics system: rockets, launch
//! service providers, and individual launch records. These types are the
//! single source of truth across the catalog and analytics layers.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

// =============================================================================
// ENUMS
// =============================================================================

/// Outcome of a launch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LaunchOutcome {
    Successful,
    Failed,
}

impl LaunchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Successful => "SUCCESSFUL",
            Self::Failed => "FAILED",
        }
    }

    /// True when the payload reached its intended orbit
    #[must_use]
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Successful)
    }
}

// =============================================================================
// ENTITY TYPES
// =============================================================================

/// Launch service provider - the company or agency operating launches.
///
/// Field order doubles as the natural key `(name, year_founded, country)`;
/// the derived `Ord` over that order is the tie-break key rankings use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LaunchServiceProvider {
    pub name: String,
    pub year_founded: i32,
    pub country: String,
}

impl LaunchServiceProvider {
    /// Create a validated provider record.
    pub fn new(
        name: impl Into<String>,
        year_founded: i32,
        country: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let provider = Self {
            name: name.into(),
            year_founded,
            country: country.into(),
        };
        provider.validate()?;
        Ok(provider)
    }

    /// Check the record against the catalog field constraints.
    pub fn validate(&self) -> Result<(), DomainError> {
        bounded_label("name", &self.name)?;
        bounded_label("country", &self.country)
    }
}

/// Rocket model flown by launch providers.
///
/// Two rockets are the same model when `name`, `country`, and `manufacturer`
/// match; the payload capacity fields never participate in identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rocket {
    pub name: String,
    pub country: String,
    pub manufacturer: LaunchServiceProvider,

    // Payload capacity labels, e.g. "22,800 kg" to LEO
    pub mass_to_leo: Option<String>,
    pub mass_to_gto: Option<String>,
    pub mass_to_other: Option<String>,
}

impl Rocket {
    /// Create a validated rocket record with no payload capacity data.
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        manufacturer: LaunchServiceProvider,
    ) -> Result<Self, DomainError> {
        let rocket = Self {
            name: name.into(),
            country: country.into(),
            manufacturer,
            mass_to_leo: None,
            mass_to_gto: None,
            mass_to_other: None,
        };
        rocket.validate()?;
        Ok(rocket)
    }

    /// Set the payload capacity to low Earth orbit.
    pub fn with_mass_to_leo(mut self, mass: impl Into<String>) -> Result<Self, DomainError> {
        let mass = mass.into();
        bounded_label("massToLEO", &mass)?;
        self.mass_to_leo = Some(mass);
        Ok(self)
    }

    /// Set the payload capacity to geostationary transfer orbit.
    pub fn with_mass_to_gto(mut self, mass: impl Into<String>) -> Result<Self, DomainError> {
        let mass = mass.into();
        bounded_label("massToGTO", &mass)?;
        self.mass_to_gto = Some(mass);
        Ok(self)
    }

    /// Set the payload capacity to any other orbit.
    pub fn with_mass_to_other(mut self, mass: impl Into<String>) -> Result<Self, DomainError> {
        let mass = mass.into();
        bounded_label("massToOther", &mass)?;
        self.mass_to_other = Some(mass);
        Ok(self)
    }

    /// Check the record and its manufacturer against the field constraints.
    pub fn validate(&self) -> Result<(), DomainError> {
        bounded_label("name", &self.name)?;
        bounded_label("country", &self.country)?;
        if let Some(mass) = &self.mass_to_leo {
            bounded_label("massToLEO", mass)?;
        }
        if let Some(mass) = &self.mass_to_gto {
            bounded_label("massToGTO", mass)?;
        }
        if let Some(mass) = &self.mass_to_other {
            bounded_label("massToOther", mass)?;
        }
        self.manufacturer.validate()
    }

    fn identity(&self) -> (&str, &str, &LaunchServiceProvider) {
        (&self.name, &self.country, &self.manufacturer)
    }
}

impl PartialEq for Rocket {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Rocket {}

impl Hash for Rocket {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl Ord for Rocket {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl PartialOrd for Rocket {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Launch entity - a single launch attempt.
///
/// `launch_id` identifies the record itself. Two otherwise identical launches
/// (same vehicle, provider, date, and price) are distinct records and each
/// counts once in every ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub launch_id: Uuid,
    pub launch_date: NaiveDate,
    pub launch_vehicle: Rocket,
    pub launch_service_provider: LaunchServiceProvider,

    // Mission profile
    pub orbit: String,
    pub launch_site: String,
    pub function: Option<String>,

    // Commercial & outcome data
    pub price: Decimal,
    pub outcome: LaunchOutcome,
}

impl Launch {
    /// Create a validated launch record with a fresh id.
    pub fn new(
        launch_date: NaiveDate,
        launch_vehicle: Rocket,
        launch_service_provider: LaunchServiceProvider,
        orbit: impl Into<String>,
        launch_site: impl Into<String>,
        price: Decimal,
        outcome: LaunchOutcome,
    ) -> Result<Self, DomainError> {
        let launch = Self {
            launch_id: Uuid::new_v4(),
            launch_date,
            launch_vehicle,
            launch_service_provider,
            orbit: orbit.into(),
            launch_site: launch_site.into(),
            function: None,
            price,
            outcome,
        };
        launch.validate()?;
        Ok(launch)
    }

    /// Set the mission function, e.g. "Communications".
    #[must_use]
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Check the record and its nested rocket and provider.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.price < Decimal::ZERO {
            return Err(DomainError::NegativePrice);
        }
        self.launch_vehicle.validate()?;
        self.launch_service_provider.validate()
    }

    /// Calendar year of the launch date.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.launch_date.year()
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum length of catalog label fields (names, countries, capacities)
pub const MAX_LABEL_LEN: usize = 50;

fn bounded_label(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Blank { field });
    }
    if value.chars().count() > MAX_LABEL_LEN {
        return Err(DomainError::TooLong {
            field,
            limit: MAX_LABEL_LEN,
        });
    }
    Ok(())
}

// =============================================================================
// ERRORS
// =============================================================================

/// Domain-level validation errors
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("{field} cannot be blank")]
    Blank { field: &'static str },

    #[error("{field} length cannot exceed {limit} characters")]
    TooLong { field: &'static str, limit: usize },

    #[error("price cannot be negative")]
    NegativePrice,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;
    use fake::faker::lorem::en::Word;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    fn spacex() -> LaunchServiceProvider {
        LaunchServiceProvider::new("SpaceX", 2002, "USA").unwrap()
    }

    fn esa() -> LaunchServiceProvider {
        LaunchServiceProvider::new("ESA", 1975, "Europe").unwrap()
    }

    fn falcon_9() -> Rocket {
        Rocket::new("Falcon 9", "USA", spacex()).unwrap()
    }

    #[test]
    fn test_reject_blank_rocket_name() {
        let err = Rocket::new("  ", "USA", spacex()).unwrap_err();
        assert_eq!(err.to_string(), "name cannot be blank");
    }

    #[test]
    fn test_reject_overlong_country() {
        let err = Rocket::new("Falcon 9", "a".repeat(51), spacex()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "country length cannot exceed 50 characters"
        );
    }

    #[test]
    fn test_provider_name_bounds() {
        assert!(LaunchServiceProvider::new("", 1975, "Europe").is_err());
        assert!(LaunchServiceProvider::new("a".repeat(50), 1975, "Europe").is_ok());
        assert!(LaunchServiceProvider::new("a".repeat(51), 1975, "Europe").is_err());
    }

    #[test]
    fn test_reject_blank_mass_capacity() {
        let err = falcon_9().with_mass_to_leo("   ").unwrap_err();
        assert_eq!(err.to_string(), "massToLEO cannot be blank");
    }

    #[test]
    fn test_rocket_identity_ignores_mass_fields() {
        let plain = falcon_9();
        let loaded = falcon_9().with_mass_to_leo("22,800 kg").unwrap();
        assert_eq!(plain, loaded);

        let mut set = HashSet::new();
        set.insert(plain);
        set.insert(loaded);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_rocket_identity_over_generated_names() {
        for i in 0..16 {
            let name = format!("{}-{i}", Word().fake::<String>());
            let country: String = Word().fake();
            let a = Rocket::new(name.as_str(), country.as_str(), spacex()).unwrap();
            let b = Rocket::new(name.as_str(), country.as_str(), spacex())
                .unwrap()
                .with_mass_to_gto("8,300 kg")
                .unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_provider_natural_order() {
        let ula_1990 = LaunchServiceProvider::new("ULA", 1990, "USA").unwrap();
        let ula_1991 = LaunchServiceProvider::new("ULA", 1991, "USA").unwrap();

        assert!(esa() < spacex());
        assert!(spacex() < ula_1990);
        assert!(ula_1990 < ula_1991);
    }

    #[test]
    fn test_reject_negative_price() {
        let date = NaiveDate::from_ymd_opt(2017, 5, 1).unwrap();
        let err = Launch::new(
            date,
            falcon_9(),
            spacex(),
            "LEO",
            "VAFB",
            dec!(-1),
            LaunchOutcome::Failed,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::NegativePrice));
    }

    #[test]
    fn test_duplicate_launches_are_distinct_records() {
        let date = NaiveDate::from_ymd_opt(2017, 5, 1).unwrap();
        let a = Launch::new(
            date,
            falcon_9(),
            spacex(),
            "LEO",
            "VAFB",
            dec!(62000000),
            LaunchOutcome::Successful,
        )
        .unwrap();
        let b = Launch::new(
            date,
            falcon_9(),
            spacex(),
            "LEO",
            "VAFB",
            dec!(62000000),
            LaunchOutcome::Successful,
        )
        .unwrap();

        assert_ne!(a.launch_id, b.launch_id);
        assert_ne!(a, b);
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(LaunchOutcome::Successful.as_str(), "SUCCESSFUL");
        assert!(LaunchOutcome::Successful.is_successful());
        assert!(!LaunchOutcome::Failed.is_successful());
    }

    #[test]
    fn test_outcome_serializes_screaming_snake() {
        let json = serde_json::to_string(&LaunchOutcome::Successful).unwrap();
        assert_eq!(json, "\"SUCCESSFUL\"");
        let back: LaunchOutcome = serde_json::from_str("\"FAILED\"").unwrap();
        assert_eq!(back, LaunchOutcome::Failed);
    }
}
