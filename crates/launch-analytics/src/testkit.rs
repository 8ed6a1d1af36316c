//! Shared historical catalog fixture for query tests.
//!
//! Ten providers, five vehicles, and eleven LEO launches across 2017 with a
//! mix of outcomes, including one exact duplicate record.

use chrono::NaiveDate;
use launch_catalog::InMemoryCatalog;
use launch_domain::{Launch, LaunchOutcome, LaunchServiceProvider, Rocket};
use rust_decimal_macros::dec;

pub(crate) fn providers() -> Vec<LaunchServiceProvider> {
    [
        ("ULA", 1990, "USA"),
        ("SpaceX", 2002, "USA"),
        ("ESA", 1975, "Europe"),
        ("ULA", 1991, "USA"),
        ("ULA", 1992, "USA"),
        ("SpaceX", 2003, "USA"),
        ("SpaceX", 2004, "USA"),
        ("ESA", 1976, "Europe"),
        ("ESA", 1977, "Europe"),
        ("ESA", 1978, "Europe"),
    ]
    .into_iter()
    .map(|(name, year, country)| LaunchServiceProvider::new(name, year, country).unwrap())
    .collect()
}

pub(crate) fn rockets() -> Vec<Rocket> {
    let countries = ["USA", "Japan", "Australia", "New Zealand", "Ireland"];
    let manufacturer_idx = [0, 0, 0, 1, 1];
    let country_idx = [1, 1, 2, 0, 4];
    let providers = providers();

    (0..5)
        .map(|i| {
            Rocket::new(
                format!("rocket_{i}"),
                countries[country_idx[i]],
                providers[manufacturer_idx[i]].clone(),
            )
            .unwrap()
        })
        .collect()
}

/// Eleven 2017 launches to LEO: seven successful, four failed. The eleventh
/// record duplicates the tenth under a fresh launch id, so both count.
pub(crate) fn historical_catalog() -> InMemoryCatalog {
    let providers = providers();
    let rockets = rockets();

    let months: [u32; 10] = [1, 6, 4, 3, 4, 11, 6, 5, 12, 5];
    let vehicle_idx = [0, 0, 0, 0, 1, 1, 1, 2, 2, 3];
    let prices = [
        dec!(10),
        dec!(20000),
        dec!(1000000),
        dec!(10000),
        dec!(15000),
        dec!(100000),
        dec!(1000.50),
        dec!(5000000),
        dec!(90000000),
        dec!(10000.99),
    ];
    let successful = [
        true, true, true, true, true, false, false, false, false, true,
    ];

    let launch = |i: usize| -> Launch {
        Launch::new(
            NaiveDate::from_ymd_opt(2017, months[i], 1).unwrap(),
            rockets[vehicle_idx[i]].clone(),
            providers[i].clone(),
            "LEO",
            "VAFB",
            prices[i],
            if successful[i] {
                LaunchOutcome::Successful
            } else {
                LaunchOutcome::Failed
            },
        )
        .unwrap()
    };

    let mut catalog = InMemoryCatalog::new();
    for i in 0..10 {
        catalog.add_launch(launch(i));
    }
    catalog.add_launch(launch(9));
    catalog
}
