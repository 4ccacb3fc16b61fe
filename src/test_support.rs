//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::BTreeMap;

use crate::core::country::{Country, CountryName, Currency, Flags, Idd, NativeName};

/// A record with only a common name set.
pub fn country(name: &str) -> Country {
    Country {
        name: CountryName {
            common: name.to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// `n` records named "Country 1" through "Country n", in that order.
pub fn numbered_countries(n: usize) -> Vec<Country> {
    (1..=n).map(|i| country(&format!("Country {i}"))).collect()
}

/// A fully populated record (France), suitable for detail rendering.
pub fn france() -> Country {
    Country {
        name: CountryName {
            common: "France".to_string(),
            official: Some("French Republic".to_string()),
            native_name: Some(BTreeMap::from([(
                "fra".to_string(),
                NativeName {
                    official: Some("République française".to_string()),
                    common: Some("France".to_string()),
                },
            )])),
        },
        flags: Flags {
            png: Some("https://flagcdn.com/w320/fr.png".to_string()),
            svg: Some("https://flagcdn.com/fr.svg".to_string()),
            alt: None,
        },
        flag: Some("🇫🇷".to_string()),
        population: 67391582,
        region: Some("Europe".to_string()),
        subregion: Some("Western Europe".to_string()),
        capital: vec!["Paris".to_string()],
        cca2: Some("FR".to_string()),
        cca3: Some("FRA".to_string()),
        alt_spellings: vec!["FR".to_string(), "French Republic".to_string()],
        area: Some(551695.0),
        languages: Some(BTreeMap::from([("fra".to_string(), "French".to_string())])),
        currencies: Some(BTreeMap::from([(
            "EUR".to_string(),
            Currency {
                name: Some("Euro".to_string()),
                symbol: Some("€".to_string()),
            },
        )])),
        idd: Some(Idd {
            root: Some("+3".to_string()),
            suffixes: vec!["3".to_string()],
        }),
    }
}

/// France with native names, languages, and currencies stripped.
pub fn france_without_collections() -> Country {
    let mut record = france();
    record.name.native_name = None;
    record.languages = None;
    record.currencies = None;
    record
}
