//! # Data Source
//!
//! Loads the country dataset. One request at startup, no retries.

pub mod adapter;
pub mod rest_countries;

pub use adapter::{CountrySource, SourceError};
pub use rest_countries::RestCountriesSource;
