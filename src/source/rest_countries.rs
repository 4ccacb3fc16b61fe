//! REST Countries source: a single `GET` returning a JSON array of records.
//!
//! The whole dataset comes back in one response, no auth, no paging on the
//! wire. The endpoint is configurable so tests can point it at a mock server.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::core::country::Country;
use crate::source::{CountrySource, SourceError};

pub struct RestCountriesSource {
    endpoint: String,
    client: reqwest::Client,
}

impl RestCountriesSource {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Decode a response body into records, preserving array order.
pub fn decode_countries(body: &str) -> Result<Vec<Country>, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::Parse(e.to_string()))
}

#[async_trait]
impl CountrySource for RestCountriesSource {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn fetch_all(&self) -> Result<Vec<Country>, SourceError> {
        info!("Fetching countries from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        debug!("REST Countries response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("REST Countries API error: {} - {}", status, err_body);
            return Err(SourceError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;
        debug!("Received {} bytes", body.len());

        let countries = decode_countries(&body)?;
        info!("Decoded {} countries", countries.len());
        Ok(countries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_keeps_array_order() {
        let body = r#"[
            {"name": {"common": "Peru"}},
            {"name": {"common": "Chile"}},
            {"name": {"common": "Bolivia"}}
        ]"#;
        let countries = decode_countries(body).unwrap();
        let names: Vec<&str> = countries.iter().map(|c| c.name.common.as_str()).collect();
        assert_eq!(names, vec!["Peru", "Chile", "Bolivia"]);
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_countries(r#"{"status": 404, "message": "Not Found"}"#).unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }

    #[test]
    fn test_decode_rejects_record_without_common_name() {
        let err = decode_countries(r#"[{"name": {}}]"#).unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }

    #[test]
    fn test_source_name_and_endpoint() {
        let source = RestCountriesSource::new("http://localhost/all".to_string());
        assert_eq!(source.name(), "restcountries");
        assert_eq!(source.endpoint(), "http://localhost/all");
    }
}
