//! # Country Detail
//!
//! Expands one record into the labelled lines shown by the detail modal.
//!
//! The nested collections (native names, languages, currencies) are optional
//! in the dataset; when one is absent or empty it renders as a single `N/A`
//! line. Other gaps are failures, split in two kinds:
//!
//! - `MissingField`: a value the view needs is not there at all.
//! - `Malformed`: the value is there but cannot be shown as-is.
//!
//! `detail_or_error` turns either failure into a one-line error detail so the
//! modal always has something to show.

use std::fmt;

use log::warn;

use crate::core::country::Country;
use crate::core::format::format_decimal;

pub const NOT_AVAILABLE: &str = "N/A";
pub const UNKNOWN: &str = "unknown";
pub const PARSE_ERROR_LINE: &str = "Error parsing country data.";

#[derive(Debug, Clone, PartialEq)]
pub struct DetailLine {
    pub label: String,
    pub value: String,
}

impl DetailLine {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryDetail {
    pub title: String,
    pub flag: String,
    pub lines: Vec<DetailLine>,
    /// True when extraction failed and `lines` holds only the error line.
    pub failed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailError {
    /// Required value absent. Carries the dotted path, e.g. `name.official`.
    MissingField(String),
    /// Value present but unusable.
    Malformed { field: String, reason: String },
}

impl fmt::Display for DetailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailError::MissingField(field) => write!(f, "missing field: {field}"),
            DetailError::Malformed { field, reason } => {
                write!(f, "malformed field {field}: {reason}")
            }
        }
    }
}

impl std::error::Error for DetailError {}

fn required<'a>(value: Option<&'a String>, field: &str) -> Result<&'a str, DetailError> {
    value
        .map(String::as_str)
        .ok_or_else(|| DetailError::MissingField(field.to_string()))
}

fn country_code<'a>(value: Option<&'a String>, field: &str, len: usize) -> Result<&'a str, DetailError> {
    let code = required(value, field)?;
    let actual = code.chars().count();
    if actual != len {
        return Err(DetailError::Malformed {
            field: field.to_string(),
            reason: format!("expected {len} characters, found {actual}"),
        });
    }
    Ok(code)
}

/// Build the full detail view for `country`.
pub fn build_detail(country: &Country) -> Result<CountryDetail, DetailError> {
    let mut lines = Vec::new();

    let official = required(country.name.official.as_ref(), "name.official")?;
    lines.push(DetailLine::new("Official Name", official));

    match country.name.native_name.as_ref().filter(|m| !m.is_empty()) {
        Some(native) => {
            for (lang, name) in native {
                let field = format!("name.nativeName.{lang}.official");
                let value = required(name.official.as_ref(), &field)?;
                lines.push(DetailLine::new(format!("Native Name ({lang})"), value));
            }
        }
        None => lines.push(DetailLine::new("Native Name", NOT_AVAILABLE)),
    }

    lines.push(DetailLine::new(
        "Alternative Names",
        country.alt_spellings.join(", "),
    ));

    let cca2 = country_code(country.cca2.as_ref(), "cca2", 2)?;
    let cca3 = country_code(country.cca3.as_ref(), "cca3", 3)?;
    lines.push(DetailLine::new(
        "Country Codes",
        format!("{cca2} (2 characters), {cca3} (3 characters)"),
    ));

    lines.push(DetailLine::new(
        "Country Calling Code",
        country.calling_code().unwrap_or_else(|| UNKNOWN.to_string()),
    ));

    let region = required(country.region.as_ref(), "region")?;
    lines.push(DetailLine::new("Region", region));
    lines.push(DetailLine::new(
        "Subregion",
        country.subregion.as_deref().unwrap_or(UNKNOWN),
    ));

    let area = country
        .area
        .ok_or_else(|| DetailError::MissingField("area".to_string()))?;
    if !area.is_finite() || area < 0.0 {
        return Err(DetailError::Malformed {
            field: "area".to_string(),
            reason: format!("{area} is not a valid surface area"),
        });
    }
    lines.push(DetailLine::new(
        "Area",
        format!("{} square kilometers", format_decimal(area)),
    ));

    match country.languages.as_ref().filter(|m| !m.is_empty()) {
        Some(languages) => {
            for (code, language) in languages {
                lines.push(DetailLine::new(format!("Official Language ({code})"), language.as_str()));
            }
        }
        None => lines.push(DetailLine::new("Official Languages", NOT_AVAILABLE)),
    }

    match country.currencies.as_ref().filter(|m| !m.is_empty()) {
        Some(currencies) => {
            for (code, currency) in currencies {
                let field = format!("currencies.{code}.name");
                let name = required(currency.name.as_ref(), &field)?;
                let value = match currency.symbol.as_deref() {
                    Some(symbol) => format!("{name} ({symbol})"),
                    None => name.to_string(),
                };
                lines.push(DetailLine::new(format!("Currency ({code})"), value));
            }
        }
        None => lines.push(DetailLine::new("Currencies", NOT_AVAILABLE)),
    }

    Ok(CountryDetail {
        title: country.name.common.clone(),
        flag: flag_reference(country),
        lines,
        failed: false,
    })
}

/// Like `build_detail`, but a failure is logged and replaced with a single
/// error line instead of being returned.
pub fn detail_or_error(country: &Country) -> CountryDetail {
    match build_detail(country) {
        Ok(detail) => detail,
        Err(e) => {
            warn!("Failed to build detail for {}: {}", country.name.common, e);
            CountryDetail {
                title: country.name.common.clone(),
                flag: flag_reference(country),
                lines: vec![DetailLine::new("", PARSE_ERROR_LINE)],
                failed: true,
            }
        }
    }
}

fn flag_reference(country: &Country) -> String {
    match (country.flag.as_deref(), country.flags.png.as_deref()) {
        (Some(emoji), Some(png)) => format!("{emoji}  {png}"),
        (Some(emoji), None) => emoji.to_string(),
        (None, Some(png)) => png.to_string(),
        (None, None) => String::new(),
    }
}
