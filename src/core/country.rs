//! # Country Records
//!
//! The record shape returned by the countries dataset. Only `name.common` is
//! required at decode time; everything else is optional or defaulted so one
//! sparse record never sinks the whole catalog. Stricter checks happen later,
//! when a record is expanded for the detail view (see `core::detail`).
//!
//! ```text
//! Country
//! ├── name: CountryName          // common, official, nativeName{code → NativeName}
//! ├── flags: Flags               // png / svg / alt references
//! ├── flag: Option<String>       // emoji
//! ├── population: u64
//! ├── region / subregion
//! ├── capital: Vec<String>
//! ├── cca2 / cca3
//! ├── alt_spellings: Vec<String>
//! ├── area: Option<f64>          // km²
//! ├── languages: {code → name}
//! ├── currencies: {code → Currency}
//! └── idd: Option<Idd>           // calling code parts
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub flags: Flags,
    pub flag: Option<String>,
    #[serde(default)]
    pub population: u64,
    pub region: Option<String>,
    pub subregion: Option<String>,
    #[serde(default)]
    pub capital: Vec<String>,
    pub cca2: Option<String>,
    pub cca3: Option<String>,
    #[serde(default)]
    pub alt_spellings: Vec<String>,
    pub area: Option<f64>,
    pub languages: Option<BTreeMap<String, String>>,
    pub currencies: Option<BTreeMap<String, Currency>>,
    pub idd: Option<Idd>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryName {
    pub common: String,
    pub official: Option<String>,
    pub native_name: Option<BTreeMap<String, NativeName>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NativeName {
    pub official: Option<String>,
    pub common: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Flags {
    pub png: Option<String>,
    pub svg: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Currency {
    pub name: Option<String>,
    pub symbol: Option<String>,
}

/// International direct dialing prefix, split the way the dataset ships it:
/// `root` is "+3", `suffixes` is ["3"] for France.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Idd {
    pub root: Option<String>,
    #[serde(default)]
    pub suffixes: Vec<String>,
}

impl Country {
    /// The calling code, if the dataset carries one.
    ///
    /// A single suffix is appended to the root. Countries sharing a root
    /// across many area codes (the NANP "+1" block) report the root alone.
    pub fn calling_code(&self) -> Option<String> {
        let idd = self.idd.as_ref()?;
        let root = idd.root.as_deref().filter(|r| !r.is_empty())?;
        match idd.suffixes.as_slice() {
            [only] => Some(format!("{root}{only}")),
            _ => Some(root.to_string()),
        }
    }

    /// What the card shows in place of an image: the emoji if present,
    /// otherwise the png reference.
    pub fn flag_label(&self) -> &str {
        self.flag
            .as_deref()
            .or(self.flags.png.as_deref())
            .unwrap_or("")
    }
}
