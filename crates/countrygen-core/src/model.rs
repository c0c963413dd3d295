// crates/countrygen-core/src/model.rs
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A country record, both as read from `countries.json` and as emitted
/// after merging.
///
/// Geo fields are optional in the canonical source and default to zero /
/// empty; the overlay usually fills them in. Any canonical attribute that
/// has no dedicated field (alpha3, capital, currencies, ...) is carried in
/// [`Country::extra`] and re-emitted unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    #[serde(deserialize_with = "null_as_default")]
    pub alpha2: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Language code (uppercased by the loader) -> localized name.
    #[serde(deserialize_with = "null_as_default")]
    pub translations: BTreeMap<String, String>,

    #[serde(deserialize_with = "null_as_default")]
    pub continent: String,
    #[serde(deserialize_with = "null_as_default")]
    pub international_prefix: String,
    #[serde(deserialize_with = "null_as_default")]
    pub eu_member: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub min_latitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_latitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub min_longitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_longitude: f64,

    #[serde(deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: f64,
    /// Human-readable forms, e.g. "51 00 N".
    #[serde(deserialize_with = "null_as_default")]
    pub latitude_string: String,
    #[serde(deserialize_with = "null_as_default")]
    pub longitude_string: String,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Country {
    /// Code used for lookups and overlay filenames.
    pub fn code_upper(&self) -> String {
        self.alpha2.trim().to_ascii_uppercase()
    }

    /// Code used for output filenames.
    pub fn code_lower(&self) -> String {
        self.alpha2.trim().to_ascii_lowercase()
    }
}

/// A subdivision (state, province, region...) of a country.
///
/// `code` is only unique within the owning country.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subdivision {
    #[serde(deserialize_with = "null_as_default")]
    pub country_alpha2: String,
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub names: Vec<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub min_latitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_latitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub min_longitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_longitude: f64,

    #[serde(deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: f64,
}

/// `null` behaves like an absent field: the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
