//! Places proxy response types.
//!
//! The proxy flattens the mapping provider's payloads into small JSON
//! objects. Every field except the identifier may be missing, and `rating`
//! arrives as either a string or a number depending on the endpoint.

use serde::{Deserialize, Deserializer};

/// One entry of `GET /api/places/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSearchResult {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Formatted address of the place.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "rating_text")]
    pub rating: Option<String>,
}

/// One entry of `GET /api/places/autocomplete`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompletePrediction {
    pub id: String,
    /// Full prediction text, e.g. `"Joe's Cafe, Leeds, UK"`.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub main_text: Option<String>,
    #[serde(default)]
    pub secondary_text: Option<String>,
}

/// Body of `GET /api/places/details`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "rating_text")]
    pub rating: Option<String>,
    /// Provider listing URL. Informational only.
    #[serde(default)]
    pub url: Option<String>,
    /// Provider business status, e.g. `"OPERATIONAL"`.
    #[serde(default)]
    pub status: Option<String>,
    /// Raw provider type tags (`"coffee_shop"`) or already formatted labels.
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    /// Weekday opening-hours lines.
    #[serde(default)]
    pub hours: Option<Vec<String>>,
    #[serde(default)]
    pub reviews: Option<Vec<String>>,
    #[serde(default)]
    pub year_established: Option<String>,
}

/// Accepts `"4.5"`, `4.5`, or `null`. Numbers are rendered with one decimal,
/// so `4` becomes `"4.0"`.
fn rating_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(text)) => Some(text),
        Some(Raw::Number(number)) => Some(
            number
                .as_f64()
                .map_or_else(|| number.to_string(), |value| format!("{value:.1}")),
        ),
        None => None,
    })
}
