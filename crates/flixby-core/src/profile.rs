//! Business profile and suggestion types shared by every pipeline stage.

use serde::{Deserialize, Serialize};

/// Structured description of a business assembled from one or more sources.
///
/// Every field is independently optional. `None` means "unknown"; extractors
/// never store an empty string or empty list for a value they did not find.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-text lines, ideally one per weekday.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Decimal rating as text, `0.0`–`5.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<String>>,
    /// Canonical absolute URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_established: Option<String>,
}

impl BusinessProfile {
    /// Returns `true` when no field is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.populated_fields() == 0
    }

    /// Number of fields carrying a value.
    #[must_use]
    pub fn populated_fields(&self) -> usize {
        let strings = [
            &self.name,
            &self.description,
            &self.address,
            &self.phone,
            &self.email,
            &self.rating,
            &self.website,
            &self.year_established,
        ];
        let lists = [
            &self.hours,
            &self.reviews,
            &self.services,
            &self.products,
            &self.categories,
        ];
        strings.iter().filter(|f| f.is_some()).count()
            + lists.iter().filter(|f| f.is_some()).count()
    }
}

/// A candidate business shown while the user is typing a name.
///
/// Suggestions are never persisted; selecting one triggers a place profile
/// fetch keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessSuggestion {
    /// Opaque place identifier.
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

impl BusinessSuggestion {
    /// Dropdown label, e.g. `"Joe's Cafe, Leeds, West Yorkshire"`.
    #[must_use]
    pub fn description(&self) -> String {
        if self.location.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.location)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_empty() {
        assert!(BusinessProfile::default().is_empty());
    }

    #[test]
    fn populated_fields_counts_lists_and_strings() {
        let profile = BusinessProfile {
            name: Some("Joe's Cafe".to_string()),
            hours: Some(vec!["Monday: 9-5".to_string()]),
            ..BusinessProfile::default()
        };
        assert_eq!(profile.populated_fields(), 2);
        assert!(!profile.is_empty());
    }

    #[test]
    fn serializes_camel_case_and_skips_absent_fields() {
        let profile = BusinessProfile {
            name: Some("Joe's Cafe".to_string()),
            year_established: Some("2001".to_string()),
            ..BusinessProfile::default()
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Joe's Cafe", "yearEstablished": "2001" })
        );
    }

    #[test]
    fn deserializes_partial_details_payload() {
        let profile: BusinessProfile = serde_json::from_str(
            r#"{"name":"Joe's Cafe","hours":["Monday: 9-5"],"yearEstablished":"1999"}"#,
        )
        .unwrap();
        assert_eq!(profile.name.as_deref(), Some("Joe's Cafe"));
        assert_eq!(profile.hours.as_deref(), Some(&["Monday: 9-5".to_string()][..]));
        assert_eq!(profile.year_established.as_deref(), Some("1999"));
        assert!(profile.phone.is_none());
    }

    #[test]
    fn suggestion_description_joins_name_and_location() {
        let suggestion = BusinessSuggestion {
            id: "abc".to_string(),
            name: "Joe's Cafe".to_string(),
            location: "Leeds, West Yorkshire".to_string(),
            rating: None,
        };
        assert_eq!(suggestion.description(), "Joe's Cafe, Leeds, West Yorkshire");
    }

    #[test]
    fn suggestion_description_without_location() {
        let suggestion = BusinessSuggestion {
            id: "abc".to_string(),
            name: "Joe's Cafe".to_string(),
            location: String::new(),
            rating: Some("4.5".to_string()),
        };
        assert_eq!(suggestion.description(), "Joe's Cafe");
    }
}
