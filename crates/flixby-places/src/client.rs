//! HTTP client for the places proxy.
//!
//! The proxy hides the mapping provider's API key and exposes three GET
//! endpoints: text search, autocomplete, and place details. Whether the
//! client talks to the proxy at all is decided once, at construction, from
//! the presence of the provider API key.

use std::time::Duration;

use async_trait::async_trait;
use flixby_core::{AppConfig, BusinessProfile, BusinessSuggestion, SearchMode};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::PlacesError;
use crate::normalize::{
    details_to_profile, predictions_to_suggestions, search_results_to_suggestions,
};
use crate::resolver::PlaceSource;
use crate::types::{AutocompletePrediction, PlaceDetails, PlaceSearchResult};

const SEARCH_PATH: &str = "api/places/search";
const AUTOCOMPLETE_PATH: &str = "api/places/autocomplete";
const DETAILS_PATH: &str = "api/places/details";

/// Upper bound on suggestions returned from one search.
pub const MAX_SUGGESTIONS: usize = 5;

/// Client for the places proxy.
///
/// Use [`PlacesClient::from_config`] in the binary or
/// [`PlacesClient::with_base_url`] to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    base_url: Url,
    enabled: bool,
    search_mode: SearchMode,
    max_results: usize,
}

impl PlacesClient {
    /// Builds a client from application configuration.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::InvalidBaseUrl`] if `places_base_url` does not parse.
    /// - [`PlacesError::Http`] if the `reqwest::Client` cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, PlacesError> {
        Ok(Self::with_base_url(
            &config.places_base_url,
            config.places_enabled(),
            config.request_timeout_secs,
            &config.user_agent,
        )?
        .with_search_mode(config.places_search_mode)
        .with_max_results(config.suggest_max_results))
    }

    /// Creates a client against `base_url`.
    ///
    /// When `enabled` is `false` every call returns
    /// [`PlacesError::NotConfigured`] without touching the network.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::InvalidBaseUrl`] if `base_url` does not parse.
    /// - [`PlacesError::Http`] if the `reqwest::Client` cannot be constructed.
    pub fn with_base_url(
        base_url: &str,
        enabled: bool,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // A trailing slash makes Url::join append to the path instead of
        // replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            enabled,
            search_mode: SearchMode::Text,
            max_results: MAX_SUGGESTIONS,
        })
    }

    #[must_use]
    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    /// Caps search results at `max` (itself capped at [`MAX_SUGGESTIONS`]).
    #[must_use]
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max.clamp(1, MAX_SUGGESTIONS);
        self
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn search_mode(&self) -> SearchMode {
        self.search_mode
    }

    /// Text search: `GET /api/places/search?query=…[&sessiontoken=…]`.
    ///
    /// Results keep the provider's order and are capped at the configured
    /// maximum.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::NotConfigured`] when the client is disabled.
    /// - [`PlacesError::UnexpectedStatus`] on a non-2xx answer.
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::Deserialize`] if the body is not the expected JSON.
    pub async fn search(
        &self,
        query: &str,
        session_token: Option<&str>,
    ) -> Result<Vec<BusinessSuggestion>, PlacesError> {
        self.ensure_enabled()?;
        let mut params = vec![("query", query)];
        if let Some(token) = session_token {
            params.push(("sessiontoken", token));
        }
        let url = self.build_url(SEARCH_PATH, &params)?;
        let results: Vec<PlaceSearchResult> = self.get_json(&url, SEARCH_PATH).await?;

        let mut suggestions = search_results_to_suggestions(results);
        suggestions.truncate(self.max_results);
        Ok(suggestions)
    }

    /// Autocomplete: `GET /api/places/autocomplete?input=…[&sessiontoken=…]`.
    ///
    /// # Errors
    ///
    /// Same as [`PlacesClient::search`].
    pub async fn autocomplete(
        &self,
        input: &str,
        session_token: Option<&str>,
    ) -> Result<Vec<BusinessSuggestion>, PlacesError> {
        self.ensure_enabled()?;
        let mut params = vec![("input", input)];
        if let Some(token) = session_token {
            params.push(("sessiontoken", token));
        }
        let url = self.build_url(AUTOCOMPLETE_PATH, &params)?;
        let predictions: Vec<AutocompletePrediction> =
            self.get_json(&url, AUTOCOMPLETE_PATH).await?;

        let mut suggestions = predictions_to_suggestions(predictions);
        suggestions.truncate(self.max_results);
        Ok(suggestions)
    }

    /// Place details: `GET /api/places/details?placeId=…`.
    ///
    /// The returned profile has no description; filling one in is the
    /// resolver's job.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::EmptyPlaceId`] if `place_id` is blank.
    /// - Otherwise the same as [`PlacesClient::search`].
    pub async fn details(&self, place_id: &str) -> Result<BusinessProfile, PlacesError> {
        let place_id = place_id.trim();
        if place_id.is_empty() {
            return Err(PlacesError::EmptyPlaceId);
        }
        self.ensure_enabled()?;
        let url = self.build_url(DETAILS_PATH, &[("placeId", place_id)])?;
        let details: PlaceDetails = self.get_json(&url, DETAILS_PATH).await?;

        let profile = details_to_profile(details);
        tracing::info!(
            place_id,
            fields = profile.populated_fields(),
            "fetched place details"
        );
        Ok(profile)
    }

    fn ensure_enabled(&self) -> Result<(), PlacesError> {
        if self.enabled {
            Ok(())
        } else {
            Err(PlacesError::NotConfigured)
        }
    }

    /// Joins `path` onto the base URL and appends percent-encoded query pairs.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx status, and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        endpoint: &str,
    ) -> Result<T, PlacesError> {
        tracing::debug!(endpoint, "calling places proxy");
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PlacesError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: endpoint.to_owned(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: endpoint.to_owned(),
            source: e,
        })
    }
}

#[async_trait]
impl PlaceSource for PlacesClient {
    async fn search(
        &self,
        query: &str,
        session_token: &str,
    ) -> Result<Vec<BusinessSuggestion>, PlacesError> {
        match self.search_mode {
            SearchMode::Text => PlacesClient::search(self, query, Some(session_token)).await,
            SearchMode::Autocomplete => self.autocomplete(query, Some(session_token)).await,
        }
    }

    async fn profile(&self, place_id: &str) -> Result<BusinessProfile, PlacesError> {
        self.details(place_id).await
    }

    fn is_available(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
