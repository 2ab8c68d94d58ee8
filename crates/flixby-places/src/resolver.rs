//! Two-stage place lookup: the provider first, synthetic data second.
//!
//! [`PlacesResolver`] composes a [`PlaceSource`] (normally the places proxy
//! client) with a [`FallbackSource`] (normally the synthetic generator).
//! Every substitution is logged: `warn!` when the provider failed, `debug!`
//! when it was never configured.

use async_trait::async_trait;
use flixby_core::{BusinessProfile, BusinessSuggestion};

use crate::client::MAX_SUGGESTIONS;
use crate::error::PlacesError;
use crate::fallback::is_fallback_id;

/// Default minimum search term length, in characters.
pub const DEFAULT_MIN_CHARS: usize = 2;

/// A provider of real place data.
#[async_trait]
pub trait PlaceSource: Send + Sync {
    /// Suggestions for a free-text query.
    ///
    /// # Errors
    ///
    /// Any provider, transport, or decoding failure.
    async fn search(
        &self,
        query: &str,
        session_token: &str,
    ) -> Result<Vec<BusinessSuggestion>, PlacesError>;

    /// Full profile for a provider place id.
    ///
    /// # Errors
    ///
    /// Any provider, transport, or decoding failure.
    async fn profile(&self, place_id: &str) -> Result<BusinessProfile, PlacesError>;

    /// `false` when the source is known to be unusable, so no call is made.
    fn is_available(&self) -> bool {
        true
    }
}

/// A local substitute for a [`PlaceSource`].
pub trait FallbackSource: Send + Sync {
    fn suggestions(&self, term: &str, location_hint: Option<&str>) -> Vec<BusinessSuggestion>;

    /// A profile named after `seed`, located at `location` when given.
    ///
    /// # Errors
    ///
    /// Implementation-specific. The resolver propagates it unchanged.
    fn profile(&self, seed: &str, location: Option<&str>) -> Result<BusinessProfile, PlacesError>;

    /// Fills in a missing description on a provider profile.
    fn describe(&self, profile: &mut BusinessProfile);
}

/// Resolves searches and place selections, substituting fallback data when
/// the primary source fails.
pub struct PlacesResolver<P, F> {
    primary: P,
    fallback: F,
    min_chars: usize,
    max_results: usize,
}

impl<P: PlaceSource, F: FallbackSource> PlacesResolver<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self {
            primary,
            fallback,
            min_chars: DEFAULT_MIN_CHARS,
            max_results: MAX_SUGGESTIONS,
        }
    }

    #[must_use]
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars.max(1);
        self
    }

    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.clamp(1, MAX_SUGGESTIONS);
        self
    }

    /// Whether `term` is long enough to be searched at all.
    #[must_use]
    pub fn accepts(&self, term: &str) -> bool {
        term.trim().chars().count() >= self.min_chars
    }

    /// Suggestions for `term`, optionally narrowed by a location hint.
    ///
    /// Never fails: a term shorter than the minimum yields an empty list
    /// without any lookup, and a failing or unconfigured provider is replaced
    /// by synthetic suggestions.
    pub async fn search(
        &self,
        term: &str,
        location_hint: Option<&str>,
        session_token: &str,
    ) -> Vec<BusinessSuggestion> {
        if !self.accepts(term) {
            return Vec::new();
        }
        let term = term.trim();
        let hint = location_hint.map(str::trim).filter(|h| !h.is_empty());

        if self.primary.is_available() {
            let query = match hint {
                Some(hint) => format!("{term} {hint}"),
                None => term.to_owned(),
            };
            match self.primary.search(&query, session_token).await {
                Ok(mut suggestions) => {
                    suggestions.truncate(self.max_results);
                    return suggestions;
                }
                Err(e) => {
                    tracing::warn!(term, error = %e, "place search failed, using synthetic suggestions");
                }
            }
        } else {
            tracing::debug!(term, "places provider not configured, using synthetic suggestions");
        }

        self.fallback.suggestions(term, hint)
    }

    /// Profile for a place id chosen from the suggestion list.
    ///
    /// Provider profiles without a description get a generated one. When the
    /// provider fails the fallback is used once, seeded with the raw id.
    /// Synthetic ids are refused: they only make sense together with the
    /// suggestion they came from, see [`PlacesResolver::fetch_for_suggestion`].
    ///
    /// # Errors
    ///
    /// - [`PlacesError::EmptyPlaceId`] if `place_id` is blank.
    /// - [`PlacesError::UnnamedFallbackId`] if `place_id` is synthetic.
    /// - Whatever the fallback returns when it fails too.
    pub async fn fetch_by_place_id(&self, place_id: &str) -> Result<BusinessProfile, PlacesError> {
        let place_id = place_id.trim();
        if place_id.is_empty() {
            return Err(PlacesError::EmptyPlaceId);
        }
        if is_fallback_id(place_id) {
            return Err(PlacesError::UnnamedFallbackId {
                place_id: place_id.to_owned(),
            });
        }
        self.fetch_with_fallback(place_id, place_id, None).await
    }

    /// Profile for a selected suggestion.
    ///
    /// Unlike [`PlacesResolver::fetch_by_place_id`], fallback profiles are
    /// seeded with the suggestion's name and location rather than its id.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::EmptyPlaceId`] if the suggestion id is blank.
    /// - Whatever the fallback returns when it fails too.
    pub async fn fetch_for_suggestion(
        &self,
        suggestion: &BusinessSuggestion,
    ) -> Result<BusinessProfile, PlacesError> {
        let place_id = suggestion.id.trim();
        if place_id.is_empty() {
            return Err(PlacesError::EmptyPlaceId);
        }
        let location = Some(suggestion.location.as_str()).filter(|l| !l.trim().is_empty());
        if is_fallback_id(place_id) {
            tracing::debug!(place_id, "synthetic suggestion selected, skipping provider");
            let mut profile = self.fallback.profile(&suggestion.name, location)?;
            if suggestion.rating.is_some() {
                profile.rating.clone_from(&suggestion.rating);
            }
            return Ok(profile);
        }
        self.fetch_with_fallback(place_id, &suggestion.name, location)
            .await
    }

    async fn fetch_with_fallback(
        &self,
        place_id: &str,
        seed: &str,
        location: Option<&str>,
    ) -> Result<BusinessProfile, PlacesError> {
        let primary = if self.primary.is_available() {
            self.primary.profile(place_id).await
        } else {
            Err(PlacesError::NotConfigured)
        };

        match primary {
            Ok(mut profile) => {
                if profile.description.is_none() {
                    self.fallback.describe(&mut profile);
                }
                Ok(profile)
            }
            Err(PlacesError::NotConfigured) => {
                tracing::debug!(place_id, "places provider not configured, using synthetic profile");
                self.fallback.profile(seed, location)
            }
            Err(e) if e.is_fallback_eligible() => {
                tracing::warn!(place_id, error = %e, "place details failed, using synthetic profile");
                self.fallback.profile(seed, location)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
