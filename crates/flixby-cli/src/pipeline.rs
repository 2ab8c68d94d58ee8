//! The quick-setup flow: fetch both sources, merge, synthesize.
//!
//! The website and the place listing are fetched concurrently. A website
//! failure is reported verbatim and the flow continues with the listing;
//! place lookups absorb provider failures inside the resolver, so the user
//! only ever sees a place error for invalid input.

use std::fmt;

use flixby_core::{merge_profiles, synthesize_system_prompt, BusinessProfile, BusinessSuggestion};
use flixby_places::{FallbackSource, PlaceSource, PlacesError, PlacesResolver};
use flixby_scraper::{ScraperError, WebsiteClient};
use serde::Serialize;

fn clean(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// A listing picked from the suggestion list.
///
/// The name and location shown next to the id travel with it, so synthetic
/// listings resolve to the business the user actually chose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlaceSelection {
    place_id: String,
    name: Option<String>,
    location: Option<String>,
}

impl PlaceSelection {
    /// `None` when `place_id` is blank.
    pub(crate) fn new(
        place_id: Option<&str>,
        name: Option<&str>,
        location: Option<&str>,
    ) -> Option<Self> {
        Some(Self {
            place_id: clean(place_id)?,
            name: clean(name),
            location: clean(location),
        })
    }

    /// Profile of the selected listing. Selections carrying a name go
    /// through suggestion routing; bare ids are looked up as they are.
    ///
    /// # Errors
    ///
    /// Whatever the resolver returns for this selection.
    pub(crate) async fn fetch<P, F>(
        &self,
        resolver: &PlacesResolver<P, F>,
    ) -> Result<BusinessProfile, PlacesError>
    where
        P: PlaceSource,
        F: FallbackSource,
    {
        match &self.name {
            Some(name) => {
                let suggestion = BusinessSuggestion {
                    id: self.place_id.clone(),
                    name: name.clone(),
                    location: self.location.clone().unwrap_or_default(),
                    rating: None,
                };
                resolver.fetch_for_suggestion(&suggestion).await
            }
            None => resolver.fetch_by_place_id(&self.place_id).await,
        }
    }
}

/// Validated inputs of one setup run. At least one source is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SetupRequest {
    website_url: Option<String>,
    place: Option<PlaceSelection>,
}

impl SetupRequest {
    /// Trims the URL; a blank one counts as not provided.
    pub(crate) fn new(url: Option<&str>, place: Option<PlaceSelection>) -> anyhow::Result<Self> {
        let request = Self {
            website_url: clean(url),
            place,
        };
        if request.website_url.is_none() && request.place.is_none() {
            anyhow::bail!("please provide a website URL, a business listing, or both");
        }
        Ok(request)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub(crate) enum SourceStatus {
    Skipped,
    Loaded { fields: usize },
    Failed { error: String },
}

impl fmt::Display for SourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped => write!(f, "skipped"),
            Self::Loaded { fields } => write!(f, "loaded ({fields} fields)"),
            Self::Failed { error } => write!(f, "failed: {error}"),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SetupOutcome {
    pub website: SourceStatus,
    pub place: SourceStatus,
    pub profile: BusinessProfile,
    pub system_prompt: String,
}

/// Fetches every requested source concurrently and assembles the outcome.
///
/// # Errors
///
/// Returns an error when no source produced any information.
pub(crate) async fn run_setup<P, F>(
    website: &WebsiteClient,
    resolver: &PlacesResolver<P, F>,
    request: &SetupRequest,
) -> anyhow::Result<SetupOutcome>
where
    P: PlaceSource,
    F: FallbackSource,
{
    let website_fetch = async {
        match request.website_url.as_deref() {
            Some(url) => Some(website.fetch_website_profile(url).await),
            None => None,
        }
    };
    let place_fetch = async {
        match &request.place {
            Some(place) => Some(place.fetch(resolver).await),
            None => None,
        }
    };

    let (website_result, place_result) = tokio::join!(website_fetch, place_fetch);
    assemble(website_result, place_result)
}

/// Merges whatever the sources produced and renders the system prompt.
///
/// # Errors
///
/// Returns an error when the merged profile is empty.
pub(crate) fn assemble(
    website: Option<Result<BusinessProfile, ScraperError>>,
    place: Option<Result<BusinessProfile, PlacesError>>,
) -> anyhow::Result<SetupOutcome> {
    let (website_status, website_profile) = settle("website", website);
    let (place_status, place_profile) = settle("place", place);

    let profile = merge_profiles(website_profile.as_ref(), place_profile.as_ref());
    if profile.is_empty() {
        anyhow::bail!(
            "no business information could be collected (website: {website_status}; place: {place_status})"
        );
    }

    let system_prompt = synthesize_system_prompt(&profile);
    tracing::info!(
        fields = profile.populated_fields(),
        prompt_len = system_prompt.len(),
        "assistant configuration ready"
    );

    Ok(SetupOutcome {
        website: website_status,
        place: place_status,
        profile,
        system_prompt,
    })
}

fn settle<E: fmt::Display>(
    source: &str,
    result: Option<Result<BusinessProfile, E>>,
) -> (SourceStatus, Option<BusinessProfile>) {
    match result {
        None => (SourceStatus::Skipped, None),
        Some(Ok(profile)) => (
            SourceStatus::Loaded {
                fields: profile.populated_fields(),
            },
            Some(profile),
        ),
        Some(Err(e)) => {
            tracing::warn!(source, error = %e, "source failed");
            (
                SourceStatus::Failed {
                    error: e.to_string(),
                },
                None,
            )
        }
    }
}

/// Statuses go to stderr so stdout carries only the prompt.
pub(crate) fn print_outcome(outcome: &SetupOutcome) {
    eprintln!("website: {}", outcome.website);
    eprintln!("place:   {}", outcome.place);
    println!("{}", outcome.system_prompt);
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
