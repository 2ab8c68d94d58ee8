//! HTTP client for fetching business websites through a read-through proxy.

mod url;

use std::time::Duration;

use flixby_core::BusinessProfile;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::ScraperError;
use crate::extract::extract_profile;

pub use url::normalize_url;

/// Body returned by the read-through proxy: `{ "contents": "<html>…" }`.
#[derive(Debug, Deserialize)]
struct ProxyResponse {
    #[serde(default)]
    contents: Option<String>,
}

/// Fetches website HTML via a read-through proxy and extracts a profile.
///
/// The proxy exists to sidestep cross-origin restrictions; it is called as
/// `GET <proxy>?url=<target>` and answers with the raw page in `contents`.
/// There is no retry: a single failed fetch surfaces to the caller.
pub struct WebsiteClient {
    client: Client,
    proxy_url: Url,
}

impl WebsiteClient {
    /// Creates a `WebsiteClient` with a configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] if `proxy_url` is not a valid URL.
    /// - [`ScraperError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(proxy_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let proxy_url = Url::parse(proxy_url).map_err(|e| ScraperError::InvalidUrl {
            url: proxy_url.to_owned(),
            reason: format!("proxy URL does not parse: {e}"),
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, proxy_url })
    }

    /// Fetches `url` and returns the profile extracted from its HTML.
    ///
    /// `url` is normalized first (`https://` is prepended when no scheme is
    /// given) and the normalized form is always stored as the profile's
    /// `website`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::EmptyUrl`] / [`ScraperError::InvalidUrl`] are rejected
    ///   before any network call.
    /// - [`ScraperError::UnexpectedStatus`] if the proxy answered non-2xx.
    /// - [`ScraperError::Http`] on network or TLS failure.
    /// - [`ScraperError::Deserialize`] if the proxy body is not the expected JSON.
    /// - [`ScraperError::MissingContents`] if the proxy returned no page.
    pub async fn fetch_website_profile(&self, url: &str) -> Result<BusinessProfile, ScraperError> {
        let normalized = url::validated_url(url)?;
        let request_url = self.proxy_request_url(&normalized);

        tracing::debug!(url = %normalized, "fetching website through read-through proxy");

        let response = self
            .client
            .get(request_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: normalized,
            });
        }

        let body = response.text().await?;
        let payload =
            serde_json::from_str::<ProxyResponse>(&body).map_err(|e| ScraperError::Deserialize {
                context: format!("proxy response for {normalized}"),
                source: e,
            })?;
        let html = payload
            .contents
            .filter(|contents| !contents.trim().is_empty())
            .ok_or_else(|| ScraperError::MissingContents {
                url: normalized.clone(),
            })?;

        let profile = extract_profile(&html, &normalized);
        tracing::info!(
            url = %normalized,
            fields = profile.populated_fields(),
            "extracted website profile"
        );
        Ok(profile)
    }

    /// Builds `<proxy>?url=<target>` with the target percent-encoded.
    fn proxy_request_url(&self, target: &str) -> Url {
        let mut url = self.proxy_url.clone();
        url.query_pairs_mut().append_pair("url", target);
        url
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
