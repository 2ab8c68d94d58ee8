//! URL normalization for user-entered website addresses.

use crate::error::ScraperError;

/// Prepends `https://` when `url` carries no `http://` or `https://` scheme.
///
/// Given `"joescafe.co.uk"`, returns `"https://joescafe.co.uk"`. Input that
/// already has a scheme is returned unchanged (apart from surrounding
/// whitespace).
#[must_use]
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    }
}

/// Normalizes and validates a user-entered URL before any network call.
///
/// # Errors
///
/// - [`ScraperError::EmptyUrl`] if `url` is blank.
/// - [`ScraperError::InvalidUrl`] if the normalized form does not parse or
///   has no host.
pub(super) fn validated_url(url: &str) -> Result<String, ScraperError> {
    if url.trim().is_empty() {
        return Err(ScraperError::EmptyUrl);
    }
    let normalized = normalize_url(url);
    let parsed = reqwest::Url::parse(&normalized).map_err(|e| ScraperError::InvalidUrl {
        url: url.trim().to_owned(),
        reason: e.to_string(),
    })?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ScraperError::InvalidUrl {
            url: url.trim().to_owned(),
            reason: "no host name".to_owned(),
        });
    }
    Ok(normalized)
}
