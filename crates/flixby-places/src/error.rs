use thiserror::Error;

/// Errors returned by the places proxy client and the place resolver.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// No place identifier was supplied. Rejected before any network call.
    #[error("please select a business")]
    EmptyPlaceId,

    /// No mapping-provider API key is configured, so the proxy is never called.
    #[error("places provider is not configured")]
    NotConfigured,

    /// A synthetic id was selected without the name it was suggested under.
    /// Synthetic listings carry no data of their own.
    #[error("synthetic listing '{place_id}' must be selected together with its business name")]
    UnnamedFallbackId { place_id: String },

    #[error("invalid places base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PlacesError {
    /// Whether the resolver should substitute synthetic data for this error.
    ///
    /// Provider and transport failures are absorbed; input validation errors
    /// are returned to the caller.
    #[must_use]
    pub fn is_fallback_eligible(&self) -> bool {
        !matches!(self, Self::EmptyPlaceId | Self::UnnamedFallbackId { .. })
    }
}
