#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which places-proxy endpoint backs search-as-you-type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// `GET /api/places/search?query=…` (text search).
    Text,
    /// `GET /api/places/autocomplete?input=…` (ranked predictions).
    Autocomplete,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Text => write!(f, "text"),
            SearchMode::Autocomplete => write!(f, "autocomplete"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Upstream mapping-provider key. `None` means the synthetic fallback is
    /// used for every place lookup.
    pub places_api_key: Option<String>,
    pub places_base_url: String,
    pub places_search_mode: SearchMode,
    pub html_proxy_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub suggest_min_chars: usize,
    pub suggest_debounce_ms: u64,
    pub suggest_max_results: usize,
}

impl AppConfig {
    /// Whether the primary places path should be attempted at all.
    #[must_use]
    pub fn places_enabled(&self) -> bool {
        self.places_api_key.is_some()
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field(
                "places_api_key",
                &self.places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("places_base_url", &self.places_base_url)
            .field("places_search_mode", &self.places_search_mode)
            .field("html_proxy_url", &self.html_proxy_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("suggest_min_chars", &self.suggest_min_chars)
            .field("suggest_debounce_ms", &self.suggest_debounce_ms)
            .field("suggest_max_results", &self.suggest_max_results)
            .finish()
    }
}
