use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("please enter a website URL")]
    EmptyUrl,

    #[error("invalid website URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} while fetching {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("proxy returned no page contents for {url}")]
    MissingContents { url: String },
}
