//! Website source for the quick-setup pipeline.
//!
//! Fetches a business website through a read-through proxy, parses the HTML,
//! and extracts a best-effort [`flixby_core::BusinessProfile`]. Extraction
//! misses are not errors; the corresponding fields are simply left unset.

pub mod client;
pub mod error;
pub mod extract;
pub mod fields;
pub mod section;

pub use client::{normalize_url, WebsiteClient};
pub use error::ScraperError;
pub use extract::extract_profile;
pub use section::find_section;
