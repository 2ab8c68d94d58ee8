//! Place lookups for the quick-setup pipeline.
//!
//! [`PlacesClient`] talks to the places proxy; [`SyntheticPlaces`] generates
//! plausible stand-in data; [`PlacesResolver`] composes the two so that
//! searches never fail and place selections only fail on bad input.
//! [`SuggestionSession`] adds debouncing and last-request-wins ordering on
//! top of the resolver for search-as-you-type.

pub mod client;
pub mod error;
pub mod fallback;
pub mod normalize;
pub mod resolver;
pub mod session;
pub mod types;

pub use client::{PlacesClient, MAX_SUGGESTIONS};
pub use error::PlacesError;
pub use fallback::{is_fallback_id, SyntheticPlaces, FALLBACK_ID_PREFIX};
pub use resolver::{FallbackSource, PlaceSource, PlacesResolver, DEFAULT_MIN_CHARS};
pub use session::{SuggestionSession, SuggestionUpdate, DEFAULT_DEBOUNCE};
