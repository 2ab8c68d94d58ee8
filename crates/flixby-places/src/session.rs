//! Debounced search-as-you-type.
//!
//! A [`SuggestionSession`] owns one session token and at most one pending
//! lookup. Each new input aborts the pending lookup and schedules a fresh one
//! after the quiescence window. Every input takes the next sequence number,
//! and a result is published only while its sequence number is still the
//! latest issued, so a slow stale lookup can never overwrite newer results.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use flixby_core::BusinessSuggestion;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::resolver::{FallbackSource, PlaceSource, PlacesResolver};

/// Default quiescence window before a lookup is issued.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// The most recent published search outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionUpdate {
    /// Sequence number of the input that produced this update. `0` before
    /// any input.
    pub seq: u64,
    pub term: String,
    pub suggestions: Vec<BusinessSuggestion>,
}

pub struct SuggestionSession<P, F> {
    resolver: Arc<PlacesResolver<P, F>>,
    token: Arc<str>,
    debounce: Duration,
    latest_seq: Arc<AtomicU64>,
    updates: Arc<watch::Sender<SuggestionUpdate>>,
    pending: Option<JoinHandle<()>>,
}

impl<P, F> SuggestionSession<P, F>
where
    P: PlaceSource + 'static,
    F: FallbackSource + 'static,
{
    /// Starts a session with a fresh random session token.
    pub fn new(resolver: Arc<PlacesResolver<P, F>>, debounce: Duration) -> Self {
        let (updates, _) = watch::channel(SuggestionUpdate::default());
        Self {
            resolver,
            token: uuid::Uuid::new_v4().to_string().into(),
            debounce,
            latest_seq: Arc::new(AtomicU64::new(0)),
            updates: Arc::new(updates),
            pending: None,
        }
    }

    /// Token sent with every lookup of this session.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Receiver that observes every published update.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SuggestionUpdate> {
        self.updates.subscribe()
    }

    #[must_use]
    pub fn latest(&self) -> SuggestionUpdate {
        self.updates.borrow().clone()
    }

    /// Feeds a new value of the search box into the session.
    ///
    /// Returns the sequence number assigned to this input. A term below the
    /// minimum length publishes an empty update immediately and schedules
    /// nothing.
    pub fn input(&mut self, term: &str, location_hint: Option<&str>) -> u64 {
        let seq = self.latest_seq.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        if !self.resolver.accepts(term) {
            publish(
                &self.updates,
                &self.latest_seq,
                SuggestionUpdate {
                    seq,
                    term: term.to_owned(),
                    suggestions: Vec::new(),
                },
            );
            return seq;
        }

        let resolver = Arc::clone(&self.resolver);
        let token = Arc::clone(&self.token);
        let updates = Arc::clone(&self.updates);
        let latest_seq = Arc::clone(&self.latest_seq);
        let debounce = self.debounce;
        let term = term.to_owned();
        let hint = location_hint.map(str::to_owned);

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if latest_seq.load(Ordering::SeqCst) != seq {
                return;
            }
            let suggestions = resolver.search(&term, hint.as_deref(), &token).await;
            tracing::debug!(seq, term = %term, count = suggestions.len(), "suggestions ready");
            publish(
                &updates,
                &latest_seq,
                SuggestionUpdate {
                    seq,
                    term,
                    suggestions,
                },
            );
        }));
        seq
    }

    /// Aborts any pending lookup without publishing.
    pub fn cancel(&mut self) {
        self.latest_seq.fetch_add(1, Ordering::SeqCst);
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl<P, F> Drop for SuggestionSession<P, F> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

/// Stores `update` unless a newer input has been issued since.
fn publish(
    updates: &watch::Sender<SuggestionUpdate>,
    latest_seq: &AtomicU64,
    update: SuggestionUpdate,
) {
    updates.send_if_modified(|current| {
        if update.seq != latest_seq.load(Ordering::SeqCst) || update.seq <= current.seq {
            return false;
        }
        *current = update;
        true
    });
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
