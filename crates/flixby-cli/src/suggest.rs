//! Search-as-you-type driven from stdin.

use std::sync::Arc;
use std::time::Duration;

use flixby_core::BusinessSuggestion;
use flixby_places::{FallbackSource, PlaceSource, PlacesResolver, SuggestionSession, SuggestionUpdate};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Feeds each stdin line into a debounced session and prints every update
/// that survives debouncing. Returns after the lookup for the final line has
/// been printed.
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub(crate) async fn run_interactive<P, F>(
    resolver: Arc<PlacesResolver<P, F>>,
    debounce: Duration,
    location: Option<String>,
) -> anyhow::Result<()>
where
    P: PlaceSource + 'static,
    F: FallbackSource + 'static,
{
    let mut session = SuggestionSession::new(resolver, debounce);
    let mut updates = session.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last_seq = 0;
    let mut printed_seq = 0;

    tracing::debug!(token = session.token(), "suggestion session started");
    eprintln!("type a business name; each line replaces the previous one (Ctrl-D to finish)");

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => last_seq = session.input(&line, location.as_deref()),
                None => break,
            },
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let update = updates.borrow_and_update().clone();
                print_update(&update, &mut printed_seq);
            }
        }
    }

    // Stdin is closed; wait for the last input to settle.
    while printed_seq < last_seq {
        let update = updates.borrow_and_update().clone();
        if update.seq >= last_seq {
            print_update(&update, &mut printed_seq);
            break;
        }
        if updates.changed().await.is_err() {
            break;
        }
    }
    Ok(())
}

fn print_update(update: &SuggestionUpdate, printed_seq: &mut u64) {
    if update.seq <= *printed_seq {
        return;
    }
    *printed_seq = update.seq;
    print_suggestions(&update.term, &update.suggestions);
}

pub(crate) fn print_suggestions(term: &str, suggestions: &[BusinessSuggestion]) {
    if suggestions.is_empty() {
        println!("no suggestions for \"{}\"", term.trim());
        return;
    }
    println!("suggestions for \"{}\":", term.trim());
    for (i, suggestion) in suggestions.iter().enumerate() {
        let rating = suggestion
            .rating
            .as_deref()
            .map(|r| format!(" ({r}/5)"))
            .unwrap_or_default();
        println!(
            "  {}. {}{rating}  [{}]",
            i + 1,
            suggestion.description(),
            suggestion.id
        );
    }
    eprintln!("select one with: flixby prompt --place-id <id> --name <name> --location <location>");
}
