//! Pattern-based field extractors.
//!
//! Every extractor is best-effort: a miss returns `None` and the caller leaves
//! the profile field unset.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Node, Selector};

/// UK numbering: `+44` or a leading `0`, then two or three space-separated
/// groups of 2–4 digits.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+44|0)(?: *\d{4}| *\d{3}| *\d{2}){2,3}").expect("valid phone regex")
});
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid email regex")
});

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("valid title selector"));
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("valid meta selector")
});
static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("valid body selector"));

const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Elements whose text is never rendered.
const INVISIBLE_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

/// First UK-style phone number in `text`.
#[must_use]
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().trim().to_string())
}

/// First email address in `text`.
#[must_use]
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// Business-name hint from the document title.
///
/// `"Joe's Cafe | Home"` and `"Joe's Cafe - Leeds"` both yield `"Joe's Cafe"`.
#[must_use]
pub fn extract_title(document: &Html) -> Option<String> {
    let title = document
        .select(&TITLE_SELECTOR)
        .next()?
        .text()
        .collect::<String>();
    let name = title
        .split('|')
        .next()
        .and_then(|segment| segment.split('-').next())
        .map(str::trim)?;
    (!name.is_empty()).then(|| name.to_string())
}

/// `content` of `<meta name="description">`, verbatim.
#[must_use]
pub fn extract_meta_description(document: &Html) -> Option<String> {
    document
        .select(&META_DESCRIPTION_SELECTOR)
        .find_map(|meta| meta.value().attr("content"))
        .filter(|content| !content.trim().is_empty())
        .map(str::to_string)
}

/// Visible text of the document body, with script and style contents skipped.
///
/// Adjacent text nodes are separated by a space unless either side already
/// has whitespace at the boundary.
#[must_use]
pub fn body_text(document: &Html) -> String {
    let root = document
        .select(&BODY_SELECTOR)
        .next()
        .unwrap_or_else(|| document.root_element());

    let mut out = String::new();
    for node in root.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .is_some_and(|el| INVISIBLE_TAGS.contains(&el.name()));
        if hidden || text.is_empty() {
            continue;
        }
        let needs_gap = out.chars().last().is_some_and(|c| !c.is_whitespace())
            && text.chars().next().is_some_and(|c| !c.is_whitespace());
        if needs_gap {
            out.push(' ');
        }
        out.push_str(text);
    }
    out
}

/// Keeps only the lines of an hours block that name a weekday.
///
/// When no line mentions a weekday the whole block is returned as a single
/// entry, so free-form hours text is never dropped.
#[must_use]
pub fn parse_hours(block: &str) -> Vec<String> {
    let matched: Vec<String> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            let lower = line.to_lowercase();
            WEEKDAYS.iter().any(|day| lower.contains(day))
        })
        .map(str::to_string)
        .collect();

    if matched.is_empty() {
        vec![block.to_string()]
    } else {
        matched
    }
}

/// Non-blank, trimmed lines of a section body.
#[must_use]
pub fn split_lines(block: &str) -> Vec<String> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;
