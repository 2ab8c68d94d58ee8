//! Named-section lookup in a parsed HTML document.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, h4, h5, h6").expect("valid heading selector"));
static ATTRIBUTED_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[id], [class]").expect("valid attribute selector"));

/// Finds the text of the first section matching one of `candidates`.
///
/// Headings (`h1`–`h6`) are scanned in document order; a heading matches when
/// its lower-cased text contains a candidate, with earlier candidates taking
/// priority for the same heading. The section body is the text of every
/// following sibling element up to, but not including, the next heading,
/// joined with newlines.
///
/// When no heading matches, elements whose `id` or `class` contains a
/// candidate are tried instead, candidate by candidate, and the first such
/// element's text is returned.
///
/// A match whose text is blank yields `None` rather than an empty string.
#[must_use]
pub fn find_section(document: &Html, candidates: &[&str]) -> Option<String> {
    let candidates: Vec<String> = candidates.iter().map(|c| c.to_lowercase()).collect();

    for heading in document.select(&HEADING_SELECTOR) {
        let heading_text = heading.text().collect::<String>().to_lowercase();
        if candidates.iter().any(|c| heading_text.contains(c.as_str())) {
            return non_blank(&section_body(heading));
        }
    }

    for candidate in &candidates {
        let matched = document.select(&ATTRIBUTED_SELECTOR).find(|el| {
            let value = el.value();
            [value.attr("id"), value.attr("class")]
                .into_iter()
                .flatten()
                .any(|attr| attr.to_lowercase().contains(candidate.as_str()))
        });
        if let Some(element) = matched {
            return non_blank(&element.text().collect::<String>());
        }
    }

    None
}

fn section_body(heading: ElementRef<'_>) -> String {
    let mut content = String::new();
    for sibling in heading.next_siblings().filter_map(ElementRef::wrap) {
        if is_heading(sibling.value().name()) {
            break;
        }
        content.extend(sibling.text());
        content.push('\n');
    }
    content
}

fn is_heading(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    #[test]
    fn collects_siblings_until_next_heading() {
        let document =
            doc("<h2>Opening Hours</h2><p>Mon-Fri 9-5</p><h2>Contact</h2><p>020 7946 0958</p>");
        assert_eq!(
            find_section(&document, &["hours", "opening hours"]).as_deref(),
            Some("Mon-Fri 9-5")
        );
    }

    #[test]
    fn joins_multiple_siblings_with_newlines() {
        let document = doc(
            "<h3>Our Services</h3><ul><li>Haircuts</li></ul><p>Colouring</p><p>Styling</p><h3>Team</h3>",
        );
        assert_eq!(
            find_section(&document, &["services"]).as_deref(),
            Some("Haircuts\nColouring\nStyling")
        );
    }

    #[test]
    fn heading_match_is_case_insensitive() {
        let document = doc("<h1>ABOUT US</h1><p>We bake bread.</p>");
        assert_eq!(
            find_section(&document, &["About"]).as_deref(),
            Some("We bake bread.")
        );
    }

    #[test]
    fn first_matching_heading_in_document_order_wins() {
        let document = doc(
            "<h2>What we do</h2><p>Plumbing</p><h2>Services</h2><p>Heating</p>",
        );
        assert_eq!(
            find_section(&document, &["services", "what we do"]).as_deref(),
            Some("Plumbing")
        );
    }

    #[test]
    fn unrelated_heading_terminates_section() {
        let document = doc(
            "<h2>About</h2><p>Family business.</p><h4>Gallery</h4><p>Photos</p>",
        );
        assert_eq!(
            find_section(&document, &["about"]).as_deref(),
            Some("Family business.")
        );
    }

    #[test]
    fn falls_back_to_id_attribute() {
        let document = doc(r#"<div id="opening-hours"> Monday 9-5 </div>"#);
        assert_eq!(
            find_section(&document, &["hours"]).as_deref(),
            Some("Monday 9-5")
        );
    }

    #[test]
    fn falls_back_to_class_attribute_in_candidate_order() {
        let document = doc(
            r#"<section class="services-list">Cuts</section><section class="about-block">Since 1990</section>"#,
        );
        assert_eq!(
            find_section(&document, &["about", "services"]).as_deref(),
            Some("Since 1990")
        );
    }

    #[test]
    fn blank_heading_section_is_absent() {
        let document = doc("<h2>Hours</h2><h2>Contact</h2>");
        assert_eq!(find_section(&document, &["hours"]), None);
    }

    #[test]
    fn returns_none_when_nothing_matches() {
        let document = doc("<h2>Welcome</h2><p>Hello</p>");
        assert_eq!(find_section(&document, &["hours", "opening hours"]), None);
    }
}
