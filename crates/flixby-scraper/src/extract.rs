//! Builds a [`BusinessProfile`] from raw website HTML.

use flixby_core::BusinessProfile;
use scraper::Html;

use crate::fields::{
    body_text, extract_email, extract_meta_description, extract_phone, extract_title, parse_hours,
    split_lines,
};
use crate::section::find_section;

/// Heading or attribute names that identify the "about" section, in priority order.
pub const ABOUT_SECTION: &[&str] = &["about", "about us", "our company", "who we are"];
pub const SERVICES_SECTION: &[&str] = &["services", "our services", "what we do"];
pub const HOURS_SECTION: &[&str] = &["hours", "business hours", "opening hours", "we are open"];

/// Extracts every website-derived field from `html`.
///
/// `website_url` is stored verbatim as the profile's `website`. The "about"
/// section, when found, replaces the meta description.
#[must_use]
pub fn extract_profile(html: &str, website_url: &str) -> BusinessProfile {
    let document = Html::parse_document(html);
    let body = body_text(&document);

    let description =
        find_section(&document, ABOUT_SECTION).or_else(|| extract_meta_description(&document));
    let services = find_section(&document, SERVICES_SECTION)
        .map(|section| split_lines(&section))
        .filter(|lines| !lines.is_empty());
    let hours = find_section(&document, HOURS_SECTION).map(|section| parse_hours(&section));

    BusinessProfile {
        name: extract_title(&document),
        description,
        hours,
        phone: extract_phone(&body),
        email: extract_email(&body),
        services,
        website: Some(website_url.to_owned()),
        ..BusinessProfile::default()
    }
}
