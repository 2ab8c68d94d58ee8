//! Field-level merge of the website and place profiles.
//!
//! The place source is structured data from the mapping provider, so it wins
//! whenever it carries a non-empty value. The website value is kept where the
//! place source is silent.

use crate::profile::BusinessProfile;

/// Combines a website-derived and a place-derived profile into one.
///
/// For every field the place value is used when present and non-empty,
/// otherwise the website value; a field absent from both stays absent. Neither
/// input is modified.
#[must_use]
pub fn merge_profiles(
    website: Option<&BusinessProfile>,
    place: Option<&BusinessProfile>,
) -> BusinessProfile {
    let empty = BusinessProfile::default();
    let web = website.unwrap_or(&empty);
    let place = place.unwrap_or(&empty);

    BusinessProfile {
        name: pick_text(place.name.as_deref(), web.name.as_deref()),
        description: pick_text(place.description.as_deref(), web.description.as_deref()),
        hours: pick_list(place.hours.as_deref(), web.hours.as_deref()),
        address: pick_text(place.address.as_deref(), web.address.as_deref()),
        phone: pick_text(place.phone.as_deref(), web.phone.as_deref()),
        email: pick_text(place.email.as_deref(), web.email.as_deref()),
        rating: pick_text(place.rating.as_deref(), web.rating.as_deref()),
        reviews: pick_list(place.reviews.as_deref(), web.reviews.as_deref()),
        services: pick_list(place.services.as_deref(), web.services.as_deref()),
        products: pick_list(place.products.as_deref(), web.products.as_deref()),
        website: pick_text(place.website.as_deref(), web.website.as_deref()),
        categories: pick_list(place.categories.as_deref(), web.categories.as_deref()),
        year_established: pick_text(
            place.year_established.as_deref(),
            web.year_established.as_deref(),
        ),
    }
}

fn pick_text(preferred: Option<&str>, other: Option<&str>) -> Option<String> {
    match preferred {
        Some(value) if !value.trim().is_empty() => Some(value.to_owned()),
        _ => other.map(str::to_owned),
    }
}

fn pick_list(preferred: Option<&[String]>, other: Option<&[String]>) -> Option<Vec<String>> {
    match preferred {
        Some(values) if !values.is_empty() => Some(values.to_vec()),
        _ => other.map(<[String]>::to_vec),
    }
}
