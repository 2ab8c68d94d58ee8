//! Normalization of places proxy payloads into pipeline types.

use flixby_core::{BusinessProfile, BusinessSuggestion};

use crate::types::{AutocompletePrediction, PlaceDetails, PlaceSearchResult};

/// Reviews kept per place profile.
pub const MAX_REVIEWS: usize = 3;

/// Turns a provider type tag into a display label.
///
/// Underscores become spaces and every word is capitalized:
/// `"coffee_shop"` → `"Coffee Shop"`. Already formatted labels pass through.
#[must_use]
pub fn format_category(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for c in raw.trim().chars() {
        let c = if c == '_' { ' ' } else { c };
        if at_word_start && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }
    out
}

/// Maps a details payload into a [`BusinessProfile`].
///
/// Blank strings and empty lists become `None` so that the merger treats them
/// as unknown. At most [`MAX_REVIEWS`] reviews are kept.
#[must_use]
pub fn details_to_profile(details: PlaceDetails) -> BusinessProfile {
    let categories = details.categories.map(|raw| {
        raw.iter()
            .map(|category| format_category(category))
            .filter(|category| !category.is_empty())
            .collect()
    });
    let reviews = details.reviews.map(|mut reviews| {
        reviews.retain(|review| !review.trim().is_empty());
        reviews.truncate(MAX_REVIEWS);
        reviews
    });

    BusinessProfile {
        name: non_blank(details.name),
        description: non_blank(details.description),
        hours: non_empty(details.hours.map(drop_blank_lines)),
        address: non_blank(details.address),
        phone: non_blank(details.phone),
        rating: non_blank(details.rating),
        reviews: non_empty(reviews),
        website: non_blank(details.website),
        categories: non_empty(categories),
        year_established: non_blank(details.year_established),
        ..BusinessProfile::default()
    }
}

/// Text-search results become suggestions in provider order.
///
/// Entries without a usable name are dropped.
#[must_use]
pub fn search_results_to_suggestions(results: Vec<PlaceSearchResult>) -> Vec<BusinessSuggestion> {
    results
        .into_iter()
        .filter_map(|result| {
            let name = non_blank(result.name)?;
            Some(BusinessSuggestion {
                id: result.id,
                name,
                location: result.location.unwrap_or_default().trim().to_owned(),
                rating: non_blank(result.rating),
            })
        })
        .collect()
}

/// Autocomplete predictions carry no rating; the main text is the name and
/// the secondary text the location.
#[must_use]
pub fn predictions_to_suggestions(
    predictions: Vec<AutocompletePrediction>,
) -> Vec<BusinessSuggestion> {
    predictions
        .into_iter()
        .filter_map(|prediction| {
            let name = non_blank(prediction.main_text).or_else(|| non_blank(prediction.description))?;
            Some(BusinessSuggestion {
                id: prediction.id,
                name,
                location: prediction.secondary_text.unwrap_or_default().trim().to_owned(),
                rating: None,
            })
        })
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn non_empty(list: Option<Vec<String>>) -> Option<Vec<String>> {
    list.filter(|l| !l.is_empty())
}

fn drop_blank_lines(mut lines: Vec<String>) -> Vec<String> {
    lines.retain(|line| !line.trim().is_empty());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_category_capitalizes_words() {
        assert_eq!(format_category("coffee_shop"), "Coffee Shop");
        assert_eq!(format_category("point_of_interest"), "Point Of Interest");
        assert_eq!(format_category("Cafe"), "Cafe");
        assert_eq!(format_category("bakery"), "Bakery");
    }

    #[test]
    fn details_map_to_profile() {
        let details = PlaceDetails {
            name: Some("Joe's Cafe".to_string()),
            address: Some("1 High St, Leeds, UK".to_string()),
            phone: Some("0113 496 0000".to_string()),
            website: Some(String::new()),
            rating: Some("4.6".to_string()),
            categories: Some(vec!["cafe".to_string(), "food_and_drink".to_string()]),
            hours: Some(vec![]),
            reviews: Some(vec![
                "Great".to_string(),
                "Lovely".to_string(),
                " ".to_string(),
                "Busy".to_string(),
                "Slow".to_string(),
            ]),
            ..PlaceDetails::default()
        };

        let profile = details_to_profile(details);
        assert_eq!(profile.name.as_deref(), Some("Joe's Cafe"));
        assert_eq!(profile.address.as_deref(), Some("1 High St, Leeds, UK"));
        assert_eq!(profile.rating.as_deref(), Some("4.6"));
        assert!(profile.website.is_none(), "blank website must be omitted");
        assert!(profile.hours.is_none(), "empty hours must be omitted");
        assert_eq!(
            profile.categories,
            Some(vec!["Cafe".to_string(), "Food And Drink".to_string()])
        );
        assert_eq!(
            profile.reviews,
            Some(vec![
                "Great".to_string(),
                "Lovely".to_string(),
                "Busy".to_string()
            ])
        );
        assert!(profile.description.is_none());
    }

    #[test]
    fn search_results_keep_order_and_drop_nameless() {
        let results = vec![
            PlaceSearchResult {
                id: "b".to_string(),
                name: Some("Bloom".to_string()),
                location: Some("Sheffield".to_string()),
                rating: Some("4.1".to_string()),
            },
            PlaceSearchResult {
                id: "x".to_string(),
                name: None,
                location: None,
                rating: None,
            },
            PlaceSearchResult {
                id: "a".to_string(),
                name: Some("Aster".to_string()),
                location: None,
                rating: None,
            },
        ];
        let suggestions = search_results_to_suggestions(results);
        let ids: Vec<&str> = suggestions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(suggestions[1].location, "");
    }

    #[test]
    fn predictions_fall_back_to_description() {
        let predictions = vec![AutocompletePrediction {
            id: "p".to_string(),
            description: Some("Joe's Cafe, Leeds".to_string()),
            main_text: None,
            secondary_text: Some("Leeds".to_string()),
        }];
        let suggestions = predictions_to_suggestions(predictions);
        assert_eq!(suggestions[0].name, "Joe's Cafe, Leeds");
        assert_eq!(suggestions[0].location, "Leeds");
        assert!(suggestions[0].rating.is_none());
    }
}
