use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn assert_rating_in_range(rating: &str) {
    let value: f64 = rating.parse().expect("rating should be numeric");
    assert!((3.5..=5.0).contains(&value), "rating {rating} out of range");
    let (_, decimals) = rating.split_once('.').expect("one decimal place");
    assert_eq!(decimals.len(), 1, "rating {rating} should have one decimal");
}

#[test]
fn fallback_ids_are_recognised() {
    assert!(is_fallback_id("fallback_1700000000000_0"));
    assert!(!is_fallback_id("ChIJN1t_tDeuEmsRUsoyG83frY4"));
}

#[test]
fn first_matching_keyword_wins() {
    let mut rng = rng(1);
    assert_eq!(business_category("Joe's Coffee House", &mut rng), "cafe");
    assert_eq!(business_category("Leeds Plumbing", &mut rng), "plumbing");
    assert_eq!(business_category("THE HAIR SALON", &mut rng), "salon");
}

#[test]
fn unmatched_term_gets_a_default_category() {
    for seed in 0..20 {
        let category = business_category("xyz", &mut rng(seed));
        assert!(DEFAULT_CATEGORIES.contains(&category), "got {category}");
    }
}

#[test]
fn unknown_category_uses_generic_labels() {
    assert_eq!(category_labels("services"), GENERIC_LABELS);
    assert_eq!(category_labels("cafe")[0], "Café");
}

#[test]
fn suggestions_count_ids_and_ratings() {
    for seed in 0..20 {
        let suggestions = fallback_suggestions("xyz", None, 1_700_000_000_000, &mut rng(seed));
        assert!((3..=5).contains(&suggestions.len()), "got {}", suggestions.len());
        for (i, suggestion) in suggestions.iter().enumerate() {
            assert_eq!(suggestion.id, format!("fallback_1700000000000_{i}"));
            assert!(suggestion.name.contains("xyz"));
            assert!(!suggestion.location.is_empty());
            assert_rating_in_range(suggestion.rating.as_deref().unwrap());
        }
    }
}

#[test]
fn first_suggestion_appends_missing_label() {
    let suggestions = fallback_suggestions("Joe's Coffee House", None, 0, &mut rng(7));
    assert_eq!(suggestions[0].name, "Joe's Coffee House Café");
}

#[test]
fn first_suggestion_matches_label_without_accents() {
    let suggestions = fallback_suggestions("Joe's Cafe", Some("Leeds"), 0, &mut rng(7));
    assert_eq!(suggestions[0].name, "Joe's Cafe");

    let suggestions = fallback_suggestions("JOE'S CAFÉ", None, 0, &mut rng(7));
    assert_eq!(suggestions[0].name, "JOE'S CAFÉ");
}

#[test]
fn first_suggestion_keeps_term_containing_label() {
    let suggestions = fallback_suggestions("Northside Gym", None, 0, &mut rng(7));
    assert_eq!(suggestions[0].name, "Northside Gym");
}

#[test]
fn later_suggestions_get_letter_disambiguators() {
    let suggestions = fallback_suggestions("Northside Gym", None, 0, &mut rng(3));
    assert!(!suggestions[1].name.contains("Gym A"));
    assert!(suggestions[2].name.contains("Northside Gym A"));
    if let Some(fourth) = suggestions.get(3) {
        assert!(fourth.name.contains("Northside Gym B"));
    }
}

#[test]
fn location_hint_is_used_verbatim() {
    let suggestions = fallback_suggestions("xyz", Some(" Leeds "), 0, &mut rng(2));
    assert!(suggestions.iter().all(|s| s.location == "Leeds"));
}

#[test]
fn random_location_is_a_known_pair() {
    let location = random_location(&mut rng(5));
    assert!(UK_LOCATIONS
        .iter()
        .any(|(city, county)| location == format!("{city}, {county}")));
}

#[test]
fn same_seed_same_suggestions() {
    let a = fallback_suggestions("Bloom Florists", None, 42, &mut rng(11));
    let b = fallback_suggestions("Bloom Florists", None, 42, &mut rng(11));
    assert_eq!(a, b);
}

#[test]
fn location_guess_uses_second_to_last_segment() {
    assert_eq!(location_guess(Some("1 High St, Leeds, UK")), "Leeds");
    assert_eq!(location_guess(Some("Leeds, West Yorkshire")), "Leeds");
    assert_eq!(location_guess(Some("Leeds")), "the area");
    assert_eq!(location_guess(Some(" , UK")), "the area");
    assert_eq!(location_guess(None), "the area");
}

#[test]
fn description_family_follows_categories() {
    assert_eq!(
        DescriptionFamily::for_categories("Coffee Shop, Bakery"),
        DescriptionFamily::Cafe
    );
    assert_eq!(
        DescriptionFamily::for_categories("Restaurant"),
        DescriptionFamily::Restaurant
    );
    assert_eq!(
        DescriptionFamily::for_categories("Medical Centre"),
        DescriptionFamily::Healthcare
    );
    assert_eq!(
        DescriptionFamily::for_categories("Boutique, Store"),
        DescriptionFamily::Retail
    );
    assert_eq!(
        DescriptionFamily::for_categories("Law Firm"),
        DescriptionFamily::Generic
    );
}

#[test]
fn every_template_mentions_name_year_and_location() {
    for category in ["Restaurant", "Café", "Store", "Clinic", "Law Firm"] {
        for seed in 0..12 {
            let text = generate_description("Joe's", category, "2001", "Leeds", &mut rng(seed));
            assert!(text.contains("Joe's"), "{text}");
            assert!(text.contains("2001"), "{text}");
            assert!(text.contains("Leeds"), "{text}");
        }
    }
}

#[test]
fn describe_profile_fills_only_missing_description() {
    let mut profile = BusinessProfile {
        name: Some("Joe's Cafe".to_string()),
        address: Some("1 High St, Leeds, UK".to_string()),
        categories: Some(vec!["Cafe".to_string()]),
        ..BusinessProfile::default()
    };
    describe_profile(&mut profile, 2026, &mut rng(4));
    let description = profile.description.clone().unwrap();
    assert!(description.contains("Joe's Cafe"));
    assert!(description.contains("2016"));
    assert!(description.contains("Leeds"));

    describe_profile(&mut profile, 2026, &mut rng(5));
    assert_eq!(profile.description.as_deref(), Some(description.as_str()));
}

#[test]
fn describe_profile_prefers_known_year() {
    let mut profile = BusinessProfile {
        name: Some("Bloom".to_string()),
        year_established: Some("1987".to_string()),
        ..BusinessProfile::default()
    };
    describe_profile(&mut profile, 2026, &mut rng(9));
    let description = profile.description.unwrap();
    assert!(description.contains("1987"));
    assert!(description.contains("the area"));
}

#[test]
fn place_profile_is_seeded_by_name() {
    let profile = fallback_place_profile("Bloom Florists", Some("Sheffield, South Yorkshire"), 2026, &mut rng(6));
    assert_eq!(profile.name.as_deref(), Some("Bloom Florists"));
    assert_eq!(profile.address.as_deref(), Some("Sheffield, South Yorkshire"));
    assert!(profile.categories.as_ref().is_some_and(|c| !c.is_empty()));
    assert_rating_in_range(profile.rating.as_deref().unwrap());
    let description = profile.description.unwrap();
    assert!(description.contains("Bloom Florists"));
    assert!(description.contains("Sheffield"));
    assert!(profile.phone.is_none());
}

#[test]
fn synthetic_places_implements_fallback_source() {
    let places = SyntheticPlaces::with_rng(rng(8));
    let suggestions = places.suggestions("Bloom", Some("Leeds"));
    assert!(suggestions.iter().all(|s| is_fallback_id(&s.id)));

    let profile = places.profile("Bloom", None).unwrap();
    assert_eq!(profile.name.as_deref(), Some("Bloom"));
    assert!(profile.description.is_some());
}
