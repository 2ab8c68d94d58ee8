//! Synthetic place data used when the places provider is unavailable.
//!
//! Everything here is driven by an injected [`Rng`], so a seeded
//! `StdRng` makes the output reproducible.

use std::sync::{Mutex, PoisonError};

use chrono::{Datelike, Utc};
use flixby_core::{BusinessProfile, BusinessSuggestion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::PlacesError;
use crate::resolver::FallbackSource;

/// Prefix of every synthetic suggestion id. Such ids are unknown to the
/// provider and must never be sent to the details endpoint.
pub const FALLBACK_ID_PREFIX: &str = "fallback_";

/// Keyword → business category. The first keyword contained in the
/// lower-cased term wins.
const CATEGORY_KEYWORDS: &[(&str, &str)] = &[
    ("restaurant", "restaurant"),
    ("café", "cafe"),
    ("cafe", "cafe"),
    ("coffee", "cafe"),
    ("bakery", "bakery"),
    ("salon", "salon"),
    ("spa", "spa"),
    ("gym", "gym"),
    ("fitness", "gym"),
    ("shop", "retail"),
    ("store", "retail"),
    ("market", "retail"),
    ("tech", "technology"),
    ("consulting", "consulting"),
    ("agency", "agency"),
    ("law", "legal"),
    ("solicitor", "legal"),
    ("legal", "legal"),
    ("clinic", "healthcare"),
    ("medical", "healthcare"),
    ("doctor", "healthcare"),
    ("dental", "dental"),
    ("dentist", "dental"),
    ("hotel", "hotel"),
    ("motel", "hotel"),
    ("inn", "hotel"),
    ("auto", "automotive"),
    ("car", "automotive"),
    ("repair", "repair"),
    ("plumb", "plumbing"),
    ("electric", "electrical"),
    ("pet", "pet"),
    ("vet", "veterinary"),
    ("clean", "cleaning"),
    ("estate agent", "real estate"),
    ("property", "real estate"),
    ("school", "education"),
    ("academy", "education"),
    ("education", "education"),
    ("construction", "construction"),
    ("build", "construction"),
    ("photo", "photography"),
    ("design", "design"),
    ("graphic", "design"),
    ("art", "art"),
    ("gallery", "art"),
];

/// Picked at random when no keyword matches.
const DEFAULT_CATEGORIES: [&str; 5] = ["retail", "restaurant", "consulting", "services", "technology"];

const GENERIC_LABELS: &[&str] = &["Business", "Company", "Services"];

const UK_LOCATIONS: [(&str, &str); 10] = [
    ("London", "Greater London"),
    ("Manchester", "Greater Manchester"),
    ("Birmingham", "West Midlands"),
    ("Liverpool", "Merseyside"),
    ("Glasgow", "Lanarkshire"),
    ("Edinburgh", "Midlothian"),
    ("Cardiff", "South Glamorgan"),
    ("Belfast", "County Antrim"),
    ("Leeds", "West Yorkshire"),
    ("Sheffield", "South Yorkshire"),
];

const NAME_PREFIXES: [&str; 6] = ["The ", "Best ", "Premium ", "Elite ", "", ""];
const NAME_SUFFIXES: [&str; 6] = [" Group", " Ltd", " Limited", " Co", " & Sons", ""];

/// Location used in descriptions when the address gives no hint.
const UNKNOWN_LOCATION: &str = "the area";

/// Whether `id` was minted by the synthetic generator.
#[must_use]
pub fn is_fallback_id(id: &str) -> bool {
    id.starts_with(FALLBACK_ID_PREFIX)
}

/// Business category for a name or search term.
pub fn business_category<R: Rng + ?Sized>(term: &str, rng: &mut R) -> &'static str {
    let lower = term.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or_else(
            || DEFAULT_CATEGORIES[rng.random_range(0..DEFAULT_CATEGORIES.len())],
            |(_, category)| *category,
        )
}

/// Display labels associated with a category, most representative first.
#[must_use]
pub fn category_labels(category: &str) -> &'static [&'static str] {
    match category {
        "restaurant" => &["Restaurant", "Café", "Bistro", "Eatery", "Dining"],
        "cafe" => &["Café", "Coffee Shop", "Bakery", "Tea Room"],
        "bakery" => &["Bakery", "Pastry Shop", "Cake Shop", "Dessert Place"],
        "salon" => &["Salon", "Hair Studio", "Beauty Parlor", "Spa"],
        "spa" => &["Spa", "Wellness Centre", "Massage Therapy", "Day Spa"],
        "gym" => &["Gym", "Fitness Centre", "Health Club", "Training Studio"],
        "retail" => &["Store", "Shop", "Boutique", "Retailer", "Market"],
        "technology" => &["Tech Company", "IT Services", "Software Development"],
        "consulting" => &["Consulting Firm", "Advisory Services", "Consultancy"],
        "agency" => &["Agency", "Creative Studio", "Marketing Agency"],
        "legal" => &["Law Firm", "Legal Services", "Solicitors"],
        "healthcare" => &["Medical Centre", "Clinic", "Healthcare Provider"],
        "dental" => &["Dental Practice", "Dentist", "Orthodontist"],
        "hotel" => &["Hotel", "Lodge", "Inn", "Accommodations"],
        "automotive" => &["Auto Shop", "Car Dealership", "Mechanic"],
        "repair" => &["Repair Shop", "Fix-It Service", "Maintenance"],
        "plumbing" => &["Plumbing Service", "Plumber", "Water Systems"],
        "electrical" => &["Electrical Service", "Electrician", "Electric Repairs"],
        "pet" => &["Pet Store", "Pet Supplies", "Animal Care"],
        "veterinary" => &["Veterinary Clinic", "Animal Hospital", "Pet Care"],
        "cleaning" => &["Cleaning Service", "Janitorial", "Housekeeping"],
        "real estate" => &["Estate Agent", "Property Management", "Property Consultants"],
        "education" => &["School", "Academy", "Learning Centre", "Education Centre"],
        "construction" => &["Construction Company", "Builders", "Contractors"],
        "photography" => &["Photography Studio", "Photo Services", "Photographer"],
        "design" => &["Design Studio", "Graphic Design", "Creative Agency"],
        "art" => &["Art Gallery", "Art Studio", "Craft Shop", "Artist Workshop"],
        _ => GENERIC_LABELS,
    }
}

/// Rating text in `[3.5, 5.0]` with one decimal place.
pub fn random_rating<R: Rng + ?Sized>(rng: &mut R) -> String {
    let tenths: u32 = rng.random_range(35..=50);
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// `"City, County"` drawn from a fixed set of UK pairs.
pub fn random_location<R: Rng + ?Sized>(rng: &mut R) -> String {
    let (city, county) = UK_LOCATIONS[rng.random_range(0..UK_LOCATIONS.len())];
    format!("{city}, {county}")
}

/// Second-to-last comma segment of `address`, or `"the area"`.
///
/// `"1 High St, Leeds, UK"` → `"Leeds"`.
#[must_use]
pub fn location_guess(address: Option<&str>) -> String {
    address
        .and_then(|address| {
            let segments: Vec<&str> = address.split(',').collect();
            segments
                .len()
                .checked_sub(2)
                .map(|i| segments[i].trim())
        })
        .filter(|segment| !segment.is_empty())
        .map_or_else(|| UNKNOWN_LOCATION.to_owned(), str::to_owned)
}

/// Builds 3–5 plausible suggestions for `term`.
///
/// Suggestion 0 is the term itself, with a category label appended when the
/// term does not already contain it. Later entries get a random prefix and
/// suffix, plus a letter disambiguator from index 2 on. `issued_at_ms` is
/// embedded in every id.
pub fn fallback_suggestions<R: Rng + ?Sized>(
    term: &str,
    location_hint: Option<&str>,
    issued_at_ms: i64,
    rng: &mut R,
) -> Vec<BusinessSuggestion> {
    let labels = category_labels(business_category(term, rng));
    let count = rng.random_range(3..=5_usize);
    let folded_term = fold_for_match(term);

    let mut suggestions = Vec::with_capacity(count);
    for i in 0..count {
        let label = labels[i % labels.len()];
        let name = if i == 0 {
            if folded_term.contains(&fold_for_match(label)) {
                term.to_owned()
            } else {
                format!("{term} {label}")
            }
        } else {
            let prefix = NAME_PREFIXES[rng.random_range(0..NAME_PREFIXES.len())];
            let suffix = NAME_SUFFIXES[rng.random_range(0..NAME_SUFFIXES.len())];
            let letter = if i >= 2 {
                format!(" {}", disambiguator(i - 2))
            } else {
                String::new()
            };
            format!("{prefix}{term}{letter}{suffix}")
        };
        let rating = random_rating(rng);
        let location = location_hint
            .map(str::trim)
            .filter(|hint| !hint.is_empty())
            .map_or_else(|| random_location(rng), str::to_owned);

        suggestions.push(BusinessSuggestion {
            id: format!("{FALLBACK_ID_PREFIX}{issued_at_ms}_{i}"),
            name,
            location,
            rating: Some(rating),
        });
    }
    suggestions
}

/// Lower-cases and strips diacritics, so `"Café"` matches `"cafe"`.
fn fold_for_match(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// `0` → `'A'`, `1` → `'B'`, …
fn disambiguator(index: usize) -> char {
    ('A'..='Z').nth(index).unwrap_or('Z')
}

/// Template family for generated descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DescriptionFamily {
    Restaurant,
    Cafe,
    Retail,
    Healthcare,
    Generic,
}

impl DescriptionFamily {
    fn for_categories(category_text: &str) -> Self {
        let lower = category_text.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));
        if has(&["restaurant"]) {
            Self::Restaurant
        } else if has(&["cafe", "café", "coffee"]) {
            Self::Cafe
        } else if has(&["retail", "store", "shop"]) {
            Self::Retail
        } else if has(&["health", "medical", "clinic", "doctor"]) {
            Self::Healthcare
        } else {
            Self::Generic
        }
    }
}

/// Writes a short marketing-style description for a business.
///
/// The template family follows `category_text`; the template within the
/// family is chosen by `rng`.
pub fn generate_description<R: Rng + ?Sized>(
    name: &str,
    category_text: &str,
    year: &str,
    location: &str,
    rng: &mut R,
) -> String {
    let kind = category_text;
    let mut templates = match DescriptionFamily::for_categories(category_text) {
        DescriptionFamily::Restaurant => vec![
            format!("{name} is a beloved {kind} establishment serving delicious cuisine since {year}. Located in {location}, we pride ourselves on using fresh, locally-sourced ingredients and providing an exceptional dining experience for our guests."),
            format!("Established in {year}, {name} offers a unique dining experience in the heart of {location}. We specialise in crafting memorable meals in a welcoming atmosphere that keeps our customers coming back."),
            format!("Welcome to {name}, {location}'s premier dining destination since {year}. Our passionate chefs create innovative dishes that celebrate local flavours and global culinary traditions."),
        ],
        DescriptionFamily::Cafe => vec![
            format!("{name} is a cozy café in {location} that has been serving premium coffee and delightful treats since {year}. We're committed to creating a warm, inviting space where our community can gather and connect."),
            format!("Since {year}, {name} has been {location}'s favourite spot for specialty coffee, artisanal teas, and freshly baked goods. We source our beans ethically and roast them with care."),
            format!("{name} is more than just a café. We've been a local institution in {location} since {year}, and our passion for quality coffee and exceptional service creates a unique experience for every customer."),
        ],
        DescriptionFamily::Retail => vec![
            format!("{name} has been a trusted retailer in {location} since {year}, offering a carefully curated selection of high-quality products. Our knowledgeable staff is dedicated to providing personalised service."),
            format!("Established in {year}, {name} is {location}'s destination for premium shopping. We take pride in our product selection and commitment to customer satisfaction."),
            format!("At {name}, we've been serving the {location} community since {year} with unique merchandise and exceptional customer service. Our mission is to provide products that enhance our customers' lives."),
        ],
        DescriptionFamily::Healthcare => vec![
            format!("{name} has been providing compassionate healthcare services to the {location} community since {year}. Our dedicated team of professionals is committed to your health and wellbeing."),
            format!("Established in {year}, {name} delivers patient-centered healthcare with a focus on excellence and innovation. We're proud to serve {location} with comprehensive medical services."),
            format!("{name} is a trusted healthcare provider in {location} since {year}. Our experienced practitioners combine cutting-edge medical technology with personalised care."),
        ],
        DescriptionFamily::Generic => vec![
            format!("{name} is a leading {kind} business serving {location} since {year}. We're committed to excellence and customer satisfaction in everything we do."),
            format!("Established in {year}, {name} provides top-quality {kind} services to clients throughout {location}. Our experienced team delivers professional solutions tailored to your needs."),
            format!("{name} has proudly served the {location} area since {year}. As a trusted local {kind} business, we combine expertise with personalised service to exceed our customers' expectations."),
        ],
    };
    let index = rng.random_range(0..templates.len());
    templates.swap_remove(index)
}

/// Fills `profile.description` when it is missing.
///
/// Uses the profile's categories (or `"business"`), its established year (or
/// `current_year - 10`) and the location guessed from its address.
pub fn describe_profile<R: Rng + ?Sized>(
    profile: &mut BusinessProfile,
    current_year: i32,
    rng: &mut R,
) {
    if profile.description.is_some() {
        return;
    }
    let category_text = profile
        .categories
        .as_ref()
        .filter(|c| !c.is_empty())
        .map_or_else(|| "business".to_owned(), |c| c.join(", "));
    let year = profile
        .year_established
        .clone()
        .unwrap_or_else(|| (current_year - 10).to_string());
    let location = location_guess(profile.address.as_deref());
    let name = profile.name.as_deref().unwrap_or_default();

    profile.description = Some(generate_description(
        name,
        &category_text,
        &year,
        &location,
        rng,
    ));
}

/// A complete synthetic place profile named `seed`.
///
/// `location`, when given, becomes the address; otherwise a random UK
/// location is used.
pub fn fallback_place_profile<R: Rng + ?Sized>(
    seed: &str,
    location: Option<&str>,
    current_year: i32,
    rng: &mut R,
) -> BusinessProfile {
    let labels = category_labels(business_category(seed, rng));
    let address = location
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map_or_else(|| random_location(rng), str::to_owned);

    let mut profile = BusinessProfile {
        name: Some(seed.to_owned()),
        address: Some(address),
        rating: Some(random_rating(rng)),
        categories: Some(labels.iter().take(2).map(ToString::to_string).collect()),
        ..BusinessProfile::default()
    };
    describe_profile(&mut profile, current_year, rng);
    profile
}

/// Thread-safe synthetic generator implementing [`FallbackSource`].
///
/// The RNG sits behind a mutex so one generator can be shared by the
/// resolver across tasks.
pub struct SyntheticPlaces<R = StdRng> {
    rng: Mutex<R>,
}

impl SyntheticPlaces<StdRng> {
    /// A generator seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Default for SyntheticPlaces<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SyntheticPlaces<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn with_rng_mut<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        // A panic while holding the lock cannot leave an RNG inconsistent.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

impl<R: Rng + Send> FallbackSource for SyntheticPlaces<R> {
    fn suggestions(&self, term: &str, location_hint: Option<&str>) -> Vec<BusinessSuggestion> {
        let issued_at_ms = Utc::now().timestamp_millis();
        self.with_rng_mut(|rng| fallback_suggestions(term, location_hint, issued_at_ms, rng))
    }

    fn profile(&self, seed: &str, location: Option<&str>) -> Result<BusinessProfile, PlacesError> {
        let current_year = Utc::now().year();
        Ok(self.with_rng_mut(|rng| fallback_place_profile(seed, location, current_year, rng)))
    }

    fn describe(&self, profile: &mut BusinessProfile) {
        let current_year = Utc::now().year();
        self.with_rng_mut(|rng| describe_profile(profile, current_year, rng));
    }
}

#[cfg(test)]
#[path = "fallback_test.rs"]
mod tests;
