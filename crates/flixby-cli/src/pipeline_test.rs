use flixby_places::PlacesClient;
use flixby_places::SyntheticPlaces;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn profile(name: &str) -> BusinessProfile {
    BusinessProfile {
        name: Some(name.to_owned()),
        ..BusinessProfile::default()
    }
}

fn unconfigured_resolver() -> PlacesResolver<PlacesClient, SyntheticPlaces> {
    let places =
        PlacesClient::with_base_url("http://127.0.0.1:9", false, 5, "flixby-test/0.1").unwrap();
    PlacesResolver::new(places, SyntheticPlaces::new())
}

fn unused_website_client() -> WebsiteClient {
    WebsiteClient::new("http://127.0.0.1:9/get", 5, "flixby-test/0.1").unwrap()
}

#[test]
fn request_requires_a_source() {
    let err = SetupRequest::new(None, PlaceSelection::new(Some("   "), None, None)).unwrap_err();
    assert!(err.to_string().contains("website URL"));
}

#[test]
fn request_trims_inputs() {
    let request = SetupRequest::new(Some(" joescafe.co.uk "), None).unwrap();
    assert_eq!(request.website_url.as_deref(), Some("joescafe.co.uk"));
    assert!(request.place.is_none());
}

#[test]
fn selection_trims_and_drops_blank_fields() {
    let selection =
        PlaceSelection::new(Some(" ChIJ123 "), Some(" Joe's Cafe "), Some("  ")).unwrap();
    assert_eq!(selection.place_id, "ChIJ123");
    assert_eq!(selection.name.as_deref(), Some("Joe's Cafe"));
    assert!(selection.location.is_none());
    assert!(PlaceSelection::new(None, Some("Joe's Cafe"), None).is_none());
}

#[tokio::test]
async fn search_then_select_then_prompt_without_provider() {
    let resolver = unconfigured_resolver();
    let suggestions = resolver.search("Joe's Cafe", Some("Leeds"), "token").await;
    let picked = &suggestions[0];
    assert_eq!(picked.name, "Joe's Cafe");

    let selection = PlaceSelection::new(
        Some(picked.id.as_str()),
        Some(picked.name.as_str()),
        Some(picked.location.as_str()),
    );
    let request = SetupRequest::new(None, selection).unwrap();
    let outcome = run_setup(&unused_website_client(), &resolver, &request)
        .await
        .unwrap();

    assert_eq!(outcome.website, SourceStatus::Skipped);
    assert_eq!(outcome.profile.name.as_deref(), Some("Joe's Cafe"));
    assert_eq!(outcome.profile.address.as_deref(), Some("Leeds"));
    assert!(outcome
        .system_prompt
        .starts_with("You are an AI assistant for Joe's Cafe."));
    assert!(!outcome.system_prompt.contains("fallback_"));
}

#[tokio::test]
async fn synthetic_id_without_name_is_reported() {
    let resolver = unconfigured_resolver();
    let suggestions = resolver.search("Joe's Cafe", None, "token").await;

    let selection = PlaceSelection::new(Some(suggestions[0].id.as_str()), None, None);
    let request = SetupRequest::new(None, selection).unwrap();
    let err = run_setup(&unused_website_client(), &resolver, &request)
        .await
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("must be selected together with its business name"), "got: {msg}");
}

#[test]
fn place_wins_over_website_field_by_field() {
    let website = BusinessProfile {
        phone: Some("111".to_owned()),
        ..profile("A")
    };
    let outcome = assemble(Some(Ok(website)), Some(Ok(profile("B")))).unwrap();

    assert_eq!(outcome.profile.name.as_deref(), Some("B"));
    assert_eq!(outcome.profile.phone.as_deref(), Some("111"));
    assert_eq!(outcome.website, SourceStatus::Loaded { fields: 2 });
    assert_eq!(outcome.place, SourceStatus::Loaded { fields: 1 });
    assert!(outcome.system_prompt.starts_with("You are an AI assistant for B."));
}

#[test]
fn website_error_is_reported_verbatim() {
    let outcome = assemble(Some(Err(ScraperError::EmptyUrl)), Some(Ok(profile("B")))).unwrap();
    assert_eq!(
        outcome.website,
        SourceStatus::Failed {
            error: "please enter a website URL".to_owned()
        }
    );
    assert_eq!(outcome.profile.name.as_deref(), Some("B"));
}

#[test]
fn nothing_collected_is_an_error() {
    let err = assemble(Some(Err(ScraperError::EmptyUrl)), None).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("please enter a website URL"), "got: {msg}");
    assert!(msg.contains("place: skipped"), "got: {msg}");
}

#[test]
fn status_serializes_with_tag() {
    let json = serde_json::to_value(SourceStatus::Loaded { fields: 3 }).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "loaded", "fields": 3 }));
    let json = serde_json::to_value(SourceStatus::Skipped).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "skipped" }));
}

#[tokio::test]
async fn setup_fetches_both_sources_and_merges() {
    let server = MockServer::start().await;
    let page = "<html><head><title>Joe's Cafe | Home</title></head>\
                <body><p>Call 0113 496 0000</p></body></html>";

    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "contents": page })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let website =
        WebsiteClient::new(&format!("{}/get", server.uri()), 5, "flixby-test/0.1").unwrap();
    // Disabled client: the listing comes from the synthetic generator.
    let places = PlacesClient::with_base_url(&server.uri(), false, 5, "flixby-test/0.1").unwrap();
    let resolver = PlacesResolver::new(places, SyntheticPlaces::new());

    let selection = PlaceSelection::new(Some("ChIJ123"), None, None);
    let request = SetupRequest::new(Some("joescafe.co.uk"), selection).unwrap();
    let outcome = run_setup(&website, &resolver, &request).await.unwrap();

    assert_eq!(outcome.profile.name.as_deref(), Some("ChIJ123"));
    assert_eq!(outcome.profile.phone.as_deref(), Some("0113 496 0000"));
    assert_eq!(
        outcome.profile.website.as_deref(),
        Some("https://joescafe.co.uk")
    );
    assert!(matches!(outcome.place, SourceStatus::Loaded { .. }));
    assert!(outcome.system_prompt.contains("Phone number: 0113 496 0000"));
}
