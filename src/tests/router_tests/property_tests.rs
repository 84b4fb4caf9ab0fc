use crate::router::PROPERTY_FETCH_FAILED;
use crate::source::ListingSource;
use crate::tests::utils::{body_string, get, location, state_with_source, test_state};
use std::path::PathBuf;

#[test]
fn detail_page_renders_listing() {
    let state = test_state();
    let resp = get(&state, "/property/2", None);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Riverside Family Home"));
    assert!(body.contains("$820,000"));
    assert!(body.contains("2,650"));
    assert!(body.contains("Listed on: March 22, 2024"));
    assert!(body.contains("Save Property"));
    assert!(body.contains("Contact Agent"));
}

#[test]
fn unknown_or_malformed_id_redirects_to_not_found() {
    let state = test_state();

    let resp = get(&state, "/property/99", None);
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/not-found");

    let resp = get(&state, "/property/abc", None);
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/not-found");

    let resp = get(&state, "/not-found", None);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Property Not Found"));
}

#[test]
fn fetch_failure_on_detail_shows_error() {
    let state = state_with_source(ListingSource::File(PathBuf::from("/no/such/listings.json")));
    let body = body_string(get(&state, "/property/1", None));

    assert!(body.contains(PROPERTY_FETCH_FAILED));
    assert!(body.contains("Back to listings"));
}
