use crate::router::LISTINGS_FETCH_FAILED;
use crate::source::ListingSource;
use crate::tests::utils::{body_string, get, state_with_source, test_state};
use std::path::PathBuf;

#[test]
fn first_visit_shows_every_listing() {
    let state = test_state();
    let resp = get(&state, "/", None);

    assert_eq!(resp.status(), 200);
    assert!(resp.headers().get("Set-Cookie").is_some(), "visitor cookie issued");

    let body = body_string(resp);
    assert!(body.contains("Showing 3 of 3 properties"));
    assert!(body.contains("Maple Street Bungalow"));
    assert!(body.contains("City Studio"));
    assert!(body.contains("$820,000"));
}

#[test]
fn search_applies_thresholds() {
    let state = test_state();
    let resp = get(
        &state,
        "/?action=search&bedrooms=2&bathrooms=1&parking=1&min_price=300000&max_price=900000",
        None,
    );

    let body = body_string(resp);
    assert!(body.contains("Showing 2 of 3 properties"));
    assert!(body.contains("Maple Street Bungalow"));
    assert!(body.contains("Riverside Family Home"));
    assert!(!body.contains("City Studio"));
}

#[test]
fn reset_reapplies_default_criteria() {
    let state = test_state();
    let body = body_string(get(&state, "/?action=reset", None));

    // The studio has no parking, so the one-space default drops it.
    assert!(body.contains("Showing 2 of 3 properties"));
    assert!(body.contains("$275,000 - $820,000"));
}

#[test]
fn no_match_shows_info_alert() {
    let state = test_state();
    let body = body_string(get(&state, "/?action=search&bedrooms=5", None));

    assert!(body.contains("Showing 0 of 3 properties"));
    assert!(body.contains("No properties match your search criteria."));
}

#[test]
fn fetch_failure_shows_error_and_no_cards() {
    let state = state_with_source(ListingSource::File(PathBuf::from("/no/such/listings.json")));
    let resp = get(&state, "/", None);

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains(LISTINGS_FETCH_FAILED));
    assert!(!body.contains("property-card"));
}

#[test]
fn stylesheet_is_served_and_unknown_routes_404() {
    let state = test_state();
    let css = get(&state, "/static/main.css", None);
    assert_eq!(css.status(), 200);
    assert_eq!(
        css.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "text/css; charset=utf-8"
    );

    let req = http::Request::builder()
        .uri("/nope")
        .body(astra::Body::empty())
        .unwrap();
    match crate::router::handle(req, &state) {
        Err(crate::errors::ServerError::NotFound) => {}
        other => panic!("expected NotFound, got: {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn default_price_inputs_do_not_block_submission() {
    let state = test_state();
    let body = body_string(get(&state, "/", None));

    // Observed range 275,000..820,000 is not a multiple of any coarse step.
    assert!(body.contains(r#"name="min_price" min="275000" max="820000" step="any" value="275000""#));
    assert!(body.contains(r#"name="max_price" min="275000" max="820000" step="any" value="820000""#));
    assert!(!body.contains(r#"step="10000""#));
    assert!(body.contains(r#"value="reset" class="outlined" formnovalidate"#));
}
