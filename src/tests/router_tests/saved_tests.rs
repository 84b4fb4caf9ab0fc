use crate::tests::utils::{body_string, get, issued_visitor, location, post_form, test_state};

#[test]
fn save_then_list_then_remove() {
    let state = test_state();
    let visitor = issued_visitor(&get(&state, "/", None));

    let resp = post_form(&state, "/property/2/save", Some(&visitor), "", false);
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/property/2");
    assert!(resp.headers().get("Set-Cookie").is_none(), "cookie reused");

    let body = body_string(get(&state, "/saved", Some(&visitor)));
    assert!(body.contains("You have 1 saved property."));
    assert!(body.contains("Riverside Family Home"));
    assert!(body.contains("2 parking"));

    let detail = body_string(get(&state, "/property/2", Some(&visitor)));
    assert!(detail.contains("View Saved"));

    let resp = post_form(&state, "/saved/2/remove", Some(&visitor), "", false);
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/saved");

    let body = body_string(get(&state, "/saved", Some(&visitor)));
    assert!(body.contains("You haven't saved any properties yet."));
}

#[test]
fn htmx_toggle_returns_button_partial() {
    let state = test_state();
    let visitor = issued_visitor(&get(&state, "/", None));

    let resp = post_form(&state, "/property/1/save", Some(&visitor), "", true);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Property saved successfully"));
    assert!(body.contains("Saved"));
    assert!(!body.contains("<html"));

    let body = body_string(post_form(&state, "/property/1/save", Some(&visitor), "", true));
    assert!(body.contains("Property removed from saved properties"));
    assert!(body.contains("Save Property"));
}

#[test]
fn saved_sets_are_per_visitor() {
    let state = test_state();
    let alice = issued_visitor(&get(&state, "/", None));
    let bob = issued_visitor(&get(&state, "/", None));
    assert_ne!(alice, bob);

    post_form(&state, "/property/1/save", Some(&alice), "", false);
    post_form(&state, "/property/3/save", Some(&alice), "", false);

    let alice_page = body_string(get(&state, "/saved", Some(&alice)));
    assert!(alice_page.contains("You have 2 saved properties."));

    let bob_page = body_string(get(&state, "/saved", Some(&bob)));
    assert!(bob_page.contains("You haven't saved any properties yet."));
}

#[test]
fn saving_unknown_listing_redirects_and_stores_nothing() {
    let state = test_state();
    let visitor = issued_visitor(&get(&state, "/", None));

    let resp = post_form(&state, "/property/404/save", Some(&visitor), "", false);
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/not-found");

    let body = body_string(get(&state, "/saved", Some(&visitor)));
    assert!(body.contains("You haven't saved any properties yet."));
}
