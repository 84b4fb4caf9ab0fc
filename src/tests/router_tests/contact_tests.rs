use crate::domain::contact::{ContactDraft, ContactSubmitter, SubmitError};
use crate::source::ListingSource;
use crate::state::AppState;
use crate::tests::utils::{body_string, init_test_db, post_form, write_listings, LISTINGS_JSON};

const VALID: &str =
    "fullName=Jane+Doe&email=jane%40example.com&phone=5551234567&comments=Interested";

#[test]
fn empty_submission_lists_every_error() {
    let state = crate::tests::utils::test_state();
    let resp = post_form(&state, "/property/1/contact", None, "", true);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Full name is required"));
    assert!(body.contains("Email is required"));
    assert!(body.contains("Phone number is required"));
    assert!(body.contains("Please enter your message"));
    assert!(!body.contains("Message sent successfully!"));
}

#[test]
fn valid_submission_succeeds() {
    let state = crate::tests::utils::test_state();
    let body = body_string(post_form(&state, "/property/1/contact", None, VALID, true));

    assert!(body.contains("Message sent successfully!"));
    assert!(body.contains("value=\"Jane Doe\""));
}

#[test]
fn phone_digits_are_kept_and_full_page_without_htmx() {
    let state = crate::tests::utils::test_state();
    let form = "fullName=Jane&email=jane%40example.com&phone=abc123de456&comments=Hi";
    let body = body_string(post_form(&state, "/property/1/contact", None, form, false));

    assert!(body.contains("<html"));
    assert!(body.contains("value=\"123456\""));
    assert!(body.contains("Phone number should be at least 10 digits"));
}

struct DownSubmitter;

impl ContactSubmitter for DownSubmitter {
    fn submit(&self, _draft: &ContactDraft) -> Result<(), SubmitError> {
        Err(SubmitError::Unavailable("agent inbox offline".into()))
    }
}

#[test]
fn failing_submitter_is_reported() {
    let state = AppState::new(
        init_test_db(),
        ListingSource::File(write_listings(LISTINGS_JSON)),
        Box::new(DownSubmitter),
    );

    let body = body_string(post_form(&state, "/property/1/contact", None, VALID, true));
    assert!(body.contains("Message could not be sent"));
    assert!(body.contains("agent inbox offline"));
}

#[test]
fn every_field_clears_its_own_error_and_the_status_on_edit() {
    let state = crate::tests::utils::test_state();
    let body = body_string(post_form(&state, "/property/1/contact", None, "", true));

    assert_eq!(body.matches("has-error").count(), 4);
    assert_eq!(
        body.matches("f.querySelector('.helper-text')?.remove();").count(),
        4,
        "name, email, phone and comments each carry the edit hook"
    );
    assert_eq!(
        body.matches("document.getElementById('contact-status').replaceChildren();")
            .count(),
        4
    );
    assert!(body.contains("this.value = this.value.replace(/[^0-9]/g, ''); const f"));
}

#[test]
fn success_alert_sits_in_the_clearable_status_slot() {
    let state = crate::tests::utils::test_state();
    let body = body_string(post_form(&state, "/property/1/contact", None, VALID, true));

    assert!(body.contains(
        r#"<div id="contact-status"><div class="alert alert-success" role="alert">Message sent successfully!</div></div>"#
    ));
    assert!(body.contains(r##"hx-indicator="#contact-sending""##));
    assert!(body.contains(r#"<span id="contact-sending" class="htmx-indicator" role="status">Sending...</span>"#));
}
