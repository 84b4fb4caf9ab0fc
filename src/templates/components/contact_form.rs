use crate::domain::contact::{ContactField, ContactForm, SubmitStatus};
use crate::templates::components::{alert, AlertKind};
use maud::{html, Markup};

/// Client-side mirror of `ContactForm::edit`: drops the edited field's error
/// and any settled status alert.
const CLEAR_ON_EDIT: &str = "const f = this.closest('.field'); f.classList.remove('has-error'); \
f.querySelector('.helper-text')?.remove(); \
document.getElementById('contact-status').replaceChildren();";

fn field_label(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Full Name",
        ContactField::Email => "Email",
        ContactField::Phone => "Phone",
        ContactField::Comments => "Comments",
    }
}

fn field(form: &ContactForm, field: ContactField) -> Markup {
    let name = field.as_str();
    let value = form.draft().get(field);
    let error = form.errors().get(field);

    html! {
        div.field.has-error[error.is_some()] {
            label for=(name) { (field_label(field)) " *" }
            @match field {
                ContactField::Comments => {
                    textarea id=(name) name=(name) rows="4" oninput=(CLEAR_ON_EDIT) { (value) }
                }
                ContactField::Phone => {
                    input
                        type="text"
                        id=(name)
                        name=(name)
                        value=(value)
                        inputmode="numeric"
                        oninput=(format!("this.value = this.value.replace(/[^0-9]/g, ''); {CLEAR_ON_EDIT}"));
                }
                ContactField::Email => {
                    input type="email" id=(name) name=(name) value=(value) autocomplete="email" oninput=(CLEAR_ON_EDIT);
                }
                ContactField::Name => {
                    input type="text" id=(name) name=(name) value=(value) autocomplete="name" oninput=(CLEAR_ON_EDIT);
                }
            }
            @if let Some(msg) = error {
                p class="helper-text" { (msg) }
            }
        }
    }
}

/// Contact Agent panel. Posts to the listing's contact route; htmx swaps
/// the whole panel with the re-rendered form.
pub fn contact_form(listing_id: i64, form: &ContactForm) -> Markup {
    let action = format!("/property/{listing_id}/contact");

    html! {
        section id="contact-agent" class="card contact-agent" {
            h3 { "Contact Agent" }
            p {
                "This beautiful property is now available for viewing. Contact our agent to schedule a visit or request more information."
            }

            div id="contact-status" {
                @match form.status() {
                    SubmitStatus::Success => (alert(AlertKind::Success, "Message sent successfully!")),
                    SubmitStatus::Failed(reason) => (alert(AlertKind::Error, &format!("Message could not be sent: {reason}"))),
                    _ => {}
                }
            }

            form
                method="post"
                action=(action)
                hx-post=(action)
                hx-target="#contact-agent"
                hx-swap="outerHTML"
                hx-disabled-elt="button"
                hx-indicator="#contact-sending"
                novalidate
            {
                @for f in ContactField::ALL {
                    (field(form, f))
                }
                button type="submit" class="primary" { "Contact Now" }
                span id="contact-sending" class="htmx-indicator" role="status" { "Sending..." }
            }
        }
    }
}
