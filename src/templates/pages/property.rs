use crate::domain::contact::ContactForm;
use crate::domain::listing::{format_price, group_thousands};
use crate::domain::Listing;
use crate::templates::{alert, contact_form, desktop_layout, save_button, AlertKind};
use maud::{html, Markup};

pub struct PropertyVm<'a> {
    pub listing: &'a Listing,
    pub is_saved: bool,
    pub form: &'a ContactForm,
    pub saved_count: usize,
}

fn stat(value: Markup, label: &str) -> Markup {
    html! {
        div class="stat" {
            strong { (value) }
            span { (label) }
        }
    }
}

pub fn property_page(vm: &PropertyVm) -> Markup {
    let l = vm.listing;

    desktop_layout(
        &l.title,
        vm.saved_count,
        html! {
            div class="detail-toolbar" {
                a href="/" { "← Back to listings" }
                (save_button(l.id, vm.is_saved, None))
            }

            img class="hero" src=(l.picture_url) alt=(l.title) height="400";

            div class="detail-grid" {
                div class="detail-main" {
                    div class="detail-heading" {
                        h1 { (l.title) }
                        p class="price" { (format_price(l.sale_price)) }
                    }
                    p class="location" { (l.location) }

                    div class="stats" {
                        (stat(html! { (l.bedrooms) }, "Bedrooms"))
                        (stat(html! { (l.bathrooms) }, "Bathrooms"))
                        (stat(html! { (group_thousands(l.sqft as u64)) }, "Square Feet"))
                        (stat(html! { (l.parking) }, "Parking"))
                        (stat(html! { (l.year_built) }, "Year Built"))
                    }

                    h2 { "Description" }
                    p { (l.description) }

                    hr;

                    ul class="chips" {
                        li { (l.parking) " parking spaces" }
                        li { "Listed on: " (l.listed_on()) }
                        li { "ID: " (l.id) }
                    }
                }
                aside {
                    (contact_form(l.id, vm.form))
                }
            }
        },
    )
}

/// Shown when the listing data could not be read.
pub fn property_error_page(message: &str, saved_count: usize) -> Markup {
    desktop_layout(
        "Error",
        saved_count,
        html! {
            (alert(AlertKind::Error, message))
            a href="/" class="button primary" { "Back to listings" }
        },
    )
}
