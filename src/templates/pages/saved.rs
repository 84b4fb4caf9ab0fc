use crate::domain::Listing;
use crate::templates::{alert, desktop_layout, property_card, AlertKind};
use maud::{html, Markup};

pub fn saved_page(saved: &[Listing]) -> Markup {
    desktop_layout(
        "Saved Properties",
        saved.len(),
        html! {
            h1 { "Saved Properties" }

            @if saved.is_empty() {
                (alert(AlertKind::Info, "You haven't saved any properties yet."))
            } @else {
                p {
                    "You have " (saved.len()) " saved "
                    @if saved.len() == 1 { "property" } @else { "properties" }
                    "."
                }

                div class="listing-grid" {
                    @for listing in saved {
                        div class="saved-entry" {
                            (property_card(listing, true))
                            form method="post" action=(format!("/saved/{}/remove", listing.id)) {
                                button type="submit" class="danger" { "Remove" }
                            }
                        }
                    }
                }
            }
        },
    )
}
