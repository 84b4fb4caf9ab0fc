use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn not_found_page(saved_count: usize) -> Markup {
    desktop_layout(
        "Property Not Found",
        saved_count,
        html! {
            section class="card not-found" {
                h1 { "Property Not Found" }
                p {
                    "Sorry, the property you're looking for doesn't exist or has been removed."
                }
                a href="/" class="button primary" { "Return to Listings" }
            }
        },
    )
}
