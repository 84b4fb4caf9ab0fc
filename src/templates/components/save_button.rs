use crate::templates::components::{alert, AlertKind};
use maud::{html, Markup};

/// Save toggle for the detail page. `flash` is the confirmation shown right
/// after a toggle.
pub fn save_button(listing_id: i64, is_saved: bool, flash: Option<&str>) -> Markup {
    html! {
        div id="save-property" class="save-property" {
            form
                method="post"
                action=(format!("/property/{listing_id}/save"))
                hx-post=(format!("/property/{listing_id}/save"))
                hx-target="#save-property"
                hx-swap="outerHTML"
            {
                button type="submit" class="primary" {
                    @if is_saved { "Saved" } @else { "Save Property" }
                }
            }
            @if is_saved {
                a href="/saved" class="button outlined" title="View all saved properties" { "View Saved" }
            }
            @if let Some(msg) = flash {
                @let kind = if is_saved { AlertKind::Success } else { AlertKind::Info };
                (alert(kind, msg))
            }
        }
    }
}
