use crate::domain::listing::{format_price, group_thousands, Listing};
use maud::{html, Markup};

/// Grid card linking to the detail page. Parking is only shown on the
/// saved-properties page.
pub fn property_card(listing: &Listing, show_parking: bool) -> Markup {
    html! {
        article class="card property-card" {
            a href=(format!("/property/{}", listing.id)) {
                img src=(listing.thumbnail_url) alt=(listing.title) height="200";
                div class="card-body" {
                    h2 class="card-title" { (listing.title) }
                    p class="location" { (listing.location) }
                    p class="price" { (format_price(listing.sale_price)) }
                    ul class="chips" {
                        li { (listing.bedrooms) " beds" }
                        li { (listing.bathrooms) " baths" }
                        li { (group_thousands(listing.sqft as u64)) " sqft" }
                        @if show_parking {
                            li { (listing.parking) " parking" }
                        }
                    }
                }
            }
        }
    }
}
