use crate::domain::filter::{FilterCriteria, PriceBounds};
use crate::domain::listing::format_price;
use maud::{html, Markup};

fn amenity_select(name: &str, label: &str, max: u32, selected: u32) -> Markup {
    html! {
        label for=(name) { (label) }
        select id=(name) name=(name) {
            @for n in 1..=max {
                option value=(n) selected[n == selected] { (n) "+" }
            }
        }
    }
}

/// Filter form for the browse page. Submits as a GET so results are linkable.
pub fn filter_panel(criteria: &FilterCriteria, bounds: Option<PriceBounds>) -> Markup {
    let (lo, hi) = bounds.map(|b| (b.min, b.max)).unwrap_or((0, 0));

    html! {
        section class="card filters" {
            h3 { "Filters" }
            form method="get" action="/" class="filter-grid" {
                div { (amenity_select("bedrooms", "Bedrooms", 5, criteria.min_bedrooms)) }
                div { (amenity_select("bathrooms", "Bathrooms", 5, criteria.min_bathrooms)) }
                div { (amenity_select("parking", "Parking", 6, criteria.min_parking)) }
                div class="price-range" {
                    p {
                        "Price Range: "
                        @if bounds.is_some() {
                            (format_price(criteria.min_price)) " - " (format_price(criteria.max_price))
                        } @else {
                            "any"
                        }
                    }
                    label for="min_price" class="sr-only" { "Minimum price" }
                    input type="number" id="min_price" name="min_price"
                        min=(lo) max=(hi) step="any" value=(criteria.min_price);
                    label for="max_price" class="sr-only" { "Maximum price" }
                    input type="number" id="max_price" name="max_price"
                        min=(lo) max=(hi) step="any" value=(criteria.max_price);
                }
                div class="actions" {
                    button type="submit" name="action" value="search" class="primary" { "Search" }
                    button type="submit" name="action" value="reset" class="outlined" formnovalidate { "Reset" }
                }
            }
        }
    }
}
