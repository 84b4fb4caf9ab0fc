// templates/pages/home.rs

use crate::domain::filter::{FilterCriteria, PriceBounds};
use crate::domain::Listing;
use crate::templates::{
    alert,
    components::{filter_panel, property_card},
    desktop_layout, AlertKind,
};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub results: &'a [Listing],
    pub total: usize,
    pub criteria: FilterCriteria,
    pub bounds: Option<PriceBounds>,
    pub error: Option<&'a str>,
    pub saved_count: usize,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Property Listings",
        vm.saved_count,
        html! {
            h1 { "Property Listings" }

            @if let Some(msg) = vm.error {
                (alert(AlertKind::Error, msg))
            }

            (filter_panel(&vm.criteria, vm.bounds))

            @if vm.error.is_none() {
                p class="results-count" {
                    "Showing " (vm.results.len()) " of " (vm.total) " properties"
                }
            }

            div class="listing-grid" {
                @for listing in vm.results {
                    (property_card(listing, false))
                }
            }

            @if vm.error.is_none() && vm.results.is_empty() {
                (alert(
                    AlertKind::Info,
                    "No properties match your search criteria. Try adjusting your filters.",
                ))
            }
        },
    )
}
