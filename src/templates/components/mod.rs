use maud::{html, Markup};

pub mod contact_form;
pub mod error;
pub mod filters;
pub mod property_card;
pub mod save_button;

pub use contact_form::contact_form;
pub use error::html_error_response;
pub use filters::filter_panel;
pub use property_card::property_card;
pub use save_button::save_button;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Success,
    Error,
}

impl AlertKind {
    fn class(&self) -> &'static str {
        match self {
            AlertKind::Info => "alert alert-info",
            AlertKind::Success => "alert alert-success",
            AlertKind::Error => "alert alert-error",
        }
    }
}

pub fn alert(kind: AlertKind, message: &str) -> Markup {
    html! {
        div class=(kind.class()) role="alert" { (message) }
    }
}
