pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{alert, contact_form, property_card, save_button, AlertKind};
pub use layouts::desktop::desktop_layout;
