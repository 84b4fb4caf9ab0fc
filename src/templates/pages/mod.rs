pub mod home;
pub mod not_found;
pub mod property;
pub mod saved;

pub use home::{home_page, HomeVm};
pub use not_found::not_found_page;
pub use property::{property_error_page, property_page, PropertyVm};
pub use saved::saved_page;
