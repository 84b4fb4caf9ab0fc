pub mod contact;
pub mod filter;
pub mod listing;
pub mod saved;

pub use listing::Listing;
