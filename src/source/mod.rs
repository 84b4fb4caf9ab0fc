mod fetch_error;
mod listing_source;

pub use fetch_error::FetchError;
pub use listing_source::ListingSource;
