use crate::errors::ServerError;
use astra::Response;

pub use crate::errors::ResultResp;

/// Convert a ServerError into a proper HTML response page.
pub fn html_error_response(err: ServerError) -> Response {
    tracing::warn!(error = %err, "request failed");
    crate::templates::components::html_error_response(err)
}
