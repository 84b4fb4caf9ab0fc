use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("listing source answered HTTP {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Transport(String),
    #[error("could not read listing file: {0}")]
    Io(String),
    #[error("listing data is not valid JSON: {0}")]
    Parse(String),
}
