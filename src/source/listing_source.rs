// listing_source.rs
use crate::domain::Listing;
use crate::source::FetchError;
use reqwest::blocking::Client;
use std::path::PathBuf;
use std::time::{Duration, Instant};

const USER_AGENT: &str = concat!("property_finder/", env!("CARGO_PKG_VERSION"));

/// Where the listing collection is read from. Both variants return the whole
/// sequence in one read; filtering happens after retrieval.
#[derive(Clone)]
pub enum ListingSource {
    File(PathBuf),
    Http { url: String, client: Client },
}

impl ListingSource {
    /// `http://` and `https://` locations are fetched over the network,
    /// anything else is treated as a filesystem path.
    pub fn from_location(location: &str) -> Result<Self, FetchError> {
        if location.starts_with("http://") || location.starts_with("https://") {
            let client = Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_secs(30))
                .build()
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            Ok(Self::Http {
                url: location.to_string(),
                client,
            })
        } else {
            Ok(Self::File(PathBuf::from(location)))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ListingSource::File(path) => path.display().to_string(),
            ListingSource::Http { url, .. } => url.clone(),
        }
    }

    /// Reads every listing. Failures are not retried.
    pub fn fetch_all(&self) -> Result<Vec<Listing>, FetchError> {
        let start = Instant::now();

        let result = match self {
            ListingSource::File(path) => {
                let bytes = std::fs::read(path).map_err(|e| FetchError::Io(e.to_string()))?;
                parse_listings(&bytes)
            }
            ListingSource::Http { url, client } => Self::fetch_http(client, url),
        };

        match &result {
            Ok(listings) => tracing::debug!(
                source = %self.describe(),
                count = listings.len(),
                elapsed = ?start.elapsed(),
                "listings fetched"
            ),
            Err(e) => tracing::error!(source = %self.describe(), error = %e, "listing fetch failed"),
        }

        result
    }

    fn fetch_http(client: &Client, url: &str) -> Result<Vec<Listing>, FetchError> {
        let resp = client
            .get(url)
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = resp
            .bytes()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        parse_listings(&bytes)
    }
}

fn parse_listings(bytes: &[u8]) -> Result<Vec<Listing>, FetchError> {
    serde_json::from_slice(bytes).map_err(|e| FetchError::Parse(e.to_string()))
}
