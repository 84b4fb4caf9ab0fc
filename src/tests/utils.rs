use crate::db::connection::{init_db, Database};
use crate::domain::contact::SimulatedSubmitter;
use crate::router::handle;
use crate::source::ListingSource;
use crate::state::AppState;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Unique path under the temp dir.
pub fn temp_path(prefix: &str, ext: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "{prefix}_{}_{}_{}.{ext}",
        std::process::id(),
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ))
}

/// Initialize a fresh test DB using the production schema
pub fn init_test_db() -> Database {
    let db = Database::new(temp_path("property_finder_test", "sqlite").to_string_lossy());
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    db
}

pub const LISTINGS_JSON: &str = r#"[
  {"Id": 1, "Title": "Maple Street Bungalow", "Location": "Oakridge", "Sale Price": 350000,
   "Bedrooms": 2, "Bathrooms": 1, "Parking": 1, "Sqft": 1100, "YearBuilt": 1985,
   "DateListed": "2024-02-10", "Description": "Cosy bungalow near the park.",
   "ThumbnailURL": "/img/1-thumb.jpg", "PictureURL": "/img/1.jpg"},
  {"Id": 2, "Title": "Riverside Family Home", "Location": "Riverton", "Sale Price": 820000,
   "Bedrooms": 4, "Bathrooms": 3, "Parking": 2, "Sqft": 2650, "YearBuilt": 2008,
   "DateListed": "2024-03-22", "Description": "Large garden on the river.",
   "ThumbnailURL": "/img/2-thumb.jpg", "PictureURL": "/img/2.jpg"},
  {"Id": 3, "Title": "City Studio", "Location": "Downtown", "Sale Price": 275000,
   "Bedrooms": 1, "Bathrooms": 1, "Parking": 0, "Sqft": 520, "YearBuilt": 2016,
   "DateListed": "2024-04-01", "Description": "Walk to everything.",
   "ThumbnailURL": "/img/3-thumb.jpg", "PictureURL": "/img/3.jpg"}
]"#;

pub fn write_listings(contents: &str) -> PathBuf {
    let path = temp_path("listings", "json");
    std::fs::write(&path, contents).unwrap();
    path
}

/// App state over a fresh DB and the three-listing fixture.
pub fn test_state() -> AppState {
    state_with_source(ListingSource::File(write_listings(LISTINGS_JSON)))
}

pub fn state_with_source(listings: ListingSource) -> AppState {
    AppState::new(
        init_test_db(),
        listings,
        Box::new(SimulatedSubmitter::new(Duration::ZERO)),
    )
}

pub fn get(state: &AppState, uri: &str, cookie: Option<&str>) -> Response {
    send(state, Method::GET, uri, cookie, None, false)
}

pub fn post_form(state: &AppState, uri: &str, cookie: Option<&str>, form: &str, htmx: bool) -> Response {
    send(state, Method::POST, uri, cookie, Some(form), htmx)
}

fn send(
    state: &AppState,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    form: Option<&str>,
    htmx: bool,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(c) = cookie {
        builder = builder.header("Cookie", format!("visitor={c}"));
    }
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    let body = match form {
        Some(f) => {
            builder = builder.header("Content-Type", "application/x-www-form-urlencoded");
            Body::from(f.as_bytes().to_vec())
        }
        None => Body::empty(),
    };

    handle(builder.body(body).unwrap(), state).expect("handler failed")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Token from the visitor cookie set on a first response.
pub fn issued_visitor(resp: &Response) -> String {
    let header = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .expect("visitor cookie issued");
    header
        .split(';')
        .next()
        .and_then(|kv| kv.strip_prefix("visitor="))
        .expect("visitor cookie value")
        .to_string()
}
