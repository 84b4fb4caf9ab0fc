use crate::config::Config;
use crate::db::{init_db, Database};
use crate::domain::contact::SimulatedSubmitter;
use crate::router::handle;
use crate::source::ListingSource;
use crate::state::AppState;
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod source;
mod state;
mod storage;
mod templates;
mod visitor;


fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "property_finder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 1. Database with the saved-properties slots
    let db = Database::new(config.database_path.clone());
    if let Err(e) = init_db(&db) {
        tracing::error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    // 2. Listing source and contact capability
    let listings = match ListingSource::from_location(&config.listings_source) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!("listing source unusable: {e}");
            std::process::exit(1);
        }
    };
    let submitter = SimulatedSubmitter::new(config.contact_delay);
    let state = AppState::new(db, listings, Box::new(submitter));

    // 3. Start the server
    tracing::info!(
        addr = %config.bind_addr,
        listings = %state.listings.describe(),
        "starting server"
    );

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!("server ended with error: {e}");
    }

    tracing::info!("server shut down cleanly");
}
