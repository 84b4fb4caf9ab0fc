// src/state.rs
use crate::db::{Database, SqliteStorage};
use crate::domain::contact::ContactSubmitter;
use crate::domain::saved::SavedProperties;
use crate::errors::ServerError;
use crate::source::ListingSource;
use crate::visitor::Visitor;

/// Everything a request handler needs, built once at startup and shared by
/// the worker threads.
pub struct AppState {
    pub db: Database,
    pub listings: ListingSource,
    pub submitter: Box<dyn ContactSubmitter + Send + Sync>,
}

impl AppState {
    pub fn new(
        db: Database,
        listings: ListingSource,
        submitter: Box<dyn ContactSubmitter + Send + Sync>,
    ) -> Self {
        Self {
            db,
            listings,
            submitter,
        }
    }

    /// The visitor's saved set, freshly loaded from their storage slot.
    pub fn saved_properties(
        &self,
        visitor: &Visitor,
    ) -> Result<SavedProperties<SqliteStorage>, ServerError> {
        let storage = SqliteStorage::new(self.db.clone(), visitor.storage_key());
        Ok(SavedProperties::load(storage)?)
    }
}
