// src/domain/saved.rs

use crate::domain::listing::Listing;
use crate::storage::{LocalStorage, StorageError};

/// Storage slot holding the serialized saved set.
pub const SAVED_PROPERTIES_KEY: &str = "savedProperties";

/// A visitor's bookmarked listings.
///
/// The in-memory list is the source of truth between loads. Entries are
/// copies taken at save time, unique by id, kept in insertion order. Every
/// real mutation rewrites the whole slot.
pub struct SavedProperties<S: LocalStorage> {
    storage: S,
    entries: Vec<Listing>,
}

impl<S: LocalStorage> SavedProperties<S> {
    /// Reads the persisted set. An absent, blank or unparsable payload yields an
    /// empty set; an unparsable one is also cleared from storage.
    pub fn load(storage: S) -> Result<Self, StorageError> {
        let entries = match storage.get_item(SAVED_PROPERTIES_KEY)? {
            None => Vec::new(),
            Some(raw) if raw.trim().is_empty() => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<Listing>>(&raw) {
                Ok(entries) => dedup_by_id(entries),
                Err(e) => {
                    tracing::warn!(error = %e, "discarding unparsable saved properties");
                    storage.remove_item(SAVED_PROPERTIES_KEY)?;
                    Vec::new()
                }
            },
        };

        Ok(Self { storage, entries })
    }

    /// Returns `true` if the listing was inserted.
    pub fn add(&mut self, listing: &Listing) -> Result<bool, StorageError> {
        if self.contains(listing.id) {
            return Ok(false);
        }
        self.entries.push(listing.clone());
        self.save()?;
        Ok(true)
    }

    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, id: i64) -> Result<bool, StorageError> {
        let before = self.entries.len();
        self.entries.retain(|l| l.id != id);
        if self.entries.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.entries.iter().any(|l| l.id == id)
    }

    pub fn all(&self) -> &[Listing] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn save(&self) -> Result<(), StorageError> {
        let payload = serde_json::to_string(&self.entries)?;
        self.storage.set_item(SAVED_PROPERTIES_KEY, &payload)?;
        tracing::debug!(count = self.entries.len(), "saved properties persisted");
        Ok(())
    }
}

// A hand-edited slot could repeat an id; keep the first occurrence.
fn dedup_by_id(entries: Vec<Listing>) -> Vec<Listing> {
    let mut out: Vec<Listing> = Vec::with_capacity(entries.len());
    for entry in entries {
        if !out.iter().any(|l| l.id == entry.id) {
            out.push(entry);
        }
    }
    out
}
