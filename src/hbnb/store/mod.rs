//! # Storage Layer
//!
//! The interpreter never talks to the filesystem directly; it works against
//! the [`ObjectStore`] trait, which owns the live record map and knows how to
//! persist it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - The whole map lives in one JSON file (`file.json` by default)
//!   - Loaded once when the store is opened, rewritten on every `save()`
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - `save()` only counts calls
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "User.5f1c...": {
//!     "__class__": "User",
//!     "id": "5f1c...",
//!     "created_at": "2026-10-16T09:12:44.512093",
//!     "updated_at": "2026-10-16T09:14:02.100311",
//!     "email": "ada@example.com"
//!   }
//! }
//! ```

use crate::error::Result;
use crate::model::{Kind, Record, RecordKey};
use std::collections::BTreeMap;

pub mod fs;
pub mod memory;

pub type Records = BTreeMap<RecordKey, Record>;

/// Abstract interface for record storage.
///
/// Implementors provide the map and `save()`; everything else is derived.
/// Mutating helpers that remove data persist immediately, while callers
/// that edit a record in place are responsible for calling `save()`.
pub trait ObjectStore {
    /// Every live record
    fn all(&self) -> &Records;

    /// Mutable access to the record map
    fn all_mut(&mut self) -> &mut Records;

    /// Persist the full map
    fn save(&mut self) -> Result<()>;

    /// Register a record without persisting it
    fn new_record(&mut self, record: Record) {
        self.all_mut().insert(record.key(), record);
    }

    fn get(&self, key: &RecordKey) -> Option<&Record> {
        self.all().get(key)
    }

    fn get_mut(&mut self, key: &RecordKey) -> Option<&mut Record> {
        self.all_mut().get_mut(key)
    }

    /// Remove a record and persist. Returns `None` when nothing matched, in
    /// which case nothing is written.
    fn delete(&mut self, key: &RecordKey) -> Result<Option<Record>> {
        let removed = self.all_mut().remove(key);
        if removed.is_some() {
            self.save()?;
        }
        Ok(removed)
    }

    /// Records of one kind, or all of them, in key order
    fn records_of(&self, kind: Option<Kind>) -> Vec<&Record> {
        self.all()
            .iter()
            .filter(|(key, _)| kind.map_or(true, |k| key.kind == k))
            .map(|(_, record)| record)
            .collect()
    }

    fn count(&self, kind: Kind) -> usize {
        self.all().keys().filter(|key| key.kind == kind).count()
    }
}
