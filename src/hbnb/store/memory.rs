use super::{ObjectStore, Records};
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data; `save()` only counts calls.
#[derive(Default)]
pub struct InMemoryStore {
    records: Records,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `save()` has been called
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ObjectStore for InMemoryStore {
    fn all(&self) -> &Records {
        &self.records
    }

    fn all_mut(&mut self) -> &mut Records {
        &mut self.records
    }

    fn save(&mut self) -> Result<()> {
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{AttributeValue, Kind, Record, RecordKey};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_records(mut self, kind: Kind, count: usize) -> Self {
            for _ in 0..count {
                self.store.new_record(Record::new(kind));
            }
            self
        }

        /// Insert a record with a fixed id so tests can address it
        pub fn with_record(mut self, kind: Kind, id: &str) -> Self {
            let mut record = Record::new(kind);
            record.id = id.to_string();
            self.store.new_record(record);
            self
        }

        pub fn with_attr(mut self, kind: Kind, id: &str, name: &str, value: AttributeValue) -> Self {
            if let Some(record) = self.store.get_mut(&RecordKey::new(kind, id)) {
                record.set_attr(name, value);
            }
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::model::{Kind, RecordKey};

    #[test]
    fn delete_saves_only_when_something_was_removed() {
        let mut store = StoreFixture::new().with_record(Kind::City, "c1").store;

        assert!(store.delete(&RecordKey::new(Kind::City, "nope")).unwrap().is_none());
        assert_eq!(store.saves(), 0);

        assert!(store.delete(&RecordKey::new(Kind::City, "c1")).unwrap().is_some());
        assert_eq!(store.saves(), 1);
        assert!(store.all().is_empty());
    }

    #[test]
    fn records_of_filters_by_kind() {
        let store = StoreFixture::new()
            .with_records(Kind::User, 2)
            .with_records(Kind::Place, 3)
            .store;

        assert_eq!(store.records_of(Some(Kind::User)).len(), 2);
        assert_eq!(store.records_of(Some(Kind::Review)).len(), 0);
        assert_eq!(store.records_of(None).len(), 5);
        assert_eq!(store.count(Kind::Place), 3);
    }
}
