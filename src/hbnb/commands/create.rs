use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Record;
use crate::store::ObjectStore;
use tracing::info;

use super::helpers::resolve_kind;

pub fn run<S: ObjectStore>(store: &mut S, type_name: Option<&str>) -> Result<CmdResult> {
    let kind = resolve_kind(type_name)?;
    let record = Record::new(kind);
    let key = record.key();
    let id = record.id.clone();

    store.new_record(record);
    store.save()?;
    info!(key = %key, "record created");

    Ok(CmdResult::default().with_output(id).with_affected(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HbnbError;
    use crate::model::{Kind, RecordKey};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_saves_and_reports_id() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, Some("Place")).unwrap();

        let id = result.lines()[0].to_string();
        assert!(store.get(&RecordKey::new(Kind::Place, id.clone())).is_some());
        assert_eq!(result.affected_records, vec![RecordKey::new(Kind::Place, id)]);
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn rejects_missing_and_unknown_types() {
        let mut store = InMemoryStore::new();
        assert!(matches!(run(&mut store, None), Err(HbnbError::MissingTypeName)));
        assert!(matches!(
            run(&mut store, Some("MyModel")),
            Err(HbnbError::UnknownTypeName(_))
        ));
        assert!(store.all().is_empty());
        assert_eq!(store.saves(), 0);
    }
}
