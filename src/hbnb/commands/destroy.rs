use crate::commands::CmdResult;
use crate::error::{HbnbError, Result};
use crate::store::ObjectStore;
use tracing::info;

use super::helpers::resolve_key;

pub fn run<S: ObjectStore>(
    store: &mut S,
    type_name: Option<&str>,
    instance_id: Option<&str>,
) -> Result<CmdResult> {
    let key = resolve_key(type_name, instance_id)?;
    match store.delete(&key)? {
        Some(_) => {
            info!(key = %key, "record destroyed");
            Ok(CmdResult::default().with_affected(key))
        }
        None => Err(HbnbError::InstanceNotFound(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Kind, RecordKey};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_record_and_saves() {
        let mut store = StoreFixture::new()
            .with_record(Kind::State, "s1")
            .with_record(Kind::State, "s2")
            .store;

        let result = run(&mut store, Some("State"), Some("s1")).unwrap();
        assert!(result.messages.is_empty());
        assert!(store.get(&RecordKey::new(Kind::State, "s1")).is_none());
        assert_eq!(store.count(Kind::State), 1);
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn unknown_record_leaves_store_untouched() {
        let mut store = StoreFixture::new().with_record(Kind::State, "s1").store;

        assert!(matches!(
            run(&mut store, Some("State"), Some("nope")),
            Err(HbnbError::InstanceNotFound(_))
        ));
        assert!(matches!(
            run(&mut store, Some("Country"), Some("s1")),
            Err(HbnbError::UnknownTypeName(_))
        ));
        assert_eq!(store.count(Kind::State), 1);
        assert_eq!(store.saves(), 0);
    }
}
