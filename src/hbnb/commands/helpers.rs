use crate::error::{HbnbError, Result};
use crate::model::{Kind, RecordKey};
use crate::store::ObjectStore;

/// Type name present and known.
pub fn resolve_kind(type_name: Option<&str>) -> Result<Kind> {
    type_name.ok_or(HbnbError::MissingTypeName)?.parse()
}

/// Type name checks, then instance id present.
pub fn resolve_key(type_name: Option<&str>, instance_id: Option<&str>) -> Result<RecordKey> {
    let kind = resolve_kind(type_name)?;
    let id = instance_id.ok_or(HbnbError::MissingInstanceId)?;
    Ok(RecordKey::new(kind, id))
}

/// Key checks, then the record must exist.
pub fn existing_key<S: ObjectStore>(
    store: &S,
    type_name: Option<&str>,
    instance_id: Option<&str>,
) -> Result<RecordKey> {
    let key = resolve_key(type_name, instance_id)?;
    if store.get(&key).is_none() {
        return Err(HbnbError::InstanceNotFound(key.to_string()));
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn precedence_is_type_then_kind_then_id_then_record() {
        let store = StoreFixture::new().with_record(Kind::User, "u1").store;

        assert!(matches!(
            existing_key(&store, None, None),
            Err(HbnbError::MissingTypeName)
        ));
        assert!(matches!(
            existing_key(&store, Some("Ghost"), None),
            Err(HbnbError::UnknownTypeName(_))
        ));
        assert!(matches!(
            existing_key(&store, Some("User"), None),
            Err(HbnbError::MissingInstanceId)
        ));
        assert!(matches!(
            existing_key(&store, Some("User"), Some("u2")),
            Err(HbnbError::InstanceNotFound(key)) if key == "User.u2"
        ));
        assert_eq!(
            existing_key(&store, Some("User"), Some("u1")).unwrap(),
            RecordKey::new(Kind::User, "u1")
        );
    }

    #[test]
    fn id_under_the_wrong_kind_is_not_found() {
        let store = StoreFixture::new().with_record(Kind::User, "u1").store;
        assert!(matches!(
            existing_key(&store, Some("Place"), Some("u1")),
            Err(HbnbError::InstanceNotFound(_))
        ));
    }
}
