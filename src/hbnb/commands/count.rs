use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ObjectStore;

use super::helpers::resolve_kind;

pub fn run<S: ObjectStore>(store: &S, type_name: Option<&str>) -> Result<CmdResult> {
    let kind = resolve_kind(type_name)?;
    Ok(CmdResult::default().with_output(store.count(kind).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HbnbError;
    use crate::model::Kind;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn counts_only_the_requested_kind() {
        let store = StoreFixture::new()
            .with_records(Kind::Review, 3)
            .with_records(Kind::User, 1)
            .store;
        assert_eq!(run(&store, Some("Review")).unwrap().lines(), vec!["3"]);
        assert_eq!(run(&store, Some("Amenity")).unwrap().lines(), vec!["0"]);
    }

    #[test]
    fn still_validates_the_type() {
        let store = StoreFixture::new().store;
        assert!(matches!(run(&store, None), Err(HbnbError::MissingTypeName)));
        assert!(matches!(
            run(&store, Some("Castle")),
            Err(HbnbError::UnknownTypeName(_))
        ));
    }
}
