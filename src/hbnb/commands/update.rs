use crate::commands::{CmdMessage, CmdResult};
use crate::error::{HbnbError, Result};
use crate::model::{AttributeValue, RecordKey};
use crate::parser::literal::parse_mapping;
use crate::parser::normalize::{coerce, coerce_value};
use crate::parser::Attributes;
use crate::store::ObjectStore;
use tracing::{debug, warn};

use super::helpers::existing_key;

pub fn run<S: ObjectStore>(
    store: &mut S,
    type_name: Option<&str>,
    instance_id: Option<&str>,
    attributes: &Attributes,
) -> Result<CmdResult> {
    let key = existing_key(store, type_name, instance_id)?;

    match attributes {
        Attributes::Mapping(source) => apply_mapping(store, key, source),
        Attributes::Pair { name, value } => {
            let name = name.as_deref().ok_or(HbnbError::MissingAttributeName)?;
            let value = value.as_deref().ok_or(HbnbError::MissingAttributeValue)?;
            let mut result = CmdResult::default();
            if apply(store, &key, name, coerce(value))? {
                result = result.with_affected(key);
            }
            Ok(result)
        }
        Attributes::None => Err(HbnbError::MissingAttributeName),
    }
}

/// Every pair is checked and applied on its own; a bad pair is reported and
/// the rest still go through.
fn apply_mapping<S: ObjectStore>(store: &mut S, key: RecordKey, source: &str) -> Result<CmdResult> {
    let pairs = parse_mapping(source)?;
    let mut result = CmdResult::default();
    let mut changed = false;

    for (name, value) in pairs {
        let value = coerce_value(value);
        if name.is_empty() {
            result.add_message(CmdMessage::error(HbnbError::MissingAttributeName.to_string()));
            continue;
        }
        if value.as_str() == Some("") {
            result.add_message(CmdMessage::error(HbnbError::MissingAttributeValue.to_string()));
            continue;
        }
        changed |= apply(store, &key, &name, value)?;
    }

    if changed {
        result = result.with_affected(key);
    }
    Ok(result)
}

/// Set one attribute, refresh `updated_at` and persist. Reserved names are
/// skipped without saving.
fn apply<S: ObjectStore>(
    store: &mut S,
    key: &RecordKey,
    name: &str,
    value: AttributeValue,
) -> Result<bool> {
    let record = store
        .get_mut(key)
        .ok_or_else(|| HbnbError::InstanceNotFound(key.to_string()))?;
    if !record.set_attr(name, value) {
        warn!(key = %key, attribute = name, "reserved attribute left unchanged");
        return Ok(false);
    }
    record.touch();
    store.save()?;
    debug!(key = %key, attribute = name, "attribute updated");
    Ok(true)
}
