use crate::commands::CmdResult;
use crate::error::{HbnbError, Result};
use crate::store::ObjectStore;

use super::helpers::resolve_key;

pub fn run<S: ObjectStore>(
    store: &S,
    type_name: Option<&str>,
    instance_id: Option<&str>,
) -> Result<CmdResult> {
    let key = resolve_key(type_name, instance_id)?;
    let record = store
        .get(&key)
        .ok_or_else(|| HbnbError::InstanceNotFound(key.to_string()))?;
    Ok(CmdResult::default().with_output(record.to_string()))
}
