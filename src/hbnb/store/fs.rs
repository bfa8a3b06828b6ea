use super::{ObjectStore, Records};
use crate::error::{HbnbError, Result};
use crate::model::Record;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_FILE_NAME: &str = "file.json";

/// JSON-file backed storage. The file is read once on [`FileStore::open`]
/// and rewritten in full by every `save()`.
pub struct FileStore {
    path: PathBuf,
    records: Records,
}

impl FileStore {
    /// Open the store at `path`, loading any records already on disk.
    /// A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = load_records(&path)?;
        debug!(path = %path.display(), count = records.len(), "store loaded");
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(HbnbError::Io)?;
            }
        }
        Ok(())
    }
}

fn load_records(path: &Path) -> Result<Records> {
    if !path.exists() {
        return Ok(Records::new());
    }
    let content = fs::read_to_string(path).map_err(HbnbError::Io)?;
    if content.trim().is_empty() {
        return Ok(Records::new());
    }
    let raw: BTreeMap<String, Record> =
        serde_json::from_str(&content).map_err(HbnbError::Serialization)?;

    let mut records = Records::new();
    for (stored_key, record) in raw {
        let key = record.key();
        if stored_key != key.to_string() {
            warn!(stored = %stored_key, actual = %key, "record key does not match its contents");
        }
        records.insert(key, record);
    }
    Ok(records)
}

impl ObjectStore for FileStore {
    fn all(&self) -> &Records {
        &self.records
    }

    fn all_mut(&mut self) -> &mut Records {
        &mut self.records
    }

    fn save(&mut self) -> Result<()> {
        self.ensure_parent()?;
        let by_key: BTreeMap<String, &Record> = self
            .records
            .iter()
            .map(|(key, record)| (key.to_string(), record))
            .collect();
        let content = serde_json::to_string_pretty(&by_key).map_err(HbnbError::Serialization)?;
        fs::write(&self.path, content).map_err(HbnbError::Io)?;
        debug!(path = %self.path.display(), count = by_key.len(), "store saved");
        Ok(())
    }
}
