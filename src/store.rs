use crate::error::{ClivmError, Result};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Persisted state of one registered tool.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ToolRecord {
    pub id: String,
    /// Index into `versions` of the active entry. Stored as `version` on disk.
    #[serde(rename = "version")]
    pub active: usize,
    pub versions: Vec<String>,
}

impl ToolRecord {
    pub fn new(id: &str, version: &str) -> Self {
        Self {
            id: id.to_string(),
            active: 0,
            versions: vec![version.to_string()],
        }
    }

    pub fn active_version(&self) -> &str {
        &self.versions[self.active]
    }

    pub fn position(&self, version: &str) -> Option<usize> {
        self.versions.iter().position(|v| v == version)
    }

    fn check(&self) -> Result<()> {
        if self.versions.is_empty() {
            return Err(ClivmError::store(&self.id, "record has no versions"));
        }
        if self.active >= self.versions.len() {
            return Err(ClivmError::store(
                &self.id,
                format!(
                    "active index {} out of range for {} version(s)",
                    self.active,
                    self.versions.len()
                ),
            ));
        }
        Ok(())
    }
}

/// Tool names double as file names and symlink names.
pub fn validate_id(id: &str) -> Result<()> {
    let reason = if id.trim().is_empty() {
        Some("name is empty")
    } else if id == "." || id == ".." {
        Some("name is a relative path component")
    } else if id.contains(['/', '\\', '\0']) {
        Some("name contains a path separator")
    } else if id.starts_with('-') {
        Some("name starts with '-'")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(ClivmError::InvalidName {
            name: id.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

pub trait RecordStore {
    /// All records, sorted by id.
    fn list(&self) -> Result<Vec<ToolRecord>>;
    fn load(&self, id: &str) -> Result<ToolRecord>;
    /// Create or fully replace the record keyed by `record.id`.
    fn save(&self, record: &ToolRecord) -> Result<()>;
    fn delete(&self, id: &str) -> Result<()>;
}

/// One pretty-printed `<id>.json` file per record inside `dir`.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    fn read(&self, id: &str, path: &Path) -> Result<ToolRecord> {
        let data = match fs::read_to_string(path) {
            Ok(d) => d,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(ClivmError::not_found(id)),
            Err(e) => return Err(ClivmError::store(id, e)),
        };
        let record: ToolRecord =
            serde_json::from_str(&data).map_err(|e| ClivmError::store(id, e))?;
        if record.id != id {
            return Err(ClivmError::store(
                id,
                format!("file holds record '{}'", record.id),
            ));
        }
        record.check()?;
        Ok(record)
    }
}

impl RecordStore for JsonStore {
    fn list(&self) -> Result<Vec<ToolRecord>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ClivmError::fs("reading data dir", &self.dir, e)),
        };
        let mut records = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| ClivmError::fs("reading data dir", &self.dir, e))?
                .path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            records.push(self.read(id, &path)?);
        }
        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }

    fn load(&self, id: &str) -> Result<ToolRecord> {
        validate_id(id)?;
        self.read(id, &self.path(id))
    }

    fn save(&self, record: &ToolRecord) -> Result<()> {
        validate_id(&record.id)?;
        record.check()?;
        fs::create_dir_all(&self.dir)
            .map_err(|e| ClivmError::fs("creating data dir", &self.dir, e))?;
        let mut body =
            serde_json::to_string_pretty(record).map_err(|e| ClivmError::store(&record.id, e))?;
        body.push('\n');
        let path = self.path(&record.id);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(|e| ClivmError::store(&record.id, e))?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(ClivmError::store(&record.id, e));
        }
        tracing::debug!(id = %record.id, path = %path.display(), "saved record");
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        validate_id(id)?;
        let path = self.path(id);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(%id, path = %path.display(), "deleted record");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(ClivmError::not_found(id)),
            Err(e) => Err(ClivmError::store(id, e)),
        }
    }
}

#[cfg(test)]
pub use memory::MemoryStore;
