use crate::error::{ClivmError, Result};
use crate::linker::Linker;
use crate::store::{validate_id, RecordStore, ToolRecord};

#[derive(Debug, PartialEq, Eq)]
pub enum Listing {
    All(Vec<ToolRecord>),
    One(ToolRecord),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Added {
    /// New tool, symlink created.
    Created,
    /// Version appended to an existing tool; active version untouched.
    Appended,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Removed {
    /// Last version removed, the tool is gone.
    Tool,
    /// `fallback` is the newly active version when the active one was removed.
    Version { fallback: Option<String> },
}

/// Version registry over a record store and a symlink manager.
///
/// Every mutation updates the symlink before persisting the record. When the
/// persist fails the symlink is put back the way it was, so a failed command
/// leaves the previous consistent state behind.
pub struct Registry<S, L> {
    store: S,
    linker: L,
}

impl<S: RecordStore, L: Linker> Registry<S, L> {
    pub fn new(store: S, linker: L) -> Self {
        Self { store, linker }
    }

    pub fn linker(&self) -> &L {
        &self.linker
    }

    pub fn get(&self, name: &str) -> Result<ToolRecord> {
        self.store.load(name)
    }

    pub fn names(&self) -> Result<Vec<String>> {
        Ok(self.store.list()?.into_iter().map(|r| r.id).collect())
    }

    /// `None` lists every tool; an empty store is an empty listing, not an error.
    pub fn list(&self, name: Option<&str>) -> Result<Listing> {
        match name {
            None => Ok(Listing::All(self.store.list()?)),
            Some(name) => Ok(Listing::One(self.store.load(name)?)),
        }
    }

    pub fn add(&self, name: &str, version: &str) -> Result<Added> {
        validate_id(name)?;
        if version.trim().is_empty() {
            return Err(ClivmError::InvalidVersion {
                name: name.to_string(),
                version: version.to_string(),
                reason: "version is empty",
            });
        }
        match self.store.load(name) {
            Ok(mut record) => {
                if record.position(version).is_some() {
                    return Err(ClivmError::DuplicateVersion {
                        name: name.to_string(),
                        version: version.to_string(),
                    });
                }
                record.versions.push(version.to_string());
                self.store.save(&record)?;
                tracing::info!(%name, %version, "appended version");
                Ok(Added::Appended)
            }
            Err(ClivmError::NotFound { .. }) => {
                let record = ToolRecord::new(name, version);
                self.relink_then_save(&record)?;
                tracing::info!(%name, %version, "created tool");
                Ok(Added::Created)
            }
            Err(e) => Err(e),
        }
    }

    pub fn switch(&self, name: &str, version: &str) -> Result<()> {
        let mut record = self.store.load(name)?;
        record.active = record
            .position(version)
            .ok_or_else(|| ClivmError::unknown_version(name, version))?;
        self.relink_then_save(&record)?;
        tracing::info!(%name, %version, "switched");
        Ok(())
    }

    pub fn remove(&self, name: &str, version: &str) -> Result<Removed> {
        let mut record = self.store.load(name)?;
        let index = record
            .position(version)
            .ok_or_else(|| ClivmError::unknown_version(name, version))?;

        if record.versions.len() == 1 {
            let previous = self.linker.current(name)?;
            self.linker.deactivate(name)?;
            if let Err(e) = self.store.delete(name) {
                self.restore_link(name, previous.as_deref());
                return Err(e);
            }
            tracing::info!(%name, "removed tool");
            return Ok(Removed::Tool);
        }

        let was_active = index == record.active;
        record.versions.remove(index);
        if was_active {
            // Fall back to the first remaining version.
            record.active = 0;
            self.relink_then_save(&record)?;
            let fallback = record.active_version().to_string();
            tracing::info!(%name, %version, %fallback, "removed active version");
            return Ok(Removed::Version {
                fallback: Some(fallback),
            });
        }
        if index < record.active {
            record.active -= 1;
        }
        self.store.save(&record)?;
        tracing::info!(%name, %version, "removed version");
        Ok(Removed::Version { fallback: None })
    }

    fn relink_then_save(&self, record: &ToolRecord) -> Result<()> {
        let previous = self.linker.current(&record.id)?;
        self.linker.activate(&record.id, record.active_version())?;
        if let Err(e) = self.store.save(record) {
            self.restore_link(&record.id, previous.as_deref());
            return Err(e);
        }
        Ok(())
    }

    fn restore_link(&self, name: &str, previous: Option<&str>) {
        let restored = match previous {
            Some(target) => self.linker.activate(name, target),
            None => self.linker.deactivate(name),
        };
        match restored {
            Ok(()) => tracing::warn!(%name, "record write failed; symlink restored"),
            Err(e) => {
                tracing::warn!(%name, error = %e, "record write failed; symlink not restored")
            }
        }
    }
}
