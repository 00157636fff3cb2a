use crate::linker::BinLinker;
use crate::platform::platform;
use crate::registry::Registry;
use crate::store::JsonStore;
use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

/// Where clivm keeps its records and the managed bin directory.
#[derive(Debug, Clone)]
pub struct ClivmConfig {
    pub home: PathBuf,
    pub data_dir: PathBuf,
    pub bin_dir: PathBuf,
}

impl ClivmConfig {
    /// `home` comes from `--home` / `CLIVM_HOME`; otherwise `~/.clivm`.
    pub fn resolve(home: Option<PathBuf>) -> Result<Self> {
        let home = match home {
            Some(h) => h,
            None => platform().clivm_home().ok_or_else(|| {
                anyhow!("could not determine home directory; pass --home or set CLIVM_HOME")
            })?,
        };
        tracing::debug!(home = %home.display(), "resolved clivm home");
        Ok(Self::at(&home))
    }

    pub fn at(home: &Path) -> Self {
        Self {
            home: home.to_path_buf(),
            data_dir: home.join("data"),
            bin_dir: home.join("bin"),
        }
    }

    pub fn registry(&self) -> Registry<JsonStore, BinLinker> {
        Registry::new(
            JsonStore::new(&self.data_dir),
            BinLinker::new(&self.bin_dir, platform()),
        )
    }
}
