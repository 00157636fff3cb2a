use crate::error::{ClivmError, Result};
use crate::platform::PlatformOps;
use fs_err as fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Keeps one `name -> version` symlink per tool in the managed bin dir.
pub trait Linker {
    /// Point `name` at `version`, replacing any previous link.
    fn activate(&self, name: &str, version: &str) -> Result<()>;
    /// Remove the link for `name`. Absence is not an error.
    fn deactivate(&self, name: &str) -> Result<()>;
    /// Current target of the link for `name`, if one exists.
    fn current(&self, name: &str) -> Result<Option<String>>;
}

pub struct BinLinker {
    bin_dir: PathBuf,
    platform: &'static dyn PlatformOps,
}

impl BinLinker {
    pub fn new(bin_dir: impl Into<PathBuf>, platform: &'static dyn PlatformOps) -> Self {
        Self {
            bin_dir: bin_dir.into(),
            platform,
        }
    }

    fn unlink(&self, link: &Path) -> Result<()> {
        match fs::symlink_metadata(link) {
            Ok(meta) if meta.file_type().is_symlink() => {
                fs::remove_file(link).map_err(|e| ClivmError::fs("removing symlink", link, e))
            }
            Ok(_) => Err(not_a_symlink(link)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClivmError::fs("inspecting", link, e)),
        }
    }
}

fn not_a_symlink(link: &Path) -> ClivmError {
    ClivmError::fs(
        "refusing to manage",
        link,
        std::io::Error::new(ErrorKind::AlreadyExists, "entry exists and is not a symlink"),
    )
}

impl Linker for BinLinker {
    fn activate(&self, name: &str, version: &str) -> Result<()> {
        fs::create_dir_all(&self.bin_dir)
            .map_err(|e| ClivmError::fs("creating bin dir", &self.bin_dir, e))?;
        let link = self.bin_dir.join(name);
        self.unlink(&link)?;
        self.platform
            .symlink(Path::new(version), &link)
            .map_err(|e| ClivmError::fs("creating symlink", &link, e))?;
        tracing::debug!(%name, %version, link = %link.display(), "activated");
        Ok(())
    }

    fn deactivate(&self, name: &str) -> Result<()> {
        let link = self.bin_dir.join(name);
        self.unlink(&link)?;
        tracing::debug!(%name, link = %link.display(), "deactivated");
        Ok(())
    }

    fn current(&self, name: &str) -> Result<Option<String>> {
        let link = self.bin_dir.join(name);
        match fs::symlink_metadata(&link) {
            Ok(meta) if meta.file_type().is_symlink() => {}
            Ok(_) => return Err(not_a_symlink(&link)),
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ClivmError::fs("inspecting", &link, e)),
        }
        let target = fs::read_link(&link).map_err(|e| ClivmError::fs("reading symlink", &link, e))?;
        Ok(Some(target.to_string_lossy().into_owned()))
    }
}
