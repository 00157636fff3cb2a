pub fn platform() -> &'static dyn PlatformOps {
    &ConcretePlatform
}

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Posix,
    Fish,
}

pub trait PlatformOps: Sync + Send {
    fn home_dir(&self) -> Option<PathBuf>;
    fn clivm_home(&self) -> Option<PathBuf> {
        self.home_dir().map(|h| h.join(".clivm"))
    }
    /// Create `link` pointing at `target`.
    fn symlink(&self, target: &Path, link: &Path) -> std::io::Result<()>;
    /// Shell profile files that may receive the PATH line.
    fn shell_profiles(&self) -> Vec<(PathBuf, Shell)>;
}

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::UNIX_PLATFORM as ConcretePlatform;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::WINDOWS_PLATFORM as ConcretePlatform;
