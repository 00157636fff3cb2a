use crate::platform::{PlatformOps, Shell};
use std::path::{Path, PathBuf};

pub static WINDOWS_PLATFORM: Windows = Windows;

pub struct Windows;

impl PlatformOps for Windows {
    fn home_dir(&self) -> Option<PathBuf> {
        std::env::var_os("USERPROFILE")
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
    }
    // Needs developer mode or an elevated shell.
    fn symlink(&self, target: &Path, link: &Path) -> std::io::Result<()> {
        std::os::windows::fs::symlink_file(target, link)
    }
    fn shell_profiles(&self) -> Vec<(PathBuf, Shell)> {
        self.home_dir()
            .map(|h| vec![(h.join(".bashrc"), Shell::Posix)])
            .unwrap_or_default()
    }
}
