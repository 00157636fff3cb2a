use crate::platform::{PlatformOps, Shell};
use std::path::{Path, PathBuf};

pub static UNIX_PLATFORM: Unix = Unix;

pub struct Unix;

impl PlatformOps for Unix {
    fn home_dir(&self) -> Option<PathBuf> {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
    }
    fn symlink(&self, target: &Path, link: &Path) -> std::io::Result<()> {
        std::os::unix::fs::symlink(target, link)
    }
    fn shell_profiles(&self) -> Vec<(PathBuf, Shell)> {
        let Some(home) = self.home_dir() else {
            return Vec::new();
        };
        vec![
            (home.join(".bash_profile"), Shell::Posix),
            (home.join(".bashrc"), Shell::Posix),
            (home.join(".zshrc"), Shell::Posix),
            (home.join(".config/fish/config.fish"), Shell::Fish),
        ]
    }
}
