pub mod add;
pub mod dispatch;
pub mod list;
pub mod remove;
pub mod setup;
pub mod switch;

use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

/// Turn a relative path to an existing file into the absolute form stored in
/// records, so `./bin/tool` and `/cwd/bin/tool` name the same version.
pub(crate) fn normalize_version(version: &str) -> Result<String> {
    let cwd = std::env::current_dir().context("reading current directory")?;
    Ok(normalize_version_in(&cwd, version))
}

// Lexical only: a symlinked version must stay the symlink, not its target.
fn normalize_version_in(cwd: &Path, version: &str) -> String {
    let path = Path::new(version);
    if !path.is_relative() || !cwd.join(path).exists() {
        return version.to_string();
    }
    let mut out = PathBuf::from(cwd);
    for component in path.components() {
        if component != Component::CurDir {
            out.push(component);
        }
    }
    out.to_string_lossy().into_owned()
}

/// Explain why `name` would not resolve to the managed symlink, if it would not.
pub(crate) fn path_hint(bin_dir: &Path, name: &str) -> Option<String> {
    let on_path = std::env::var_os("PATH")
        .map(|p| std::env::split_paths(&p).any(|dir| dir == bin_dir))
        .unwrap_or(false);
    if !on_path {
        return Some(format!(
            "{} is not on your PATH; run 'clivm setup' to add it.",
            bin_dir.display()
        ));
    }
    match which::which(name) {
        Ok(found) if !found.starts_with(bin_dir) => Some(format!(
            "'{name}' currently resolves to {}; move {} earlier in PATH.",
            found.display(),
            bin_dir.display()
        )),
        _ => None,
    }
}
