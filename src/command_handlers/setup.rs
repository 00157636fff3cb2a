use crate::config::ClivmConfig;
use crate::platform::{platform, Shell};
use anyhow::{Context, Result};
use fs_err as fs;
use std::path::Path;

// Setup strategy:
// The managed bin dir holds one symlink per cli, so it only needs to be on PATH once.
// We append a marked export line to shell profiles that already exist, and never twice.
pub fn setup_flow(cfg: &ClivmConfig, apply: bool) -> Result<()> {
    fs::create_dir_all(&cfg.bin_dir)
        .with_context(|| format!("creating bin dir {}", cfg.bin_dir.display()))?;

    if !apply {
        println!(
            "Add the following to your shell profile (~/.bashrc, ~/.zshrc or ~/.bash_profile):\n{}",
            snippet(Shell::Posix, &cfg.bin_dir)
        );
        println!(
            "For fish (~/.config/fish/config.fish):\n{}",
            snippet(Shell::Fish, &cfg.bin_dir)
        );
        return Ok(());
    }

    let mut wrote_any = false;
    for (path, shell) in platform().shell_profiles() {
        // Only patch profiles the user already has.
        if !path.exists() {
            continue;
        }
        if append_if_missing(&path, &snippet(shell, &cfg.bin_dir))? {
            println!("{} successfully patched.", path.display());
        } else {
            println!("{} already patched.", path.display());
        }
        wrote_any = true;
    }

    if !wrote_any {
        println!(
            "Could not locate a shell profile to update automatically. Add manually:\n{}",
            snippet(Shell::Posix, &cfg.bin_dir)
        );
    } else {
        println!("\nOpen a new shell or source your profile to use clivm.");
    }
    Ok(())
}

pub(crate) fn snippet(shell: Shell, bin_dir: &Path) -> String {
    match shell {
        Shell::Posix => format!(
            "\n# CLI Version Manager\nexport PATH=\"{}\":$PATH\n",
            bin_dir.display()
        ),
        Shell::Fish => format!(
            "\n# CLI Version Manager\nset -gx PATH \"{}\" $PATH\n",
            bin_dir.display()
        ),
    }
}

/// Returns false when the profile already carries the PATH line.
fn append_if_missing(path: &Path, snippet: &str) -> Result<bool> {
    use std::io::Write;
    let existing = fs::read_to_string(path)?;
    let marker = snippet.trim_end().lines().last().unwrap_or(snippet);
    if existing.contains(marker) {
        return Ok(false);
    }
    let mut f = fs::OpenOptions::new().append(true).open(path)?;
    if !existing.is_empty() && !existing.ends_with('\n') {
        f.write_all(b"\n")?;
    }
    f.write_all(snippet.as_bytes())?;
    tracing::debug!(profile = %path.display(), "patched shell profile");
    Ok(true)
}
