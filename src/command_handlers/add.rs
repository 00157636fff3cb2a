use crate::linker::Linker;
use crate::prompt::{Choice, Prompter};
use crate::registry::{Added, Registry};
use crate::store::RecordStore;
use anyhow::Result;
use std::path::Path;

/// Returns the tool name when a new tool (and symlink) was created.
pub fn run_add<S: RecordStore, L: Linker>(
    registry: &Registry<S, L>,
    prompter: &dyn Prompter,
    version: &str,
    name: Option<&str>,
) -> Result<Option<String>> {
    let version = super::normalize_version(version)?;
    let name = match name {
        Some(n) => n.to_string(),
        None => choose_name(registry, prompter, &version)?,
    };
    match registry.add(&name, &version)? {
        Added::Created => {
            println!("\nCreated {name} with version {version}\n");
            Ok(Some(name))
        }
        Added::Appended => {
            println!("\nAdded {version} to {name}\n");
            Ok(None)
        }
    }
}

fn choose_name<S: RecordStore, L: Linker>(
    registry: &Registry<S, L>,
    prompter: &dyn Prompter,
    version: &str,
) -> Result<String> {
    let names = registry.names()?;
    let suggested = suggest_name(version);
    if !names.is_empty() {
        let default = suggested
            .as_deref()
            .and_then(|s| names.iter().position(|n| n == s))
            .unwrap_or(0);
        let mut choices: Vec<Choice> = names.iter().map(|n| Choice::plain(n)).collect();
        // Empty value marks "create a new cli".
        choices.push(Choice::new("<new cli>", ""));
        let picked = prompter.select(
            "To which CLI do you want to add this version?",
            &choices,
            default,
        )?;
        if !picked.is_empty() {
            return Ok(picked);
        }
    }
    Ok(prompter.input("Name of the new CLI", suggested.as_deref())?)
}

/// `/opt/node-18/bin/node` suggests `node`.
fn suggest_name(version: &str) -> Option<String> {
    Path::new(version)
        .file_name()
        .and_then(|f| f.to_str())
        .filter(|f| !f.is_empty())
        .map(str::to_string)
}
