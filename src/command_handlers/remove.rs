use crate::linker::Linker;
use crate::prompt::{Choice, Prompter};
use crate::registry::{Registry, Removed};
use crate::store::RecordStore;
use anyhow::Result;

pub fn run_remove<S: RecordStore, L: Linker>(
    registry: &Registry<S, L>,
    prompter: &dyn Prompter,
    name: &str,
    select: Option<&str>,
) -> Result<()> {
    let record = registry.get(name)?;
    let version = match select {
        Some(v) => super::normalize_version(v)?,
        // Nothing to choose from.
        None if record.versions.len() == 1 => record.versions[0].clone(),
        None => {
            let choices: Vec<Choice> = record.versions.iter().map(|v| Choice::plain(v)).collect();
            prompter.select("Which version do you want to remove?", &choices, record.active)?
        }
    };
    match registry.remove(name, &version)? {
        Removed::Tool => println!("\nSuccessfully removed {name} from CLI Version Manager\n"),
        Removed::Version { fallback } => {
            println!("\nSuccessfully removed {version} from {name}");
            if let Some(new) = fallback {
                println!("Switched {name} from {version} to {new}");
            }
            println!();
        }
    }
    Ok(())
}
