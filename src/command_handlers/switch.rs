use crate::linker::Linker;
use crate::prompt::{Choice, Prompter};
use crate::registry::Registry;
use crate::store::RecordStore;
use anyhow::Result;

pub fn run_switch<S: RecordStore, L: Linker>(
    registry: &Registry<S, L>,
    prompter: &dyn Prompter,
    name: &str,
    select: Option<&str>,
) -> Result<()> {
    let version = match select {
        Some(v) => super::normalize_version(v)?,
        None => {
            let record = registry.get(name)?;
            let choices: Vec<Choice> = record.versions.iter().map(|v| Choice::plain(v)).collect();
            prompter.select(
                &format!("To which {name} version do you want to switch?"),
                &choices,
                record.active,
            )?
        }
    };
    registry.switch(name, &version)?;
    println!("\nSuccessfully switched {name} to version {version}\n");
    Ok(())
}
