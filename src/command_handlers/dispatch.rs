use crate::cli::Commands;
use crate::command_handlers::{add, list, remove, setup, switch};
use crate::config::ClivmConfig;
use crate::prompt::DialoguerPrompter;
use anyhow::Result;

pub fn dispatch(cmd: Commands, cfg: &ClivmConfig) -> Result<()> {
    tracing::debug!(home = %cfg.home.display(), ?cmd, "dispatching");
    let registry = cfg.registry();
    let prompter = DialoguerPrompter;
    match cmd {
        Commands::List { name } => list::run_list(&registry, name.as_deref()),
        Commands::Switch { name, select } => {
            switch::run_switch(&registry, &prompter, &name, select.as_deref())?;
            print_hint(cfg, &name);
            Ok(())
        }
        Commands::Add { version, name } => {
            if let Some(created) = add::run_add(&registry, &prompter, &version, name.as_deref())? {
                print_hint(cfg, &created);
            }
            Ok(())
        }
        Commands::Remove { name, select } => {
            remove::run_remove(&registry, &prompter, &name, select.as_deref())
        }
        Commands::Setup { apply } => setup::setup_flow(cfg, apply),
    }
}

fn print_hint(cfg: &ClivmConfig, name: &str) {
    if let Some(hint) = super::path_hint(&cfg.bin_dir, name) {
        println!("Hint: {hint}");
    }
}
