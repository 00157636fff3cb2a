use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    name = "clivm",
    about = "CLI Version Manager: register versions of an executable and switch between them"
)]
pub struct Cli {
    /// Without a command, usage is printed.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding clivm records and the managed bin dir (defaults to ~/.clivm)
    #[arg(long, global = true, env = "CLIVM_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all versions of a cli (every cli when NAME is omitted or "all")
    #[command(visible_alias = "ls")]
    List {
        #[arg(value_name = "NAME")]
        name: Option<String>,
    },
    /// Switch the active version of a cli
    #[command(visible_alias = "sw")]
    Switch {
        #[arg(value_name = "NAME")]
        name: String,
        /// Version to activate; prompts when omitted
        #[arg(long, value_name = "VERSION")]
        select: Option<String>,
    },
    /// Add a cli version (usually a path to a binary) to clivm
    Add {
        #[arg(value_name = "CLI_PATH")]
        version: String,
        /// Cli to add the version to; prompts when omitted
        #[arg(long, value_name = "NAME")]
        name: Option<String>,
    },
    /// Remove a version of a cli
    #[command(visible_alias = "rm")]
    Remove {
        #[arg(value_name = "NAME")]
        name: String,
        /// Version to remove; prompts when omitted and the cli has several
        #[arg(long, value_name = "VERSION")]
        select: Option<String>,
    },
    /// Put the managed bin dir on PATH in your shell profiles
    Setup {
        /// Append the PATH line to existing profiles; otherwise just print it
        #[arg(long)]
        apply: bool,
    },
}
