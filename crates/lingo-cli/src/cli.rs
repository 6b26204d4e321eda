//! CLI argument definitions for lingo.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "lingo",
    version,
    about = "Locate versioned data packages for language pipelines",
    long_about = "Lingo finds installed data packages (directory entries named \
                  <name>-<version>) under a configured data directory and picks the \
                  best version for a constraint expression such as '>=1.0,<2.0'."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Data directory holding installed packages
    #[arg(long, global = true, env = "LINGO_DATA_DIR", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List installed data packages
    List,

    /// Print the path of the best package match for a name and constraint
    Which {
        /// Logical package name, e.g. en_core
        name: String,
        /// Version constraint, e.g. '>=1.0,<2.0'
        #[arg(short, long)]
        require: Option<String>,
    },

    /// Show a package's meta.json
    Info {
        /// Logical package name, e.g. en_core
        name: String,
        /// Version constraint, e.g. '>=1.0,<2.0'
        #[arg(short, long)]
        require: Option<String>,
    },

    /// Print the active data directory
    Dir,
}

pub fn parse() -> Cli {
    Cli::parse()
}
