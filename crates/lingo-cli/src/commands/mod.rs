//! Command dispatch and handler modules.

mod dir;
mod info;
mod list;
mod which;

use miette::Result;

use lingo_core::config::DataDir;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let data_dir = DataDir::discover(cli.data_dir.as_deref())?;

    match cli.command {
        Command::List => list::exec(&data_dir),
        Command::Which { name, require } => {
            which::exec(&data_dir, &name, require.as_deref().unwrap_or(""))
        }
        Command::Info { name, require } => {
            info::exec(&data_dir, &name, require.as_deref().unwrap_or(""))
        }
        Command::Dir => dir::exec(&data_dir),
    }
}
