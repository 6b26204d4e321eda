//! Print the active data directory.

use miette::Result;

use lingo_core::config::DataDir;
use lingo_util::console;

pub fn cmd_dir(data_dir: &DataDir) -> Result<()> {
    println!("{}", data_dir.root().display());
    if !data_dir.exists() {
        console::status_warn("Missing", "the directory does not exist yet");
    }
    Ok(())
}
