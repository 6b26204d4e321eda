use miette::Result;

use lingo_core::config::DataDir;

pub fn exec(data_dir: &DataDir, name: &str, require: &str) -> Result<()> {
    let path = lingo_ops::ops_which::cmd_which(data_dir, name, require)?;
    println!("{}", path.display());
    Ok(())
}
