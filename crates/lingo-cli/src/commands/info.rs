use miette::Result;

use lingo_core::config::DataDir;

pub fn exec(data_dir: &DataDir, name: &str, require: &str) -> Result<()> {
    lingo_ops::ops_info::cmd_info(data_dir, name, require)
}
