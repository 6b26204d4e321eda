use miette::Result;

use lingo_core::config::DataDir;

pub fn exec(data_dir: &DataDir) -> Result<()> {
    lingo_ops::ops_list::cmd_list(data_dir)
}
