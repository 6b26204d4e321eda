//! List the packages installed in the data directory.

use miette::Result;

use lingo_core::config::DataDir;
use lingo_util::console;

pub fn cmd_list(data_dir: &DataDir) -> Result<()> {
    let packages = lingo_resolver::resolver::list_packages(data_dir.root())?;

    if packages.is_empty() {
        let body = format!(
            "No packages were found under {}. Install packages into this directory, \
             or point --data-dir (or LINGO_DATA_DIR) at the directory that holds them.",
            data_dir.root().display()
        );
        console::message(Some("No data packages installed"), &[body.as_str()]);
        return Ok(());
    }

    println!("Installed data packages in {}:", data_dir.root().display());
    for package in &packages {
        let version = if package.version.is_empty() {
            "-"
        } else {
            package.version.as_str()
        };
        println!(
            "  {:<24} {:<12} {:<4} {}",
            package.name,
            version,
            package.language(),
            package.path.display()
        );
    }
    Ok(())
}
