//! Show a resolved package's metadata.

use miette::Result;

use lingo_core::config::DataDir;
use lingo_core::meta::read_meta;
use lingo_core::package::split_data_name;
use lingo_util::console;

pub fn cmd_info(data_dir: &DataDir, name: &str, constraint: &str) -> Result<()> {
    let path = crate::ops_which::cmd_which(data_dir, name, constraint)?;

    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let (package_name, version) = split_data_name(file_name);
    let shown = if version.is_empty() {
        "(unversioned)"
    } else {
        version
    };
    console::status("Package", &format!("{package_name} {shown} ({})", path.display()));

    match read_meta(&path)? {
        Some(meta) => {
            let pretty = serde_json::to_string_pretty(&meta).map_err(|e| {
                lingo_util::errors::LingoError::Meta {
                    message: format!("Failed to render meta for {}: {e}", path.display()),
                }
            })?;
            println!("{pretty}");
            Ok(())
        }
        None => Err(lingo_util::errors::LingoError::Meta {
            message: format!("No meta.json found in {}", path.display()),
        }
        .into()),
    }
}
