use std::{fs, path::Path};

use anyhow::{Context, Result};

pub mod name;
pub mod post;
pub mod trx;

/// Prints `json` or writes it as `<to_path>/<file_name>`.
pub fn emit_json(json: &str, to_path: Option<&Path>, file_name: &str) -> Result<()> {
    match to_path {
        None => println!("{json}"),
        Some(dir) => {
            fs::create_dir_all(dir).with_context(|| format!("failed to create {dir:?}"))?;
            let out_path = dir.join(file_name);
            fs::write(&out_path, json).with_context(|| format!("failed to write {out_path:?}"))?;
            println!("JSON written to {}", out_path.display());
        }
    }
    Ok(())
}
