use anyhow::Result;
use std::path::PathBuf;
use license_template::{has_existing_license, resolve_directory};

pub fn handle_check(path: Option<PathBuf>, quiet: bool) -> Result<()> {
    let target = path.unwrap_or_else(|| PathBuf::from("."));
    let directory = resolve_directory(&target)?;

    if has_existing_license(&directory)? {
        if !quiet {
            println!("⚠️  License file found in {}", directory.display());
        }
        std::process::exit(1);
    }

    if !quiet {
        println!("✅ No license file in {}", directory.display());
    }

    Ok(())
}
