use crate::conf::{DEFAULT_TEMPLATE, template};
use anyhow::{Context, Result, bail};
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to replace it)",
            path.display()
        );
    }
    if path.is_dir() {
        bail!("{} is a directory", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    write_file(path, &template(DEFAULT_TEMPLATE)?)?;

    println!("✔ Wrote default configuration to {}", path.display());
    println!();
    println!("Next steps:");
    println!("  jog config check {}", path.display());
    println!("  jog --config {} app.log", path.display());

    Ok(())
}

/// Helper to write a file (simple, deterministic, no magic)
fn write_file(path: &Path, contents: &str) -> Result<()> {
    let mut f =
        fs::File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    f.write_all(contents.trim_start().as_bytes())?;
    Ok(())
}
