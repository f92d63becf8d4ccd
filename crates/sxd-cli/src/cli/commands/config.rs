//! `sxd config` – show (and optionally create) the config file.

use anyhow::{Context, Result};
use std::path::Path;
use sxd_core::config;

pub fn run_config(path: &Path, init: bool) -> Result<()> {
    if init {
        if config::init(path)? {
            println!("Created {}", path.display());
        } else {
            println!("Config already exists at {}", path.display());
        }
    }

    let exists = path.exists();
    let cfg = config::load(path)?;
    let toml = toml::to_string_pretty(&cfg).context("serialize config")?;
    println!(
        "# {}{}",
        path.display(),
        if exists { "" } else { " (not found; showing defaults)" }
    );
    print!("{toml}");
    Ok(())
}
