use crate::config::Config;
use anyhow::{Context, Result};

pub fn run() -> Result<()> {
    let path = Config::default().save().context("Failed to write config")?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
