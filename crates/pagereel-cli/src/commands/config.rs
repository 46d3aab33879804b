use anyhow::Result;

use pagereel_core::AppConfig;

/// Print the path where the config file is looked up.
pub fn path() -> Result<()> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}

/// Write the current (or default) configuration to the config file.
pub fn init(config: &AppConfig) -> Result<()> {
    config.save()?;
    println!("Wrote {}", AppConfig::config_path().display());
    Ok(())
}
