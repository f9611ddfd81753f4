use anyhow::{bail, Result};
use tracing::info;

use fadelabel_core::AppConfig;

pub fn show(config: &AppConfig) -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() {
        println!("# {}", path.display());
    } else {
        println!("# {} (not found, showing defaults)", path.display());
    }
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn init(force: bool) -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() && !force {
        bail!(
            "{} already exists.\nUse `fadelabel config init --force` to overwrite it.",
            path.display()
        );
    }

    AppConfig::default().save()?;
    info!(path = %path.display(), "Wrote default configuration");
    println!("Wrote {}", path.display());
    Ok(())
}
