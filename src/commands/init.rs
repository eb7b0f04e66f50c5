use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

/// Write the default configuration to `path`, refusing to clobber unless `force`.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(path, DEFAULT_CONFIG_TEMPLATE)
}
