//! `axe-scan config`

use super::messages;
use anyhow::Result;
use axe_scan_common::config::read_config_file;
use axe_scan_common::{load_config, save_config, AxeScanError, ConfigPaths, ConfigScope};

pub fn run(change_value: Option<&str>, global: bool) -> Result<()> {
    let paths = ConfigPaths::from_env()?;
    let scope = if global {
        ConfigScope::Home
    } else {
        ConfigScope::Current
    };

    let Some(change) = change_value else {
        let config = load_config(&paths, scope)?;
        println!("{}", messages(&config).current_config(&config.settings()?));
        return Ok(());
    };

    let path = paths.file_for(scope)?;
    if !path.is_file() {
        let active = load_config(&paths, scope)?;
        return Err(AxeScanError::new(messages(&active).config_file_not_found(&path, global)).into());
    }

    let mut config = read_config_file(&path)?;
    if let Err(e) = config.apply_change(change) {
        return Err(AxeScanError::new(messages(&config).config_change_error(&e)).into());
    }
    save_config(&path, &config)?;

    println!("{}", messages(&config).config_updated());
    Ok(())
}
