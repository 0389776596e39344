//! `axe-scan init`

use super::messages;
use crate::prompt::confirm;
use anyhow::Result;
use axe_scan_common::{load_config, save_config, AxeScanError, ConfigPaths, ConfigScope, MessageKey};
use tracing::debug;

pub fn run(global: bool, yes: bool) -> Result<()> {
    let paths = ConfigPaths::from_env()?;
    let config = load_config(&paths, ConfigScope::Home)?;
    let messages = messages(&config);

    let path = paths.file_for(if global {
        ConfigScope::Home
    } else {
        ConfigScope::Current
    })?;

    let existed = path.is_file();
    if existed && !yes {
        let stdin = std::io::stdin();
        let overwrite = confirm(
            &messages.prompt_overwrite(&path),
            stdin.lock(),
            std::io::stderr(),
        )?;
        if !overwrite {
            return Err(AxeScanError::new(messages.text(MessageKey::InitAbort)).into());
        }
    }

    debug!("Writing {:?}", path);
    save_config(&path, &config)?;

    if existed {
        println!("{}", messages.init_updated(&path));
    } else {
        println!("{}", messages.init_created(&path));
    }
    Ok(())
}
