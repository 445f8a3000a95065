//! `config`: show every setting, read one key, or change one key.

use crate::commands::{CmdMessage, CmdResult, SigPaths};
use crate::config::SigConfig;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Bad keys and rejected values come back as error messages, not `Err`; `config.json` is only
/// written after a successful set.
pub fn run(paths: &SigPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.config_dir.as_path();
    let mut config = SigConfig::load(dir)?;

    let result = match action {
        ConfigAction::ShowAll => CmdResult::default().with_config(config),
        ConfigAction::ShowKey(key) => {
            let message = config
                .get(&key)
                .map(CmdMessage::info)
                .unwrap_or_else(|| CmdMessage::error(format!("Unknown config key: {}", key)));
            CmdResult::default().with_message(message)
        }
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Err(reason) => CmdResult::default().with_message(CmdMessage::error(reason)),
            Ok(()) => {
                config.save(dir)?;
                tracing::debug!(key = %key, "config updated");
                let stored = config.get(&key).unwrap_or(value);
                CmdResult::default()
                    .with_message(CmdMessage::success(format!("{} set to {}", key, stored)))
                    .with_config(config)
            }
        },
    };
    Ok(result)
}
