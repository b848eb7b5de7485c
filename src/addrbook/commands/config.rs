use crate::commands::{CmdMessage, CmdResult};
use crate::config::BookConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(BookConfig::load(dir)?)),
        ConfigAction::ShowKey(key) => show_key(dir, &key),
        ConfigAction::Set(key, value) => set_key(dir, &key, &value),
    }
}

fn show_key(dir: &Path, key: &str) -> Result<CmdResult> {
    let config = BookConfig::load(dir)?;
    let message = match config.get(key) {
        Some(value) => CmdMessage::info(value),
        None => CmdMessage::error(format!("Unknown config key: {}", key)),
    };

    let mut result = CmdResult::default();
    result.add_message(message);
    Ok(result)
}

/// A broken config file is replaced rather than blocking the write.
fn set_key(dir: &Path, key: &str, value: &str) -> Result<CmdResult> {
    let mut config = BookConfig::load(dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, dir = %dir.display(), "overwriting unreadable config");
        BookConfig::default()
    });

    let mut result = CmdResult::default();
    if let Err(e) = config.set(key, value) {
        result.add_message(CmdMessage::error(e.to_string()));
        return Ok(result);
    }

    config.save(dir)?;
    tracing::debug!(key, value, dir = %dir.display(), "config saved");

    let stored = config.get(key).unwrap_or_default();
    result.add_message(CmdMessage::success(format!("{} set to {}", key, stored)));
    Ok(result.with_config(config))
}
