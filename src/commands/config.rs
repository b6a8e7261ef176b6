//! Config command - read and change settings

use crate::{
    ImgseekError, Result,
    cli::{ConfigCommands, parse_setting},
    config::ImgseekConfig,
    ui::output::OutputWriter,
};
use std::path::Path;

/// Execute a `config` subcommand against the file at `path`
///
/// `set` reads the file without environment overrides so that values from
/// the environment are never written back to disk.
///
/// # Errors
///
/// Returns an error for malformed settings, unknown keys, or if the config
/// file cannot be read or written.
pub fn execute(command: &ConfigCommands, path: &Path, output: &dyn OutputWriter) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = parse_setting(setting).ok_or_else(|| {
                ImgseekError::InvalidInput(format!(
                    "Invalid setting '{setting}'. Use key=value"
                ))
            })?;

            let mut config = if path.exists() {
                ImgseekConfig::read_file(path)?
            } else {
                ImgseekConfig::default()
            };
            config.set_value(key, value)?;
            config.save_to(path)?;

            let shown = config.get_value(key).unwrap_or_default();
            output.success(&format!("Set {key} = {shown}"));
        }
        ConfigCommands::Get { key } => {
            let config = if path.exists() {
                ImgseekConfig::load_from(path)?
            } else {
                ImgseekConfig::default()
            };
            let value = config.get_value(key).ok_or_else(|| {
                ImgseekError::InvalidInput(format!("Unknown configuration key: '{key}'"))
            })?;
            output.write(&value);
        }
        ConfigCommands::Path => {
            output.write(&path.display().to_string());
        }
    }
    Ok(())
}
