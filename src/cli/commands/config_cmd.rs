//! Config command - show and update user preferences

use anyhow::bail;

use limbah::config::GlobalConfig;
use limbah::output::{OperationResult, OutputMode};

use crate::cli::app::ConfigAction;

/// Dispatch a config subcommand
pub fn config_cmd(action: ConfigAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let config = GlobalConfig::load();
            if mode == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print!("{}", toml::to_string_pretty(&config)?);
            }
            Ok(())
        },
        ConfigAction::Set { key, value } => {
            let mut config = GlobalConfig::load();
            if !config.set(&key, &value) {
                bail!(
                    "unknown config key '{key}' (known: api.base-url, label.default-size, label.output-dir)"
                );
            }
            config.save()?;

            OperationResult {
                success: true,
                message: format!("Set {key} = {value}"),
            }
            .render(mode);
            Ok(())
        },
    }
}
