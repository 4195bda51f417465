//! `modgen config` — inspect the resolved configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::Config {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "root" => Ok(config.root.display().to_string()),
        "stubs_dir" => Ok(config
            .stubs_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "cache_file" => Ok(config
            .cache_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "capabilities.api_auth" => Ok(config.capabilities.api_auth.to_string()),
        "capabilities.livewire" => Ok(config.capabilities.livewire.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        _ => Err(CliError::Config {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "root").unwrap(), "modules");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::Config { .. })
        ));
    }

    #[test]
    fn get_capability_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "capabilities.api_auth").unwrap(),
            "true"
        );
        assert_eq!(
            get_config_value(&cfg, "capabilities.livewire").unwrap(),
            "false"
        );
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }
}
