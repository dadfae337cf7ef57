//! `outfitter config`: inspect configuration values.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            if output.wants_json(None) {
                return output.json(&config);
            }
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).with_cli_context(|| "Failed to serialise config")?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            let path = AppConfig::active_path(global.config.as_deref());
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let unset = || "(unset)".to_string();
    let value = match key {
        "wardrobe.path" => config
            .wardrobe
            .path
            .as_ref()
            .map_or_else(unset, |p| p.display().to_string()),
        "generation.seed" => config.generation.seed.map_or_else(unset, |s| s.to_string()),
        "generation.oversample" => config.generation.oversample.to_string(),
        "generation.accessory_threshold" => config.generation.accessory_threshold.to_string(),
        "generation.outerwear_always_below" => {
            config.generation.outerwear_always_below.to_string()
        }
        "generation.outerwear_never_above" => config.generation.outerwear_never_above.to_string(),
        "scoring.weather_weight" => config.scoring.weather_weight.to_string(),
        "scoring.material_weight" => config.scoring.material_weight.to_string(),
        "scoring.color_weight" => config.scoring.color_weight.to_string(),
        "weather.high" => config.weather.high.to_string(),
        "weather.low" => config.weather.low.to_string(),
        "weather.current" => config.weather.current.to_string(),
        "weather.latitude" => config.weather.latitude.to_string(),
        "weather.longitude" => config.weather.longitude.to_string(),
        "output.no_color" => config.output.no_color.to_string(),
        "output.format" => config.output.format.clone(),
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            });
        }
    };
    Ok(value)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "scoring.color_weight").unwrap(), "5");
        assert_eq!(get_config_value(&cfg, "generation.oversample").unwrap(), "1.5");
    }

    #[test]
    fn get_unset_optional_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "generation.seed").unwrap(), "(unset)");
        assert_eq!(get_config_value(&cfg, "wardrobe.path").unwrap(), "(unset)");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }
}
