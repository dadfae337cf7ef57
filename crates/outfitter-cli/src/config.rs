//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the plain
//! [`GenerationSettings`] built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `OUTFITTER__<SECTION>__<KEY>`, e.g.
//!    `OUTFITTER__GENERATION__SEED=42`
//! 3. Config file (`--config`, or `config.toml` in the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use outfitter_core::domain::{GenerationSettings, Location, ScoringWeights};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the wardrobe lives.
    pub wardrobe: WardrobeConfig,
    /// Generation tuning.
    pub generation: GenerationConfig,
    /// Weights of the three compatibility scores.
    pub scoring: ScoringConfig,
    /// Weather used by `generate` when no flags are given.
    pub weather: WeatherConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WardrobeConfig {
    /// Wardrobe file. Defaults to `wardrobe.toml` in the platform data dir.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Fixed RNG seed. Omit for a different outfit every run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub oversample: f64,
    pub accessory_threshold: f64,
    pub outerwear_always_below: f64,
    pub outerwear_never_above: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        let settings = GenerationSettings::default();
        Self {
            seed: None,
            oversample: settings.oversample,
            accessory_threshold: settings.accessory_threshold,
            outerwear_always_below: settings.outerwear_always_below,
            outerwear_never_above: settings.outerwear_never_above,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weather_weight: f64,
    pub material_weight: f64,
    pub color_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let weights = ScoringWeights::default();
        Self {
            weather_weight: weights.weather,
            material_weight: weights.material,
            color_weight: weights.color,
        }
    }
}

/// Temperatures are °F.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub high: i32,
    pub low: i32,
    pub current: i32,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            high: 65,
            low: 50,
            current: 58,
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then
    /// `OUTFITTER__*` environment variables.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the default location is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(true),
            None => File::from(Self::config_path().as_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        let config = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("OUTFITTER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        let app: AppConfig = config
            .try_deserialize()
            .context("Invalid configuration")?;

        debug!(?app, "Configuration loaded");
        Ok(app)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.outfitter.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "outfitter", "outfitter")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".outfitter.toml"))
    }

    /// The configuration file in effect: `--config` if given, else the
    /// default location.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }

    /// Wardrobe file: `--wardrobe`, then `wardrobe.path`, then
    /// `wardrobe.toml` in the platform data dir.
    pub fn wardrobe_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.wardrobe.path.clone())
            .unwrap_or_else(|| {
                directories::ProjectDirs::from("com", "outfitter", "outfitter")
                    .map(|d| d.data_dir().join("wardrobe.toml"))
                    .unwrap_or_else(|| PathBuf::from("wardrobe.toml"))
            })
    }

    /// Settings handed to the generator.
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            oversample: self.generation.oversample,
            accessory_threshold: self.generation.accessory_threshold,
            outerwear_always_below: self.generation.outerwear_always_below,
            outerwear_never_above: self.generation.outerwear_never_above,
            weights: ScoringWeights {
                weather: self.scoring.weather_weight,
                material: self.scoring.material_weight,
                color: self.scoring.color_weight,
            },
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.weather.latitude, self.weather.longitude)
    }
}
