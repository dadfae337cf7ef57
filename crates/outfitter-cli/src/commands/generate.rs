//! Implementation of the `outfitter generate` command.
//!
//! Responsibility: resolve the weather and generation settings from flags
//! and config, call the core outfit service, and display the result.

use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use outfitter_adapters::FixedWeather;
use outfitter_core::{
    application::OutfitService,
    domain::{Formality, Outfit, WeatherSnapshot},
};

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// JSON shape of a generated outfit.
#[derive(Debug, Serialize)]
struct GenerateReport<'a> {
    formality: Formality,
    weather: &'a WeatherSnapshot,
    outfit: &'a Outfit,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved: Option<Uuid>,
}

/// Execute the `outfitter generate` command.
#[instrument(skip_all, fields(formality = ?args.formality))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let closet = super::open_closet(&global, &config)?;
    let location = config.location();
    let weather = resolve_weather(&args, &config);
    let shown = weather.snapshot().clone().at(location);

    let service = OutfitService::new(
        Box::new(closet.clone()),
        Box::new(closet),
        Box::new(weather),
    )
    .with_settings(config.generation_settings())
    .with_seed(args.seed.or(config.generation.seed));

    let formality = Formality::from(args.formality);
    let outfit = service.generate(location, formality)?;
    info!(garments = outfit.garments().count(), "Outfit generated");

    let saved = if args.save {
        Some(service.save(&outfit)?.id)
    } else {
        None
    };

    if output.wants_json(args.format) {
        return output.json(&GenerateReport {
            formality,
            weather: &shown,
            outfit: &outfit,
            saved,
        });
    }

    output.header(&format!(
        "{} outfit for {}",
        capitalise(formality.as_str()),
        OutputManager::weather_line(&shown)
    ))?;

    if outfit.is_empty() {
        output.warning("Nothing in the wardrobe suits this request")?;
        output.info("Add garments with `outfitter wardrobe add`")?;
    } else {
        output.outfit(&outfit)?;
    }

    if let Some(id) = saved {
        output.success(&format!("Saved outfit {id}"))?;
    }

    Ok(())
}

/// Flags win over the `[weather]` config section, per temperature.
fn resolve_weather(args: &GenerateArgs, config: &AppConfig) -> FixedWeather {
    FixedWeather::from_temperatures(
        args.high.unwrap_or(config.weather.high),
        args.low.unwrap_or(config.weather.low),
        args.current.unwrap_or(config.weather.current),
    )
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
