//! `outfitter outfits`: list and remove saved outfits.

use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use outfitter_adapters::FixedWeather;
use outfitter_core::{
    application::{OutfitService, ResolvedOutfit},
    domain::{GarmentId, Outfit},
};

use crate::{
    cli::{GlobalArgs, OutfitsCommands},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// JSON shape of a saved outfit.
#[derive(Debug, Serialize)]
struct SavedOutfitView<'a> {
    id: Uuid,
    saved_at: DateTime<Utc>,
    outfit: &'a Outfit,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing: Vec<GarmentId>,
}

impl<'a> From<&'a ResolvedOutfit> for SavedOutfitView<'a> {
    fn from(resolved: &'a ResolvedOutfit) -> Self {
        Self {
            id: resolved.id,
            saved_at: resolved.saved_at,
            outfit: &resolved.outfit,
            missing: resolved.missing.clone(),
        }
    }
}

/// Dispatch to the correct outfits subcommand.
#[instrument(skip_all)]
pub fn execute(
    cmd: OutfitsCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let closet = super::open_closet(&global, &config)?;
    let weather = FixedWeather::from_temperatures(
        config.weather.high,
        config.weather.low,
        config.weather.current,
    );
    let service = OutfitService::new(Box::new(closet.clone()), Box::new(closet), Box::new(weather));

    match cmd {
        OutfitsCommands::List { format } => {
            let saved = service.saved()?;
            if output.wants_json(format) {
                let views: Vec<SavedOutfitView<'_>> = saved.iter().map(Into::into).collect();
                return output.json(&views);
            }
            show(&saved, &output)?;
        }

        OutfitsCommands::Remove { id } => {
            service.remove_saved(id)?;
            output.success(&format!("Removed saved outfit {id}"))?;
        }
    }

    Ok(())
}

fn show(saved: &[ResolvedOutfit], output: &OutputManager) -> CliResult<()> {
    if saved.is_empty() {
        output.info("No saved outfits. Keep one with `outfitter generate --save`")?;
        return Ok(());
    }

    for (n, resolved) in saved.iter().enumerate() {
        if n > 0 {
            output.print("")?;
        }
        let saved_at = resolved.saved_at.with_timezone(&Local);
        output.header(&format!(
            "{}  saved {}",
            resolved.id,
            saved_at.format("%Y-%m-%d %H:%M")
        ))?;
        output.outfit(&resolved.outfit)?;
        for id in &resolved.missing {
            output.warning(&format!("Garment #{id} is no longer in the wardrobe"))?;
        }
    }
    Ok(())
}
