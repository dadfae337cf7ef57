//! `outfitter wardrobe`: add, list and remove garments.

use tracing::instrument;

use outfitter_core::{
    application::WardrobeService,
    domain::{Category, NewGarment, Palette},
};

use crate::{
    cli::{AddGarmentArgs, GlobalArgs, ListGarmentsArgs, WardrobeCommands},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Dispatch to the correct wardrobe subcommand.
#[instrument(skip_all)]
pub fn execute(
    cmd: WardrobeCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = WardrobeService::new(Box::new(super::open_closet(&global, &config)?));

    match cmd {
        WardrobeCommands::Add(args) => {
            let garment = service.add(new_garment(args))?;
            if output.wants_json(None) {
                return output.json(&garment);
            }
            output.success(&format!("Added {}", output.garment_line(&garment)))?;
        }

        WardrobeCommands::List(args) => list(&service, args, &output)?,

        WardrobeCommands::Remove { id } => {
            let garment = service.remove(id)?;
            output.success(&format!("Removed {}", output.garment_line(&garment)))?;
        }
    }

    Ok(())
}

fn list(
    service: &WardrobeService,
    args: ListGarmentsArgs,
    output: &OutputManager,
) -> CliResult<()> {
    let wanted = args.category.map(Category::from);
    let garments: Vec<_> = service
        .list()?
        .into_iter()
        .filter(|g| wanted.is_none_or(|category| g.category == category))
        .collect();

    if output.wants_json(args.format) {
        return output.json(&garments);
    }

    if garments.is_empty() {
        output.info("No garments found. Add one with `outfitter wardrobe add`")?;
        return Ok(());
    }

    output.header(&format!("Wardrobe ({} garments):", garments.len()))?;
    for garment in &garments {
        output.print(&format!("  {}", output.garment_line(garment)))?;
    }
    Ok(())
}

/// Category defaults to the one the subcategory belongs to; a contradicting
/// `--category` is left for the validator to reject.
fn new_garment(args: AddGarmentArgs) -> NewGarment {
    let palette = match args.accent {
        Some(accent) => Palette::with_accent(args.primary, accent),
        None => Palette::solid(args.primary),
    };

    NewGarment {
        category: args
            .category
            .map_or_else(|| args.subcategory.category(), Category::from),
        subcategory: args.subcategory,
        formality: args.formality.into(),
        palette,
        material: args.material,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{CategoryArg, FormalityArg};
    use outfitter_core::domain::{Color, Formality, Material, Subcategory};

    fn add_args(category: Option<CategoryArg>, subcategory: Subcategory) -> AddGarmentArgs {
        AddGarmentArgs {
            category,
            subcategory,
            formality: FormalityArg::Formal,
            primary: Color::new(0.0, 0.0, 0.0),
            accent: Some(Color::new(1.0, 1.0, 1.0)),
            material: Material::WoolCotton,
        }
    }

    #[test]
    fn category_is_inferred_from_subcategory() {
        let garment = new_garment(add_args(None, Subcategory::Cardigan));
        assert_eq!(garment.category, Category::Outerwear);
        assert_eq!(garment.formality, Formality::Formal);
        assert_eq!(garment.palette.accent, Some(Color::new(1.0, 1.0, 1.0)));
    }

    #[test]
    fn explicit_category_is_kept() {
        let garment = new_garment(add_args(Some(CategoryArg::Top), Subcategory::Cardigan));
        assert_eq!(garment.category, Category::Top);
    }
}
