//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};
use outfitter_core::domain::{Category, Color, Formality, GarmentId, Material, Subcategory};
use uuid::Uuid;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "outfitter",
    bin_name = "outfitter",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Outfits picked from your own wardrobe for today's weather",
    long_about = "Outfitter keeps a list of the clothes you own and picks an outfit \
                  that suits the temperature, the occasion and itself.",
    after_help = "EXAMPLES:\n\
        \x20 outfitter wardrobe add -s jacket -f flex -p '#202020' -m leather\n\
        \x20 outfitter generate --formality informal --high 68 --low 50 --current 60\n\
        \x20 outfitter outfits list\n\
        \x20 outfitter completions bash > /usr/share/bash-completion/completions/outfitter",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Pick an outfit for the given weather and occasion.
    #[command(
        visible_alias = "g",
        about = "Generate an outfit",
        after_help = "EXAMPLES:\n\
            \x20 outfitter generate --formality formal\n\
            \x20 outfitter generate -f informal --high 85 --low 70 --current 80 --save\n\
            \x20 outfitter generate -f flex --seed 7 --format json"
    )]
    Generate(GenerateArgs),

    /// Manage the garments in your wardrobe.
    #[command(about = "Manage your wardrobe", subcommand, visible_alias = "w")]
    Wardrobe(WardrobeCommands),

    /// Manage saved outfits.
    #[command(about = "Manage saved outfits", subcommand)]
    Outfits(OutfitsCommands),

    /// Initialise an Outfitter configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 outfitter init            # default location\n\
            \x20 outfitter init --force    # overwrite an existing file\n\
            \x20 outfitter -c ./outfitter.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 outfitter completions bash > ~/.bash_completion.d/outfitter\n\
            \x20 outfitter completions zsh  > ~/.zfunc/_outfitter\n\
            \x20 outfitter completions fish > ~/.config/fish/completions/outfitter.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Outfitter configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 outfitter config get generation.seed\n\
            \x20 outfitter config list\n\
            \x20 outfitter config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `outfitter generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// How dressy the outfit should be.
    #[arg(
        short = 'f',
        long = "formality",
        value_enum,
        value_name = "FORMALITY",
        help = "Requested formality"
    )]
    pub formality: FormalityArg,

    /// Forecast high, °F.
    #[arg(long = "high", value_name = "DEG_F", allow_negative_numbers = true)]
    pub high: Option<i32>,

    /// Forecast low, °F.
    #[arg(long = "low", value_name = "DEG_F", allow_negative_numbers = true)]
    pub low: Option<i32>,

    /// Temperature right now, °F.
    #[arg(long = "current", value_name = "DEG_F", allow_negative_numbers = true)]
    pub current: Option<i32>,

    /// Seed for a reproducible pick.
    #[arg(long = "seed", value_name = "N", help = "Random seed")]
    pub seed: Option<u64>,

    /// Store the outfit in the saved-outfit list.
    #[arg(short = 's', long = "save", help = "Save the generated outfit")]
    pub save: bool,

    /// Output format; defaults to the global output format.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ListFormat>,
}

// ── wardrobe ──────────────────────────────────────────────────────────────────

/// Subcommands for `outfitter wardrobe`.
#[derive(Debug, Subcommand)]
pub enum WardrobeCommands {
    /// Add a garment.
    #[command(after_help = "EXAMPLES:\n\
        \x20 outfitter wardrobe add -s long-sleeve -f formal -p '#ffffff' -m cotton\n\
        \x20 outfitter wardrobe add -s scarf -f flex -p '#a01010' -a '#ffffff' -m wool")]
    Add(AddGarmentArgs),

    /// List garments.
    #[command(visible_alias = "ls")]
    List(ListGarmentsArgs),

    /// Remove a garment by id.
    #[command(visible_alias = "rm")]
    Remove {
        /// Garment id, as shown by `wardrobe list`.
        #[arg(value_name = "ID")]
        id: GarmentId,
    },
}

/// Arguments for `outfitter wardrobe add`.
#[derive(Debug, Args)]
pub struct AddGarmentArgs {
    /// Category; inferred from the subcategory when omitted.
    #[arg(long = "category", value_enum, help = "Garment category")]
    pub category: Option<CategoryArg>,

    /// Subcategory, e.g. long-sleeve, pants, boot, dress, jacket, scarf.
    #[arg(
        short = 's',
        long = "subcategory",
        value_name = "SUBCATEGORY",
        help = "Garment subcategory (long-sleeve, short-sleeve, no-sleeve, skirt, pants, \
                shorts, sneaker, boot, sandal, dress, suit, romper, sweatshirt, jacket, \
                cardigan, headwear, scarf, bag)"
    )]
    pub subcategory: Subcategory,

    /// Formality of the garment.
    #[arg(short = 'f', long = "formality", value_enum, help = "Garment formality")]
    pub formality: FormalityArg,

    /// Main color as `#rrggbb`.
    #[arg(short = 'p', long = "primary", value_name = "#RRGGBB", help = "Primary color")]
    pub primary: Color,

    /// Accent color as `#rrggbb`.
    #[arg(short = 'a', long = "accent", value_name = "#RRGGBB", help = "Accent color")]
    pub accent: Option<Color>,

    /// Material, e.g. cotton, leather, denim, nylon, fur, spandex, other.
    #[arg(
        short = 'm',
        long = "material",
        value_name = "MATERIAL",
        help = "Garment material (wool-cotton, plastic-nylon, leather, denim, soft-fur, \
                stretchy-spandex, not-applicable)"
    )]
    pub material: Material,
}

/// Arguments for `outfitter wardrobe list`.
#[derive(Debug, Args)]
pub struct ListGarmentsArgs {
    /// Only show one category.
    #[arg(long = "category", value_enum, help = "Filter by category")]
    pub category: Option<CategoryArg>,

    /// Output format; defaults to the global output format.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ListFormat>,
}

// ── outfits ───────────────────────────────────────────────────────────────────

/// Subcommands for `outfitter outfits`.
#[derive(Debug, Subcommand)]
pub enum OutfitsCommands {
    /// List saved outfits, oldest first.
    #[command(visible_alias = "ls")]
    List {
        /// Output format; defaults to the global output format.
        #[arg(long = "format", value_enum, help = "Output format")]
        format: Option<ListFormat>,
    },

    /// Remove a saved outfit.
    #[command(visible_alias = "rm")]
    Remove {
        /// Saved outfit id, as shown by `outfits list`.
        #[arg(value_name = "ID")]
        id: Uuid,
    },
}

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// JSON document.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `outfitter init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `outfitter completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `outfitter config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `scoring.color_weight`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Formality accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormalityArg {
    Formal,
    /// Also accepted as `casual`.
    #[value(alias = "casual")]
    Informal,
    /// Eligible under any requested formality.
    Flex,
}

impl From<FormalityArg> for Formality {
    fn from(arg: FormalityArg) -> Self {
        match arg {
            FormalityArg::Formal => Self::Formal,
            FormalityArg::Informal => Self::Informal,
            FormalityArg::Flex => Self::Flex,
        }
    }
}

/// Garment categories accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CategoryArg {
    Top,
    Bottom,
    #[value(alias = "shoes")]
    Shoe,
    #[value(alias = "fullbody")]
    FullBody,
    Outerwear,
    Accessory,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Top => Self::Top,
            CategoryArg::Bottom => Self::Bottom,
            CategoryArg::Shoe => Self::Shoe,
            CategoryArg::FullBody => Self::FullBody,
            CategoryArg::Outerwear => Self::Outerwear,
            CategoryArg::Accessory => Self::Accessory,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
