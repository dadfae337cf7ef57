//! One module per subcommand.  Each `execute` turns parsed arguments into
//! service calls and hands the results to the [`OutputManager`].
//!
//! [`OutputManager`]: crate::output::OutputManager

use tracing::debug;

use outfitter_adapters::TomlCloset;

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult};

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod outfits;
pub mod wardrobe;

/// Open the wardrobe file chosen by `--wardrobe` or the configuration.
fn open_closet(global: &GlobalArgs, config: &AppConfig) -> CliResult<TomlCloset> {
    let path = config.wardrobe_path(global.wardrobe.as_deref());
    debug!(path = %path.display(), "Opening wardrobe");
    Ok(TomlCloset::open(path)?)
}
