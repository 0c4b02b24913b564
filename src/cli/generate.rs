//! Generate command: print a fresh palette.

use crate::cli::common::{print_json, swatch, CliError, CliResult};
use crate::clipboard::{copy_swatch, SystemClipboard};
use crate::config::Config;
use crate::export::PaletteExport;
use crate::generator::PaletteGenerator;
use crate::models::{Palette, PALETTE_SIZE};
use clap::Args;
use tracing::warn;

/// Harmony and seed options shared by commands that generate palettes.
#[derive(Debug, Clone, Default, Args)]
pub struct PaletteOptions {
    /// Harmony rule: monochromatic, analogous, complementary,
    /// split-complementary, triadic, tetradic or mixed (unknown names use mixed)
    #[arg(short = 'H', long, value_name = "RULE")]
    pub harmony: Option<String>,

    /// Seed for a reproducible palette
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

impl PaletteOptions {
    /// Generates a palette from these options.
    ///
    /// Without `--harmony` the configured default rule is used.
    pub fn palette(&self) -> Palette {
        let selector = match &self.harmony {
            Some(harmony) => harmony.clone(),
            None => load_config().generation.default_harmony.name().to_string(),
        };

        match self.seed {
            Some(seed) => PaletteGenerator::seeded(seed).generate_from_selector(&selector),
            None => PaletteGenerator::new().generate_from_selector(&selector),
        }
    }
}

/// Loads the user configuration, falling back to defaults with a warning.
pub(crate) fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {e:#}");
        Config::default()
    })
}

/// Generate a color palette and print its swatches
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub options: PaletteOptions,

    /// Output the export document as JSON
    #[arg(long)]
    pub json: bool,

    /// Copy the hex code of swatch N (1-5) to the clipboard (on Linux the
    /// command waits until another program takes the clipboard over)
    #[arg(long, value_name = "N")]
    pub copy: Option<usize>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        if let Some(position) = self.copy {
            if !(1..=PALETTE_SIZE).contains(&position) {
                return Err(CliError::validation(format!(
                    "Invalid swatch {position}. Expected 1-{PALETTE_SIZE}"
                )));
            }
        }

        let palette = self.options.palette();

        if self.json {
            print_json(&PaletteExport::new(&palette))?;
        } else {
            print_palette(&palette);
        }

        if let Some(position) = self.copy {
            match copy_swatch(&palette, position, &mut SystemClipboard) {
                Ok(message) if self.json => eprintln!("{message}"),
                Ok(message) => println!("\n{message}"),
                Err(e) => {
                    warn!("Clipboard copy failed: {e:#}");
                    eprintln!("Warning: {e:#}");
                }
            }
        }

        Ok(())
    }
}

/// Prints a palette as numbered swatches.
pub fn print_palette(palette: &Palette) {
    println!("Palette ({}):", palette.rule());
    println!();
    for (index, color) in palette.iter().enumerate() {
        let marker = if index == 0 { "  base" } else { "" };
        println!(
            "  {}  {}  {}  {:<20}{}",
            index + 1,
            swatch(color),
            color.hex(),
            color.hsl(),
            marker
        );
    }
}
