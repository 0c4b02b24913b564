//! CLI command handlers for Hue Harmony.
//!
//! Every subcommand is an `Args` struct with an `execute()` method returning
//! [`CliResult`]. Running the binary without a subcommand generates a palette.

pub mod common;
pub mod config;
pub mod convert;
pub mod export;
pub mod generate;
pub mod harmonies;
pub mod inspect;

use clap::{Parser, Subcommand};

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use export::ExportArgs;
pub use generate::{GenerateArgs, PaletteOptions};
pub use harmonies::HarmoniesArgs;
pub use inspect::InspectArgs;

/// Hue Harmony - color palettes from harmony rules
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a palette and print its swatches
    Generate(GenerateArgs),
    /// Generate a palette and write it as JSON
    Export(ExportArgs),
    /// Validate and display an exported palette file
    Inspect(InspectArgs),
    /// Convert an HSL color to hex
    Convert(ConvertArgs),
    /// List harmony rules
    Harmonies(HarmoniesArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Cli {
    /// Runs the selected subcommand, `generate` when none is given.
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            Some(Command::Generate(args)) => args.execute(),
            Some(Command::Export(args)) => args.execute(),
            Some(Command::Inspect(args)) => args.execute(),
            Some(Command::Convert(args)) => args.execute(),
            Some(Command::Harmonies(args)) => args.execute(),
            Some(Command::Config(args)) => args.execute(),
            None => GenerateArgs::default().execute(),
        }
    }
}
