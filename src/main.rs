//! Hue Harmony - color palette generator
//!
//! Generates harmonious five-color palettes, prints them as truecolor swatches
//! and exports them as JSON.

use clap::Parser;
use hue_harmony::cli::Cli;
use hue_harmony::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.code.into());
    }
}
