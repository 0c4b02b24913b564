//! Inspect command for reading back exported palette files.

use crate::cli::common::{print_json, CliError, CliResult, ColorItem};
use crate::cli::generate::print_palette;
use crate::export::PaletteExport;
use crate::models::{HarmonyRule, Palette};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Validate and display an exported palette file
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to a palette JSON file
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response for inspect
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InspectResponse {
    name: String,
    /// As stored in the file
    harmony_type: String,
    /// Rule the stored name resolves to
    rule: HarmonyRule,
    timestamp: String,
    colors: Vec<ColorItem>,
}

impl InspectResponse {
    fn new(document: PaletteExport, palette: &Palette) -> Self {
        Self {
            name: document.name,
            harmony_type: document.harmony_type,
            rule: palette.rule(),
            timestamp: document.timestamp,
            colors: palette
                .iter()
                .enumerate()
                .map(|(index, color)| ColorItem::new(index + 1, color))
                .collect(),
        }
    }
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        if !self.file.exists() {
            return Err(CliError::io(format!(
                "Palette file not found: {}",
                self.file.display()
            )));
        }

        let content = std::fs::read_to_string(&self.file)
            .map_err(|e| CliError::io(format!("Failed to read palette file: {e}")))?;

        let document = PaletteExport::from_json(&content)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        let palette = document
            .to_palette()
            .map_err(|e| CliError::validation(format!("Invalid palette: {e:#}")))?;

        if self.json {
            print_json(&InspectResponse::new(document, &palette))?;
        } else {
            println!("Name: {}", document.name);
            println!("Harmony type: {}", document.harmony_type);
            println!("Created: {}", document.timestamp);
            println!();
            print_palette(&palette);
        }

        Ok(())
    }
}
