//! Convert command: HSL components to hex and CSS notation.

use crate::cli::common::{print_json, swatch, CliError, CliResult};
use crate::models::Color;
use clap::Args;
use serde::Serialize;

/// Convert an HSL color to hex
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Hue in degrees (0-359)
    #[arg(long)]
    pub hue: u16,

    /// Saturation percent (0-100)
    #[arg(long)]
    pub saturation: u8,

    /// Lightness percent (0-100)
    #[arg(long)]
    pub lightness: u8,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response for convert
#[derive(Debug, Serialize)]
struct ConvertResponse {
    hex: String,
    hsl: String,
    rgb: [u8; 3],
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        let color = self.color()?;
        let rgb = color.to_rgb();

        if self.json {
            print_json(&ConvertResponse {
                hex: color.hex(),
                hsl: color.hsl(),
                rgb: [rgb.r, rgb.g, rgb.b],
            })?;
        } else {
            println!("{}  {}  {}", swatch(&color), color.hex(), color.hsl());
        }

        Ok(())
    }

    fn color(&self) -> CliResult<Color> {
        if self.hue >= 360 {
            return Err(CliError::validation(format!(
                "Hue {} out of range. Expected 0-359",
                self.hue
            )));
        }
        if self.saturation > 100 {
            return Err(CliError::validation(format!(
                "Saturation {} out of range. Expected 0-100",
                self.saturation
            )));
        }
        if self.lightness > 100 {
            return Err(CliError::validation(format!(
                "Lightness {} out of range. Expected 0-100",
                self.lightness
            )));
        }

        Ok(Color::new(self.hue, self.saturation, self.lightness))
    }
}
