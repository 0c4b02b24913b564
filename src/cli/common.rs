//! Shared CLI types: errors, exit codes and JSON response shapes.

use serde::Serialize;
use std::fmt;

use crate::models::Color;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid input (arguments, file contents)
    Validation = 1,
    /// Filesystem or serialization failure
    Io = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process terminates with
    pub code: ExitCode,
    /// Message printed after `Error:`
    pub message: String,
}

impl CliError {
    /// Invalid user input, exits with code 1.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// I/O failure, exits with code 2.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Io,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Color record in JSON output.
#[derive(Debug, Serialize)]
pub struct ColorItem {
    /// 1-based swatch position
    pub position: usize,
    /// Lowercase `#rrggbb`
    pub hex: String,
    /// `hsl(H, S%, L%)`
    pub hsl: String,
    /// Hue in degrees
    pub hue: u16,
    /// Saturation percent
    pub saturation: u8,
    /// Lightness percent
    pub lightness: u8,
}

impl ColorItem {
    /// Builds the record for the swatch at 1-based `position`.
    #[must_use]
    pub fn new(position: usize, color: &Color) -> Self {
        Self {
            position,
            hex: color.hex(),
            hsl: color.hsl(),
            hue: color.hue(),
            saturation: color.saturation(),
            lightness: color.lightness(),
        }
    }
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Truecolor swatch block for terminal output.
#[must_use]
pub fn swatch(color: &Color) -> String {
    use crossterm::style::Stylize;

    "      "
        .on(color.to_rgb().to_terminal_color())
        .to_string()
}
