//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use hue_harmony::export::PaletteExport;
use hue_harmony::models::{Color, HarmonyRule, Palette};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the hue-harmony binary (set by cargo at compile time)
pub fn hue_harmony_bin() -> &'static str {
    env!("CARGO_BIN_EXE_hue-harmony")
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to several commands to share configuration
/// within one test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(hue_harmony_bin());
    cmd.env("HUE_HARMONY_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the binary with a fresh, empty config directory.
pub fn run(args: &[&str]) -> Output {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, config_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Parses stdout as JSON, failing the test with stderr on error.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}). stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

/// A hand-built complementary palette with known hex values.
pub fn test_palette() -> Palette {
    Palette::new(
        HarmonyRule::Complementary,
        [
            Color::new(180, 75, 50),
            Color::new(0, 75, 50),
            Color::new(180, 62, 41),
            Color::new(180, 88, 60),
            Color::new(0, 30, 25),
        ],
    )
}

/// Export document for [`test_palette`] with a deterministic timestamp.
pub fn test_export() -> PaletteExport {
    let created = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    PaletteExport::at(&test_palette(), created)
}

/// Writes `json` to a palette file in a temp directory and returns the path.
pub fn create_temp_palette_file(json: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("palette.json");
    fs::write(&path, json).expect("Failed to write palette file");
    (path, temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_export_is_valid() {
        let export = test_export();
        assert_eq!(export.name, "complementary_palette_1735787045000");
        assert_eq!(export.to_palette().unwrap(), test_palette());
    }
}
