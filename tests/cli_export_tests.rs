//! End-to-end tests for `hue-harmony export` and `inspect`.

use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

// ============================================================================
// Export Command Tests
// ============================================================================

#[test]
fn test_export_into_directory_uses_document_name() {
    let out_dir = TempDir::new().unwrap();
    let output = run(&[
        "export",
        "-H",
        "analogous",
        "-o",
        out_dir.path().to_str().unwrap(),
    ]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Export should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("✓ Exported palette to:"));

    let files: Vec<_> = fs::read_dir(out_dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&files[0]).unwrap()).unwrap();
    let name = document["name"].as_str().unwrap();
    assert!(name.starts_with("analogous_palette_"));
    assert_eq!(
        files[0].file_name().unwrap().to_string_lossy(),
        format!("{name}.json")
    );
}

#[test]
fn test_export_to_explicit_file() {
    let out_dir = TempDir::new().unwrap();
    let target = out_dir.path().join("brand.json");
    let output = run(&["export", "--seed", "1", "-o", target.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert!(target.exists());
}

#[test]
fn test_export_uses_configured_output_dir() {
    let config_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    let set = isolated_command(
        &["config", "set", "--output-dir", out_dir.path().to_str().unwrap()],
        config_dir.path(),
    )
    .output()
    .unwrap();
    assert_eq!(set.status.code(), Some(0));

    let output = isolated_command(&["export"], config_dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(fs::read_dir(out_dir.path()).unwrap().count(), 1);
}

#[test]
fn test_export_missing_directory_is_io_error() {
    let out_dir = TempDir::new().unwrap();
    let target = out_dir.path().join("missing").join("palette.json");
    let output = run(&["export", "-o", target.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error:"));
}

#[test]
fn test_export_then_inspect_round_trip() {
    let out_dir = TempDir::new().unwrap();
    let target = out_dir.path().join("palette.json");

    let generated = stdout_json(&run(&["generate", "-H", "complementary", "--seed", "5", "--json"]));
    let export = run(&[
        "export",
        "-H",
        "complementary",
        "--seed",
        "5",
        "-o",
        target.to_str().unwrap(),
    ]);
    assert_eq!(export.status.code(), Some(0));

    let inspected = run(&["inspect", "-f", target.to_str().unwrap(), "--json"]);
    assert_eq!(inspected.status.code(), Some(0));
    let result = stdout_json(&inspected);

    assert_eq!(result["harmonyType"], "complementary");
    let colors = result["colors"].as_array().unwrap();
    let expected = generated["colors"].as_array().unwrap();
    assert_eq!(colors.len(), 5);
    for (index, (color, original)) in colors.iter().zip(expected).enumerate() {
        assert_eq!(color["position"], index + 1);
        assert_eq!(color["hex"], original["hex"]);
        assert_eq!(color["hsl"], original["hsl"]);
    }
}

// ============================================================================
// Inspect Command Tests
// ============================================================================

#[test]
fn test_inspect_fixture_human_readable() {
    let (path, _temp_dir) = create_temp_palette_file(&test_export().to_json().unwrap());
    let output = run(&["inspect", "--file", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Name: complementary_palette_1735787045000"));
    assert!(stdout.contains("Created: 2025-01-02T03:04:05.000Z"));
    assert!(stdout.contains("#20dfdf"));
}

#[test]
fn test_inspect_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.json");
    let output = run(&["inspect", "-f", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Palette file not found"));
}

#[test]
fn test_inspect_invalid_json() {
    let (path, _temp_dir) = create_temp_palette_file("{ \"colors\": ");
    let output = run(&["inspect", "-f", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_inspect_tampered_hex() {
    let mut export = test_export();
    export.colors[3].hex = "#123456".to_string();
    let (path, _temp_dir) = create_temp_palette_file(&export.to_json().unwrap());

    let output = run(&["inspect", "-f", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid palette"), "stderr: {stderr}");
}

#[test]
fn test_inspect_wrong_color_count() {
    let mut export = test_export();
    export.colors.truncate(3);
    let (path, _temp_dir) = create_temp_palette_file(&export.to_json().unwrap());

    let output = run(&["inspect", "-f", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("exactly 5 colors"));
}
