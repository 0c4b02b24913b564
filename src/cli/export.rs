//! Export command for writing a palette as a JSON document.

use crate::cli::common::{CliError, CliResult};
use crate::cli::generate::{load_config, PaletteOptions};
use crate::export::PaletteExport;
use clap::Args;
use std::path::{Path, PathBuf};

/// Generate a palette and export it as JSON
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub options: PaletteOptions,

    /// Output file or directory (defaults to [name].json in the configured
    /// export directory, or the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let target = self.get_output_target();
        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(CliError::io(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        let palette = self.options.palette();
        let document = PaletteExport::new(&palette);

        let path = document
            .write(&target)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        println!("✓ Exported palette to: {}", path.display());

        Ok(())
    }

    /// Get the output target (user-specified, configured directory, or current directory)
    fn get_output_target(&self) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        load_config()
            .export
            .output_dir
            .unwrap_or_else(|| Path::new(".").to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_output_target_custom() {
        let custom_path = PathBuf::from("/tmp/my_palette.json");
        let args = ExportArgs {
            options: PaletteOptions::default(),
            output: Some(custom_path.clone()),
        };

        assert_eq!(args.get_output_target(), custom_path);
    }

    #[test]
    fn test_execute_writes_into_directory() {
        let temp_dir = TempDir::new().unwrap();
        let args = ExportArgs {
            options: PaletteOptions {
                harmony: Some("analogous".to_string()),
                seed: Some(5),
            },
            output: Some(temp_dir.path().to_path_buf()),
        };

        args.execute().unwrap();

        let written: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(written.len(), 1);
        assert!(written[0].starts_with("analogous_palette_"));
        assert!(written[0].ends_with(".json"));
    }

    #[test]
    fn test_execute_missing_parent_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let args = ExportArgs {
            options: PaletteOptions::default(),
            output: Some(temp_dir.path().join("nope").join("palette.json")),
        };

        let err = args.execute().unwrap_err();
        assert_eq!(err.code, crate::cli::ExitCode::Io);
    }
}
