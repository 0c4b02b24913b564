//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::HarmonyRule;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Harmony rule used when none is given
    #[arg(long, value_name = "RULE")]
    default_harmony: Option<String>,

    /// Directory exported palettes are written to
    #[arg(long, value_name = "DIR", conflicts_with = "clear_output_dir")]
    output_dir: Option<PathBuf>,

    /// Export to the current directory again
    #[arg(long)]
    clear_output_dir: bool,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: Option<String>,
    generation: GenerationOutput,
    export: ExportOutput,
}

#[derive(Serialize, Debug)]
struct GenerationOutput {
    default_harmony: String,
}

#[derive(Serialize, Debug)]
struct ExportOutput {
    output_dir: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config_output(&config))?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.default_harmony.is_none() && self.output_dir.is_none() && !self.clear_output_dir {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --default-harmony, --output-dir, or --clear-output-dir",
            ));
        }

        let mut config = Config::load().unwrap_or_else(|_| Config::default());

        if let Some(name) = &self.default_harmony {
            let rule = HarmonyRule::from_name(name).ok_or_else(|| {
                let names: Vec<&str> = HarmonyRule::all().iter().map(|r| r.name()).collect();
                CliError::validation(format!(
                    "Unknown harmony rule '{name}'. Expected one of: {}",
                    names.join(", ")
                ))
            })?;
            config.generation.default_harmony = rule;
        }

        if let Some(path) = &self.output_dir {
            if !path.is_dir() {
                return Err(CliError::validation(format!(
                    "Export directory does not exist: {}",
                    path.display()
                )));
            }
            config.export.output_dir = Some(path.clone());
        }

        if self.clear_output_dir {
            config.export.output_dir = None;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn config_output(config: &Config) -> ConfigOutput {
    ConfigOutput {
        path: Config::config_file_path()
            .ok()
            .map(|p| p.to_string_lossy().to_string()),
        generation: GenerationOutput {
            default_harmony: config.generation.default_harmony.name().to_string(),
        },
        export: ExportOutput {
            output_dir: config
                .export
                .output_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("{APP_NAME} Configuration");
    println!("=========================");
    println!();

    if let Ok(path) = Config::config_file_path() {
        let state = if path.exists() { "" } else { " (not created yet)" };
        println!("File: {}{state}", path.display());
        println!();
    }

    println!("Generation:");
    println!(
        "  Default Harmony: {}",
        config.generation.default_harmony.name()
    );
    println!();

    println!("Export:");
    match &config.export.output_dir {
        Some(dir) => println!("  Output Directory: {}", dir.display()),
        None => println!("  Output Directory: (current directory)"),
    }
    println!();
}
