//! Harmonies command: list the available harmony rules.

use crate::cli::common::{print_json, CliResult};
use crate::models::HarmonyRule;
use clap::Args;
use serde::Serialize;

/// List harmony rules
#[derive(Debug, Clone, Default, Args)]
pub struct HarmoniesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct HarmonyItem {
    name: &'static str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct HarmoniesResponse {
    harmonies: Vec<HarmonyItem>,
    count: usize,
}

impl HarmoniesArgs {
    /// Execute the harmonies command
    pub fn execute(&self) -> CliResult<()> {
        let harmonies: Vec<HarmonyItem> = HarmonyRule::all()
            .iter()
            .map(|rule| HarmonyItem {
                name: rule.name(),
                description: rule.description(),
            })
            .collect();

        if self.json {
            let count = harmonies.len();
            print_json(&HarmoniesResponse { harmonies, count })?;
        } else {
            let default = HarmonyRule::default();
            for item in &harmonies {
                let marker = if item.name == default.name() {
                    " (default)"
                } else {
                    ""
                };
                println!("{:<20} {}{}", item.name, item.description, marker);
            }
        }

        Ok(())
    }
}
