//! Palette inspection command.
//!
//! Shows the palette as the generation pipeline would produce it:
//! harmonized toward the primary color, with text tokens corrected for
//! contrast, alongside the contrast ratio of every token against the
//! resolved background.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::{contrast_ratio, ProjectConfig};
use crate::patterns::defaults;
use crate::theme::contrast::FALLBACK_BACKGROUND;
use crate::theme::{enforce_contrast, harmonize};
use clap::Args;
use std::path::PathBuf;

/// Show the harmonized palette with contrast ratios
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Path to project JSON file
    #[arg(short, long, value_name = "FILE")]
    pub project: PathBuf,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        let project = ProjectConfig::from_file(&self.project)
            .map_err(|e| CliError::io(format!("Failed to load project: {e:#}")))?;

        let config = Config::load().unwrap_or_default();
        let tunables = &config.generator;

        let primary = project
            .palette
            .color_of("primary")
            .unwrap_or(defaults::PRIMARY_COLOR)
            .to_string();

        let harmonized = harmonize(&project.palette, &primary, tunables.blend_weight);
        let final_palette = enforce_contrast(
            &harmonized,
            tunables.target_contrast,
            tunables.shade_step,
        );

        let background = final_palette
            .color_of("background")
            .unwrap_or(FALLBACK_BACKGROUND)
            .to_string();

        println!("Palette for '{}'", project.name);
        println!("Background reference: {background}");
        println!();
        println!(
            "{:<16} {:<10} {:<10} {:>9}  {}",
            "slug", "input", "output", "contrast", "flags"
        );

        for (original, generated) in project
            .palette
            .tokens()
            .iter()
            .zip(final_palette.tokens())
        {
            let ratio = contrast_ratio(&generated.color, &background);
            let mut flags = Vec::new();
            if original.locked {
                flags.push("locked");
            }
            if original.color != generated.color {
                flags.push("adjusted");
            }
            println!(
                "{:<16} {:<10} {:<10} {:>8.2}:1  {}",
                generated.slug,
                original.color,
                generated.color,
                ratio,
                flags.join(", ")
            );
        }

        Ok(())
    }
}
