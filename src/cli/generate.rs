//! Generate command for theme files.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export;
use crate::models::ProjectConfig;
use crate::theme::{parse_override, ProjectValidator, ThemeGenerator, ThemeOverride};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

/// Generate a WordPress block theme from a project file
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to project JSON file
    #[arg(short, long, value_name = "FILE")]
    pub project: PathBuf,

    /// Output directory for the theme (defaults to the configured theme
    /// directory plus a slug of the project name)
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Path to an externally produced theme override JSON file
    #[arg(long, value_name = "FILE")]
    pub override_file: Option<PathBuf>,

    /// Use stable timestamps for deterministic output (for testing)
    #[arg(long)]
    pub deterministic: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        // Load project
        let project = ProjectConfig::from_file(&self.project)
            .map_err(|e| CliError::io(format!("Failed to load project: {e:#}")))?;

        // Build config; an explicit override file enables the override path
        let mut config = Config::load().unwrap_or_default();
        if self.override_file.is_some() {
            config.generator.accept_overrides = true;
        }

        // Validate before generating
        let report = ProjectValidator::new(&project, &config.generator).validate();
        if !report.is_valid() {
            return Err(CliError::validation(format!(
                "Project validation failed:\n{}",
                report.format_message()
            )));
        }

        // Load override candidate; malformed input degrades to the
        // deterministic pipeline instead of failing the run
        let theme_override = if config.generator.accept_overrides {
            self.override_file
                .as_deref()
                .and_then(load_override_candidate)
        } else {
            None
        };

        // Generate
        let generator = ThemeGenerator::new(&config.generator);
        let theme = generator.generate(&project, theme_override);

        // Write theme directory
        let out_dir = self.resolve_out_dir(&config, &project);
        export::write_theme(&theme, &project, &out_dir)
            .map_err(|e| CliError::io(format!("Failed to write theme: {e:#}")))?;

        // Apply deterministic normalization if requested
        if self.deterministic {
            normalize_style_css(&out_dir)?;
        }

        println!("✓ Generated theme '{}'", project.name);
        println!("  Output: {}", out_dir.display());

        Ok(())
    }

    /// Output directory: either user-specified or derived from the config
    /// and the project name.
    fn resolve_out_dir(&self, config: &Config, project: &ProjectConfig) -> PathBuf {
        if let Some(ref dir) = self.out_dir {
            return dir.clone();
        }

        let slug = project.name.trim().to_lowercase().replace(' ', "-");
        config.output.theme_dir.join(slug)
    }
}

/// Reads and parses an override file, warning and returning `None` on any
/// failure so generation falls back to the deterministic path.
fn load_override_candidate(path: &Path) -> Option<ThemeOverride> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!(
                "⚠ Could not read override file {}: {err}; continuing without it",
                path.display()
            );
            return None;
        }
    };

    let value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            eprintln!(
                "⚠ Override file {} is not valid JSON: {err}; continuing without it",
                path.display()
            );
            return None;
        }
    };

    let candidate = parse_override(value);
    if candidate.is_none() {
        eprintln!(
            "⚠ Override file {} does not match the theme shape; continuing without it",
            path.display()
        );
    }
    candidate
}

/// Replaces the generation timestamp in the written style.css.
fn normalize_style_css(out_dir: &Path) -> CliResult<()> {
    let path = out_dir.join("style.css");
    let content = fs::read_to_string(&path)
        .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))?;
    fs::write(&path, export::normalize_for_deterministic(&content))
        .map_err(|e| CliError::io(format!("Failed to write {}: {e}", path.display())))?;
    Ok(())
}
