//! Validation command for project files.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::ProjectConfig;
use crate::theme::ProjectValidator;
use clap::Args;
use std::path::PathBuf;

/// Validate a project file for errors and warnings
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to project JSON file
    #[arg(short, long, value_name = "FILE")]
    pub project: PathBuf,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let project = ProjectConfig::from_file(&self.project)
            .map_err(|e| CliError::io(format!("Failed to load project: {e:#}")))?;

        let config = Config::load().unwrap_or_default();
        let report = ProjectValidator::new(&project, &config.generator).validate();

        if !report.format_message().is_empty() {
            println!("{}", report.format_message());
        }

        if !report.is_valid() {
            return Err(CliError::validation(format!(
                "{} error(s) found in {}",
                report.errors.len(),
                self.project.display()
            )));
        }

        if self.strict && !report.warnings.is_empty() {
            return Err(CliError::validation(format!(
                "{} warning(s) found in {} (strict mode)",
                report.warnings.len(),
                self.project.display()
            )));
        }

        println!("✓ Project '{}' is valid", project.name);
        Ok(())
    }
}
