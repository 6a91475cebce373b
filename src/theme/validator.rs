//! Pre-generation validation of project configuration.
//!
//! Generation itself never fails, so validation is advisory: it surfaces
//! the problems the engine would otherwise paper over with defensive
//! defaults (unparseable colors, duplicate slugs, locked text that can
//! never become legible).

use regex::Regex;
use std::sync::OnceLock;

use crate::config::GeneratorConfig;
use crate::models::{contrast_ratio, ProjectConfig, RgbColor};
use crate::theme::contrast::FALLBACK_BACKGROUND;

/// Slug shape accepted by WordPress preset registration.
fn slug_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z][a-z0-9-]*$").expect("static slug pattern"))
}

/// Section names the template sequencer resolves without the generic
/// fallback.
const KNOWN_SECTIONS: [&str; 7] = [
    "header", "hero", "benefits", "about", "services", "contact", "footer",
];

/// Outcome of validating a project configuration.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Problems that make the configuration structurally wrong.
    pub errors: Vec<String>,
    /// Problems the engine will work around but the user should fix.
    pub warnings: Vec<String>,
    /// Observations that change behavior without being wrong.
    pub notes: Vec<String>,
}

impl ValidationReport {
    /// Whether the configuration has no errors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Formats the full report as display text, one finding per line.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut lines = Vec::new();
        for error in &self.errors {
            lines.push(format!("error: {error}"));
        }
        for warning in &self.warnings {
            lines.push(format!("warning: {warning}"));
        }
        for note in &self.notes {
            lines.push(format!("note: {note}"));
        }
        lines.join("\n")
    }
}

/// Validates a project configuration against the generation contract.
pub struct ProjectValidator<'a> {
    project: &'a ProjectConfig,
    config: &'a GeneratorConfig,
}

impl<'a> ProjectValidator<'a> {
    /// Creates a validator for the project with the given engine tunables.
    #[must_use]
    pub const fn new(project: &'a ProjectConfig, config: &'a GeneratorConfig) -> Self {
        Self { project, config }
    }

    /// Runs all checks and returns the combined report.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        if self.project.name.trim().is_empty() {
            report.errors.push("project name is empty".to_string());
        }

        self.check_palette(&mut report);
        self.check_layout(&mut report);

        report
    }

    fn check_palette(&self, report: &mut ValidationReport) {
        let palette = &self.project.palette;

        for slug in palette.duplicate_slugs() {
            report
                .errors
                .push(format!("palette slug '{slug}' appears more than once"));
        }

        for token in palette.tokens() {
            if !slug_pattern().is_match(&token.slug) {
                report.errors.push(format!(
                    "palette slug '{}' is not a valid preset slug (lowercase letters, digits, dashes)",
                    token.slug
                ));
            }
            if RgbColor::from_hex(&token.color).is_err() {
                report.warnings.push(format!(
                    "color '{}' of palette slug '{}' is not a 6-digit hex value; it will pass through generation unchanged",
                    token.color, token.slug
                ));
            }
        }

        if palette.get("primary").is_none() {
            report.notes.push(format!(
                "palette has no 'primary' token; the default primary {} will be used",
                crate::patterns::defaults::PRIMARY_COLOR
            ));
        }

        // Locked text can never be corrected; call out permanent violations.
        let background = palette.color_of("background").unwrap_or(FALLBACK_BACKGROUND);
        for token in palette.tokens() {
            if token.locked && token.slug.contains("text") {
                let ratio = contrast_ratio(&token.color, background);
                if ratio < self.config.target_contrast {
                    report.warnings.push(format!(
                        "locked text color '{}' ({}) has contrast {:.2} against the background, below the {:.1} target, and cannot be auto-corrected",
                        token.slug, token.color, ratio, self.config.target_contrast
                    ));
                }
            }
        }
    }

    fn check_layout(&self, report: &mut ValidationReport) {
        for section in &self.project.layout.sections {
            if !KNOWN_SECTIONS.contains(&section.as_str()) {
                report.notes.push(format!(
                    "layout section '{section}' is not a built-in section; it will render as a generic pattern reference"
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColorToken, Palette};

    fn validate(project: &ProjectConfig) -> ValidationReport {
        let config = GeneratorConfig::default();
        ProjectValidator::new(project, &config).validate()
    }

    fn project_with_palette(tokens: Vec<ColorToken>) -> ProjectConfig {
        let mut project = ProjectConfig::new("Test");
        project.palette = Palette::new(tokens);
        project
    }

    #[test]
    fn test_clean_project_is_valid() {
        let project = project_with_palette(vec![
            ColorToken::new("primary", "#3b82f6"),
            ColorToken::new("background", "#ffffff"),
            ColorToken::new("text", "#1f2937"),
        ]);
        let report = validate(&project);
        assert!(report.is_valid(), "unexpected: {}", report.format_message());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_empty_name_is_error() {
        let project = ProjectConfig::new("  ");
        let report = validate(&project);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_duplicate_slug_is_error() {
        let project = project_with_palette(vec![
            ColorToken::new("primary", "#111111"),
            ColorToken::new("primary", "#222222"),
        ]);
        let report = validate(&project);
        assert!(!report.is_valid());
        assert!(report.format_message().contains("more than once"));
    }

    #[test]
    fn test_bad_slug_is_error() {
        let project = project_with_palette(vec![ColorToken::new("Primary Color", "#111111")]);
        let report = validate(&project);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_bad_hex_is_warning() {
        let project = project_with_palette(vec![ColorToken::new("accent", "bluish")]);
        let report = validate(&project);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_locked_illegible_text_is_warning() {
        let project = project_with_palette(vec![
            ColorToken::new("background", "#ffffff"),
            ColorToken {
                locked: true,
                ..ColorToken::new("text", "#ffffff")
            },
        ]);
        let report = validate(&project);
        assert!(report.is_valid());
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("cannot be auto-corrected")));
    }

    #[test]
    fn test_unlocked_illegible_text_is_not_warned() {
        // The pipeline fixes unlocked text automatically.
        let project = project_with_palette(vec![
            ColorToken::new("background", "#ffffff"),
            ColorToken::new("text", "#ffffff"),
        ]);
        let report = validate(&project);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_unknown_section_is_note() {
        let mut project = project_with_palette(vec![ColorToken::new("primary", "#3b82f6")]);
        project.layout.sections = vec!["hero".to_string(), "pricing".to_string()];
        let report = validate(&project);
        assert!(report.is_valid());
        assert!(report.notes.iter().any(|n| n.contains("'pricing'")));
    }
}
