//! Generation orchestrator: project configuration in, complete theme out.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::contrast::enforce_contrast;
use super::harmonize::harmonize;
use super::settings::{assemble_theme_json, ThemeJson};
use crate::config::GeneratorConfig;
use crate::models::{Palette, ProjectConfig};
use crate::patterns::{compose_patterns, front_page_template, Pattern};

/// A complete generated theme: settings document, block patterns, and the
/// front-page template body. Immutable; one fresh value per generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedTheme {
    /// The theme.json document.
    pub theme_json: ThemeJson,
    /// The six block patterns.
    pub patterns: Vec<Pattern>,
    /// Newline-joined front-page section references.
    pub template_front: String,
}

/// An externally produced theme candidate (e.g. from the AI service),
/// structurally identical to [`GeneratedTheme`]. It is only ever accepted
/// after locked-color re-enforcement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThemeOverride {
    /// Candidate theme.json document.
    pub theme_json: ThemeJson,
    /// Candidate patterns.
    pub patterns: Vec<Pattern>,
    /// Candidate front-page template.
    pub template_front: String,
}

/// Parses an untrusted JSON value into a theme override.
///
/// Invalid shapes collapse to `None` instead of failing: a malformed
/// override must degrade to the deterministic pipeline, never abort a
/// generation run.
#[must_use]
pub fn parse_override(value: serde_json::Value) -> Option<ThemeOverride> {
    match serde_json::from_value::<ThemeOverride>(value) {
        Ok(theme_override) => Some(theme_override),
        Err(err) => {
            warn!(error = %err, "discarding malformed theme override");
            None
        }
    }
}

/// The generation pipeline, parameterized by the engine tunables.
#[derive(Debug, Clone, Copy)]
pub struct ThemeGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> ThemeGenerator<'a> {
    /// Creates a generator with the given tunables.
    #[must_use]
    pub const fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates a theme for the project.
    ///
    /// With no override, runs the deterministic pipeline: harmonize the
    /// palette toward the primary color, enforce text contrast, assemble
    /// theme.json, compose the patterns, and sequence the front page.
    ///
    /// With an override, the candidate is accepted wholesale after every
    /// locked token of the project palette has been force-written over the
    /// matching slug in the candidate's palette. That re-enforcement is
    /// unconditional: no override may change a locked color.
    ///
    /// Never fails for a structurally valid project.
    #[must_use]
    pub fn generate(
        &self,
        project: &ProjectConfig,
        theme_override: Option<ThemeOverride>,
    ) -> GeneratedTheme {
        if let Some(candidate) = theme_override {
            return self.accept_override(project, candidate);
        }

        debug!(project = %project.name, "running deterministic generation");

        let primary = project
            .palette
            .color_of("primary")
            .unwrap_or(crate::patterns::defaults::PRIMARY_COLOR)
            .to_string();

        let harmonized = harmonize(&project.palette, &primary, self.config.blend_weight);
        let enforced = enforce_contrast(
            &harmonized,
            self.config.target_contrast,
            self.config.shade_step,
        );

        let theme_json = assemble_theme_json(&enforced, &project.heading_font, &project.body_font);
        let patterns = compose_patterns(project, &enforced, chrono::Utc::now().year());
        let template_front = front_page_template(&project.layout.effective_sections());

        GeneratedTheme {
            theme_json,
            patterns,
            template_front,
        }
    }

    fn accept_override(
        &self,
        project: &ProjectConfig,
        mut candidate: ThemeOverride,
    ) -> GeneratedTheme {
        info!(project = %project.name, "accepting external theme override");
        apply_locked_colors(&mut candidate.theme_json, &project.palette);

        GeneratedTheme {
            theme_json: candidate.theme_json,
            patterns: candidate.patterns,
            template_front: candidate.template_front,
        }
    }
}

/// Force-writes every locked palette token over the matching slug in the
/// candidate's preset palette. Candidate slugs without a locked counterpart
/// are left untouched.
fn apply_locked_colors(candidate: &mut ThemeJson, palette: &Palette) {
    for token in palette.tokens().iter().filter(|token| token.locked) {
        if let Some(entry) = candidate
            .settings
            .color
            .palette
            .iter_mut()
            .find(|entry| entry.slug == token.slug)
        {
            if entry.color != token.color {
                debug!(slug = %token.slug, "restoring locked color over override");
            }
            entry.color.clone_from(&token.color);
        }
    }
}
