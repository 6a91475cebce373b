//! Project configuration: the immutable input snapshot for theme generation.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::{ContentConfig, FontConfig, LayoutConfig, Palette};

/// Everything the generator needs to produce a theme, assembled by the
/// editing layer over the project's lifetime and passed in as an immutable
/// snapshot. The engine never mutates it; each generation call produces a
/// fresh, independent result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project (and site) name.
    pub name: String,
    /// Business sector, free-form (e.g. "restaurant").
    #[serde(default)]
    pub sector: Option<String>,
    /// BCP 47 locale tag (e.g. "en-US").
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Brand color palette.
    #[serde(default)]
    pub palette: Palette,
    /// Heading typography.
    #[serde(default)]
    pub heading_font: FontConfig,
    /// Body typography.
    #[serde(default)]
    pub body_font: FontConfig,
    /// Page copy.
    #[serde(default)]
    pub content: ContentConfig,
    /// Front-page section order.
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Relative path of the hero background image, if one was uploaded.
    #[serde(default)]
    pub hero_image_path: Option<String>,
}

fn default_locale() -> String {
    "en-US".to_string()
}

impl ProjectConfig {
    /// Creates a minimal project with the given name and empty configuration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sector: None,
            locale: default_locale(),
            palette: Palette::default(),
            heading_font: FontConfig::default(),
            body_font: FontConfig::default(),
            content: ContentConfig::default(),
            layout: LayoutConfig::default(),
            hero_image_path: None,
        }
    }

    /// Loads a project configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid project
    /// JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read project file {}", path.display()))?;
        let project: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse project file {}", path.display()))?;
        Ok(project)
    }
}
