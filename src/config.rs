//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory resolution.
//! Engine tunables live here and are passed by reference into the generation
//! pipeline; nothing in the engine reads ambient global state.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Tunable parameters of the generation engine.
///
/// The defaults reproduce the stock pipeline: WCAG AA contrast for normal
/// text, a subtle 10% harmonization blend, and a 0.1 shade-search step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Target contrast ratio for text tokens (WCAG AA normal text is 4.5).
    #[serde(default = "default_target_contrast")]
    pub target_contrast: f64,
    /// Fraction of the primary color blended into unlocked palette entries.
    #[serde(default = "default_blend_weight")]
    pub blend_weight: f64,
    /// Step size of the darker/lighter shade search in the contrast corrector.
    #[serde(default = "default_shade_step")]
    pub shade_step: f64,
    /// Whether externally supplied theme overrides are accepted at all.
    #[serde(default)]
    pub accept_overrides: bool,
}

fn default_target_contrast() -> f64 {
    4.5
}

fn default_blend_weight() -> f64 {
    0.1
}

fn default_shade_step() -> f64 {
    0.1
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target_contrast: default_target_contrast(),
            blend_weight: default_blend_weight(),
            shade_step: default_shade_step(),
            accept_overrides: false,
        }
    }
}

impl GeneratorConfig {
    /// Validates tunable ranges.
    ///
    /// # Errors
    ///
    /// Returns an error when a tunable is outside its meaningful range.
    pub fn validate(&self) -> Result<()> {
        if !(1.0..=21.0).contains(&self.target_contrast) {
            anyhow::bail!(
                "target_contrast must be between 1.0 and 21.0, got {}",
                self.target_contrast
            );
        }
        if !(0.0..=1.0).contains(&self.blend_weight) {
            anyhow::bail!(
                "blend_weight must be between 0.0 and 1.0, got {}",
                self.blend_weight
            );
        }
        if self.shade_step <= 0.0 || self.shade_step > 0.5 {
            anyhow::bail!(
                "shade_step must be in (0.0, 0.5], got {}",
                self.shade_step
            );
        }
        Ok(())
    }
}

/// Output settings for written themes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default directory generated themes are written into.
    pub theme_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        let theme_dir = Config::config_dir()
            .map(|dir| dir.join("themes"))
            .unwrap_or_else(|_| PathBuf::from("themes"));
        Self { theme_dir }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Blocksmith/config.toml`
/// - macOS: `~/Library/Application Support/Blocksmith/config.toml`
/// - Windows: `%APPDATA%\Blocksmith\config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Engine tunables.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/Blocksmith/`
    /// - macOS: `~/Library/Application Support/Blocksmith/`
    /// - Windows: `%APPDATA%\Blocksmith\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("Blocksmith");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration. Loaded
    /// tunables are validated before the config is returned.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.generator.validate().context(format!(
            "Invalid generator settings in {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves the configuration to the config file, creating the config
    /// directory if needed.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let config_path = Self::config_file_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, content).context(format!(
            "Failed to write config file: {}",
            config_path.display()
        ))?;

        Ok(())
    }
}
