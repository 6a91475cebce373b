//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use blocksmith::config::GeneratorConfig;
use blocksmith::models::{
    Benefit, ColorToken, ContactInfo, ContentConfig, FontConfig, LayoutConfig, Palette,
    ProjectConfig,
};
use blocksmith::theme::{GeneratedTheme, ThemeGenerator};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a basic test project with the conventional palette and some copy.
pub fn test_project_basic() -> ProjectConfig {
    let mut project = ProjectConfig::new("Fixture Bakery");
    project.sector = Some("food".to_string());
    project.palette = Palette::new(vec![
        ColorToken::new("primary", "#3b82f6"),
        ColorToken::new("secondary", "#e2e8f0"),
        ColorToken::new("accent", "#f59e0b"),
        ColorToken::new("neutral", "#9ca3af"),
        ColorToken::new("background", "#ffffff"),
        ColorToken::new("text", "#1f2937"),
    ]);
    project.heading_font = FontConfig::new("Inter", "Inter, system-ui, sans-serif");
    project.body_font = FontConfig::new("Inter", "Inter, system-ui, sans-serif");
    project.content = ContentConfig {
        headline: Some("Bread worth waking up for".to_string()),
        benefits: vec![
            Benefit::new("Fresh Daily", "Baked every morning before sunrise."),
            Benefit::new("Local Grain", "Milled within fifty kilometers."),
        ],
        cta: Some("Visit us".to_string()),
        contact: ContactInfo {
            phone: Some("+49 30 555 0100".to_string()),
            whatsapp: None,
            address: Some("Bäckerstr. 7, Berlin".to_string()),
        },
    };
    project.layout = LayoutConfig::new(
        ["header", "hero", "benefits", "about", "contact", "footer"]
            .into_iter()
            .map(String::from)
            .collect(),
    );
    project
}

/// Creates a project whose unlocked text color violates contrast.
pub fn test_project_white_on_white() -> ProjectConfig {
    let mut project = ProjectConfig::new("Contrast Case");
    project.palette = Palette::new(vec![
        ColorToken::new("primary", "#3b82f6"),
        ColorToken::new("background", "#ffffff"),
        ColorToken::new("text", "#ffffff"),
    ]);
    project
}

/// Writes a project to a temp file, returning the path and its guard.
pub fn create_temp_project_file(project: &ProjectConfig) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("project.json");
    let json = serde_json::to_string_pretty(project).expect("Failed to serialize project");
    fs::write(&path, json).expect("Failed to write project file");
    (path, dir)
}

/// Writes raw content to a temp file, returning the path and its guard.
pub fn create_temp_file(name: &str, content: &str) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    (path, dir)
}

/// Generates a theme for the project with default tunables.
pub fn generate_theme(project: &ProjectConfig) -> GeneratedTheme {
    let config = GeneratorConfig::default();
    ThemeGenerator::new(&config).generate(project, None)
}
