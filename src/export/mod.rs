//! Writing a generated theme to disk as a WordPress block theme directory.
//!
//! Layout of the written directory:
//!
//! ```text
//! <out_dir>/
//!   style.css                 theme header
//!   theme.json                settings document
//!   patterns/<slug>.html      one file per block pattern
//!   templates/front-page.html front-page template body
//! ```

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::models::ProjectConfig;
use crate::theme::GeneratedTheme;

/// Builds the style.css theme header for a project.
///
/// WordPress recognizes a theme by this header block; everything else in
/// the generated theme lives in theme.json and the pattern files.
#[must_use]
pub fn style_css_header(project: &ProjectConfig, generated_at: &str) -> String {
    let description = project
        .sector
        .as_deref()
        .map_or_else(
            || format!("Block theme for {}.", project.name),
            |sector| format!("Block theme for {} ({sector}).", project.name),
        );

    format!(
        "/*\n\
         Theme Name: {name}\n\
         Description: {description}\n\
         Version: 1.0.0\n\
         Requires at least: 6.0\n\
         Requires PHP: 7.4\n\
         Text Domain: {text_domain}\n\
         Generated: {generated_at}\n\
         */\n",
        name = project.name,
        text_domain = crate::constants::PATTERN_NAMESPACE,
    )
}

/// Writes the generated theme into `out_dir`, creating directories as
/// needed.
///
/// # Errors
///
/// Returns an error if any directory or file cannot be created.
pub fn write_theme(theme: &GeneratedTheme, project: &ProjectConfig, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir).with_context(|| {
        format!("Failed to create theme directory {}", out_dir.display())
    })?;

    let generated_at = chrono::Utc::now().to_rfc3339();
    fs::write(
        out_dir.join("style.css"),
        style_css_header(project, &generated_at),
    )
    .context("Failed to write style.css")?;

    let theme_json = serde_json::to_string_pretty(&theme.theme_json)
        .context("Failed to serialize theme.json")?;
    fs::write(out_dir.join("theme.json"), theme_json).context("Failed to write theme.json")?;

    let patterns_dir = out_dir.join("patterns");
    fs::create_dir_all(&patterns_dir).with_context(|| {
        format!("Failed to create patterns directory {}", patterns_dir.display())
    })?;
    for pattern in &theme.patterns {
        let path = patterns_dir.join(format!("{}.html", pattern.slug));
        fs::write(&path, &pattern.html)
            .with_context(|| format!("Failed to write pattern {}", path.display()))?;
    }

    let templates_dir = out_dir.join("templates");
    fs::create_dir_all(&templates_dir).with_context(|| {
        format!("Failed to create templates directory {}", templates_dir.display())
    })?;
    fs::write(templates_dir.join("front-page.html"), &theme.template_front)
        .context("Failed to write front-page.html")?;

    info!(dir = %out_dir.display(), patterns = theme.patterns.len(), "theme written");
    Ok(())
}

/// Normalizes written theme files for byte-stable output by replacing the
/// generation timestamp line.
#[must_use]
pub fn normalize_for_deterministic(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            if line.starts_with("Generated:") {
                "Generated: <timestamp>"
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::models::{ColorToken, Palette};
    use crate::theme::ThemeGenerator;
    use tempfile::TempDir;

    fn sample_theme() -> (GeneratedTheme, ProjectConfig) {
        let mut project = ProjectConfig::new("Acme Studio");
        project.palette = Palette::new(vec![
            ColorToken::new("primary", "#3b82f6"),
            ColorToken::new("background", "#ffffff"),
            ColorToken::new("text", "#1f2937"),
        ]);
        let config = GeneratorConfig::default();
        let theme = ThemeGenerator::new(&config).generate(&project, None);
        (theme, project)
    }

    #[test]
    fn test_write_theme_creates_expected_files() {
        let (theme, project) = sample_theme();
        let dir = TempDir::new().expect("temp dir");
        let out = dir.path().join("acme-theme");

        write_theme(&theme, &project, &out).expect("write should succeed");

        assert!(out.join("style.css").exists());
        assert!(out.join("theme.json").exists());
        assert!(out.join("templates/front-page.html").exists());
        for slug in ["header", "hero", "benefits", "about", "contact", "footer"] {
            assert!(
                out.join(format!("patterns/{slug}.html")).exists(),
                "missing pattern {slug}"
            );
        }
    }

    #[test]
    fn test_theme_json_is_valid_json() {
        let (theme, project) = sample_theme();
        let dir = TempDir::new().expect("temp dir");
        write_theme(&theme, &project, dir.path()).expect("write should succeed");

        let raw = std::fs::read_to_string(dir.path().join("theme.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).expect("valid JSON");
        assert_eq!(value["version"], 2);
    }

    #[test]
    fn test_style_css_header_fields() {
        let (_, project) = sample_theme();
        let header = style_css_header(&project, "2026-01-01T00:00:00Z");
        assert!(header.contains("Theme Name: Acme Studio"));
        assert!(header.contains("Text Domain: blocksmith"));
        assert!(header.contains("Generated: 2026-01-01T00:00:00Z"));
    }

    #[test]
    fn test_normalize_replaces_timestamp_only() {
        let content = "Theme Name: X\nGenerated: 2026-01-01T12:34:56Z\nVersion: 1.0.0";
        let normalized = normalize_for_deterministic(content);
        assert!(normalized.contains("Generated: <timestamp>"));
        assert!(normalized.contains("Theme Name: X"));
        assert!(normalized.contains("Version: 1.0.0"));
    }
}
