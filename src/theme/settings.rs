//! theme.json assembly: palette, typography, spacing, and base styles.
//!
//! Produces a WordPress theme.json version 2 document from the harmonized
//! palette and font configuration. Font sizes and the spacing scale are
//! fixed presets, constant across all generated themes.

use serde::{Deserialize, Serialize};

use crate::models::{FontConfig, Palette};

/// Schema URL embedded in generated theme.json files.
const THEME_JSON_SCHEMA: &str = "https://schemas.wp.org/trunk/theme.json";

/// Default background color when the palette has no `background` token.
const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Default text color when the palette has no `text` token.
const DEFAULT_TEXT: &str = "#1f2937";

/// A complete theme.json document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeJson {
    /// JSON schema reference.
    #[serde(rename = "$schema")]
    pub schema: String,
    /// theme.json format version.
    pub version: u8,
    /// Global settings (color, typography, spacing).
    pub settings: ThemeSettings,
    /// Base element styles.
    pub styles: BaseStyles,
}

/// The `settings` object of a theme.json document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    /// Color settings.
    pub color: ColorSettings,
    /// Typography settings.
    pub typography: TypographySettings,
    /// Spacing settings.
    pub spacing: SpacingSettings,
}

/// Color settings: the preset palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSettings {
    /// Preset color palette entries.
    pub palette: Vec<PaletteEntry>,
}

/// One preset color: slug, display name, and hex value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Preset slug (matches the palette token slug).
    pub slug: String,
    /// Display name: the slug with its first character capitalized.
    pub name: String,
    /// Hex color value.
    pub color: String,
}

/// Typography settings: font families and the fixed size scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographySettings {
    /// Heading and body font family presets.
    pub font_families: Vec<FontFamilyEntry>,
    /// Fixed five-step font size scale.
    pub font_sizes: Vec<FontSizeEntry>,
}

/// One font family preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontFamilyEntry {
    /// Preset slug ("heading" or "body").
    pub slug: String,
    /// Display name (the configured family).
    pub name: String,
    /// CSS font-family stack.
    pub font_family: String,
}

/// One font size preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSizeEntry {
    /// Preset slug (e.g. "x-large").
    pub slug: String,
    /// Display name.
    pub name: String,
    /// CSS size value.
    pub size: String,
}

/// Spacing settings: allowed units and the fixed step scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingSettings {
    /// Allowed spacing units.
    pub units: Vec<String>,
    /// Fixed seven-step spacing scale.
    pub spacing_sizes: Vec<SpacingSizeEntry>,
}

/// One spacing size preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingSizeEntry {
    /// Preset slug (e.g. "50").
    pub slug: String,
    /// Display name.
    pub name: String,
    /// CSS size value.
    pub size: String,
}

/// Base element styles wiring color and typography to the presets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStyles {
    /// Page background and text color.
    pub color: StyleColor,
    /// Body typography.
    pub typography: StyleTypography,
}

/// Background and text color bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleColor {
    /// Background binding (`var:preset|color|background` or a literal).
    pub background: String,
    /// Text binding (`var:preset|color|text` or a literal).
    pub text: String,
}

/// Body font bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleTypography {
    /// Font family binding.
    pub font_family: String,
    /// Font size binding.
    pub font_size: String,
}

/// Capitalizes the first character of a slug for display.
fn display_name(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn font_size_presets() -> Vec<FontSizeEntry> {
    [
        ("small", "Small", "14px"),
        ("medium", "Medium", "16px"),
        ("large", "Large", "20px"),
        ("x-large", "X-Large", "32px"),
        ("xx-large", "XX-Large", "48px"),
    ]
    .into_iter()
    .map(|(slug, name, size)| FontSizeEntry {
        slug: slug.to_string(),
        name: name.to_string(),
        size: size.to_string(),
    })
    .collect()
}

fn spacing_presets() -> SpacingSettings {
    let spacing_sizes = [
        ("20", "2X-Small", "0.25rem"),
        ("30", "X-Small", "0.5rem"),
        ("40", "Small", "0.75rem"),
        ("50", "Medium", "1rem"),
        ("60", "Large", "1.5rem"),
        ("70", "X-Large", "2.25rem"),
        ("80", "2X-Large", "3.5rem"),
    ]
    .into_iter()
    .map(|(slug, name, size)| SpacingSizeEntry {
        slug: slug.to_string(),
        name: name.to_string(),
        size: size.to_string(),
    })
    .collect();

    SpacingSettings {
        units: ["px", "rem", "%", "vh", "vw"]
            .into_iter()
            .map(ToString::to_string)
            .collect(),
        spacing_sizes,
    }
}

fn font_family_entry(slug: &str, font: &FontConfig, default_name: &str, default_stack: &str) -> FontFamilyEntry {
    let name = if font.is_unset() {
        default_name.to_string()
    } else {
        font.family.clone()
    };
    let font_family = if font.fallback.trim().is_empty() {
        default_stack.to_string()
    } else {
        font.fallback.clone()
    };
    FontFamilyEntry {
        slug: slug.to_string(),
        name,
        font_family,
    }
}

/// Builds the theme.json document for a harmonized palette and the two
/// configured fonts.
///
/// Palette entries map 1:1 onto presets with capitalized display names.
/// Exactly two font families are emitted (`heading`, `body`); unset fonts
/// default to Inter and System UI stacks. Base styles reference the
/// `background` and `text` presets symbolically when those slugs exist and
/// fall back to literal defaults otherwise.
#[must_use]
pub fn assemble_theme_json(
    palette: &Palette,
    heading_font: &FontConfig,
    body_font: &FontConfig,
) -> ThemeJson {
    let entries = palette
        .tokens()
        .iter()
        .map(|token| PaletteEntry {
            slug: token.slug.clone(),
            name: display_name(&token.slug),
            color: token.color.clone(),
        })
        .collect();

    let font_families = vec![
        font_family_entry(
            "heading",
            heading_font,
            "Inter",
            "Inter, system-ui, sans-serif",
        ),
        font_family_entry(
            "body",
            body_font,
            "System UI",
            "system-ui, -apple-system, sans-serif",
        ),
    ];

    let color = StyleColor {
        background: if palette.get("background").is_some() {
            "var:preset|color|background".to_string()
        } else {
            DEFAULT_BACKGROUND.to_string()
        },
        text: if palette.get("text").is_some() {
            "var:preset|color|text".to_string()
        } else {
            DEFAULT_TEXT.to_string()
        },
    };

    ThemeJson {
        schema: THEME_JSON_SCHEMA.to_string(),
        version: 2,
        settings: ThemeSettings {
            color: ColorSettings { palette: entries },
            typography: TypographySettings {
                font_families,
                font_sizes: font_size_presets(),
            },
            spacing: spacing_presets(),
        },
        styles: BaseStyles {
            color,
            typography: StyleTypography {
                font_family: "var:preset|font-family|body".to_string(),
                font_size: "var:preset|font-size|medium".to_string(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorToken;

    fn sample_palette() -> Palette {
        Palette::new(vec![
            ColorToken::new("primary", "#3b82f6"),
            ColorToken::new("background", "#ffffff"),
            ColorToken::new("text", "#1f2937"),
        ])
    }

    #[test]
    fn test_palette_entries_mapped_with_capitalized_names() {
        let theme = assemble_theme_json(
            &sample_palette(),
            &FontConfig::default(),
            &FontConfig::default(),
        );
        let palette = &theme.settings.color.palette;
        assert_eq!(palette.len(), 3);
        assert_eq!(palette[0].slug, "primary");
        assert_eq!(palette[0].name, "Primary");
        assert_eq!(palette[0].color, "#3b82f6");
        assert_eq!(palette[2].name, "Text");
    }

    #[test]
    fn test_font_defaults_when_unset() {
        let theme = assemble_theme_json(
            &sample_palette(),
            &FontConfig::default(),
            &FontConfig::default(),
        );
        let families = &theme.settings.typography.font_families;
        assert_eq!(families.len(), 2);
        assert_eq!(families[0].slug, "heading");
        assert_eq!(families[0].name, "Inter");
        assert_eq!(families[0].font_family, "Inter, system-ui, sans-serif");
        assert_eq!(families[1].slug, "body");
        assert_eq!(families[1].name, "System UI");
        assert_eq!(families[1].font_family, "system-ui, -apple-system, sans-serif");
    }

    #[test]
    fn test_configured_fonts_used() {
        let heading = FontConfig::new("Playfair Display", "'Playfair Display', serif");
        let body = FontConfig::new("Lora", "Lora, Georgia, serif");
        let theme = assemble_theme_json(&sample_palette(), &heading, &body);
        let families = &theme.settings.typography.font_families;
        assert_eq!(families[0].name, "Playfair Display");
        assert_eq!(families[1].font_family, "Lora, Georgia, serif");
    }

    #[test]
    fn test_fixed_font_size_scale() {
        let theme = assemble_theme_json(
            &sample_palette(),
            &FontConfig::default(),
            &FontConfig::default(),
        );
        let sizes = &theme.settings.typography.font_sizes;
        let scale: Vec<_> = sizes.iter().map(|s| (s.slug.as_str(), s.size.as_str())).collect();
        assert_eq!(
            scale,
            vec![
                ("small", "14px"),
                ("medium", "16px"),
                ("large", "20px"),
                ("x-large", "32px"),
                ("xx-large", "48px"),
            ]
        );
    }

    #[test]
    fn test_fixed_spacing_scale() {
        let theme = assemble_theme_json(
            &sample_palette(),
            &FontConfig::default(),
            &FontConfig::default(),
        );
        let spacing = &theme.settings.spacing;
        assert_eq!(spacing.units, vec!["px", "rem", "%", "vh", "vw"]);
        assert_eq!(spacing.spacing_sizes.len(), 7);
    }

    #[test]
    fn test_base_styles_reference_presets() {
        let theme = assemble_theme_json(
            &sample_palette(),
            &FontConfig::default(),
            &FontConfig::default(),
        );
        assert_eq!(theme.styles.color.background, "var:preset|color|background");
        assert_eq!(theme.styles.color.text, "var:preset|color|text");
        assert_eq!(theme.styles.typography.font_family, "var:preset|font-family|body");
        assert_eq!(theme.styles.typography.font_size, "var:preset|font-size|medium");
    }

    #[test]
    fn test_base_styles_literal_fallbacks() {
        let palette = Palette::new(vec![ColorToken::new("primary", "#3b82f6")]);
        let theme = assemble_theme_json(&palette, &FontConfig::default(), &FontConfig::default());
        assert_eq!(theme.styles.color.background, "#ffffff");
        assert_eq!(theme.styles.color.text, "#1f2937");
    }

    #[test]
    fn test_serialized_field_names() {
        let theme = assemble_theme_json(
            &sample_palette(),
            &FontConfig::default(),
            &FontConfig::default(),
        );
        let json = serde_json::to_value(&theme).unwrap();
        assert_eq!(json["version"], 2);
        assert!(json["$schema"].is_string());
        assert!(json["settings"]["typography"]["fontFamilies"].is_array());
        assert!(json["settings"]["typography"]["fontSizes"].is_array());
        assert!(json["settings"]["spacing"]["spacingSizes"].is_array());
        assert!(json["styles"]["typography"]["fontFamily"].is_string());
    }
}
