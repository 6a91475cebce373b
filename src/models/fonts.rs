//! Font configuration for heading and body typography.

use serde::{Deserialize, Serialize};

/// A font selection: family name, available weights, and CSS fallback stack.
///
/// An empty `family` or `fallback` means "unset"; the theme assembler
/// substitutes its built-in defaults for unset fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FontConfig {
    /// Display family name (e.g. "Inter").
    #[serde(default)]
    pub family: String,
    /// Available font weights (e.g. 400, 700).
    #[serde(default)]
    pub weights: Vec<u16>,
    /// CSS font-stack used as the rendered font-family value.
    #[serde(default)]
    pub fallback: String,
}

impl FontConfig {
    /// Creates a font config from a family name and fallback stack.
    #[must_use]
    pub fn new(family: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            weights: vec![400, 700],
            fallback: fallback.into(),
        }
    }

    /// Whether no family has been chosen.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.family.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_detection() {
        assert!(FontConfig::default().is_unset());
        assert!(FontConfig::new("  ", "serif").is_unset());
        assert!(!FontConfig::new("Inter", "Inter, sans-serif").is_unset());
    }

    #[test]
    fn test_deserialize_partial() {
        let font: FontConfig = serde_json::from_str(r#"{"family":"Lora"}"#).unwrap();
        assert_eq!(font.family, "Lora");
        assert!(font.weights.is_empty());
        assert!(font.fallback.is_empty());
    }
}
