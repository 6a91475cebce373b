//! Brand color palette: named color tokens with lock semantics.

use serde::{Deserialize, Serialize};

use super::RgbColor;

/// Where a palette color originally came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorSource {
    /// Entered directly by the user.
    #[default]
    User,
    /// Extracted from an uploaded logo by the AI service.
    LogoAi,
    /// Adjusted manually after extraction.
    Manual,
}

/// A single named color in the brand palette.
///
/// A locked token is excluded from every automated recoloring step:
/// harmonization, contrast correction, and external override merging all
/// pass it through byte-for-byte. Only a direct user edit may change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorToken {
    /// Palette slug, unique within a palette (e.g. "primary", "text").
    pub slug: String,
    /// Hex color value in "#rrggbb" form.
    pub color: String,
    /// Excludes this token from automated recoloring when true.
    #[serde(default)]
    pub locked: bool,
    /// Provenance of the color value.
    #[serde(default)]
    pub source: ColorSource,
}

impl ColorToken {
    /// Creates an unlocked, user-sourced token.
    #[must_use]
    pub fn new(slug: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            color: color.into(),
            locked: false,
            source: ColorSource::User,
        }
    }

    /// Parses the token's color, if it is a valid hex string.
    #[must_use]
    pub fn rgb(&self) -> Option<RgbColor> {
        RgbColor::from_hex(&self.color).ok()
    }
}

/// Ordered sequence of color tokens with unique slugs.
///
/// The conventional palette carries `primary`, `secondary`, `accent`,
/// `neutral`, `background`, and `text`; additional slugs are permitted and
/// pass through the engine untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Palette {
    tokens: Vec<ColorToken>,
}

impl Palette {
    /// Creates a palette from an ordered token list.
    #[must_use]
    pub fn new(tokens: Vec<ColorToken>) -> Self {
        Self { tokens }
    }

    /// The tokens in palette order.
    #[must_use]
    pub fn tokens(&self) -> &[ColorToken] {
        &self.tokens
    }

    /// Number of tokens in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the palette has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Looks up a token by slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&ColorToken> {
        self.tokens.iter().find(|token| token.slug == slug)
    }

    /// Looks up a token's color by slug.
    #[must_use]
    pub fn color_of(&self, slug: &str) -> Option<&str> {
        self.get(slug).map(|token| token.color.as_str())
    }

    /// Maps every token through `f`, preserving order and length.
    ///
    /// This is the shape of every automated palette transformation: the
    /// result has the same slugs in the same order, only colors differ.
    #[must_use]
    pub fn map_tokens(&self, f: impl Fn(&ColorToken) -> ColorToken) -> Self {
        Self {
            tokens: self.tokens.iter().map(f).collect(),
        }
    }

    /// Slugs that appear more than once, in first-occurrence order.
    #[must_use]
    pub fn duplicate_slugs(&self) -> Vec<String> {
        let mut seen = Vec::new();
        let mut duplicates = Vec::new();
        for token in &self.tokens {
            if seen.contains(&token.slug) {
                if !duplicates.contains(&token.slug) {
                    duplicates.push(token.slug.clone());
                }
            } else {
                seen.push(token.slug.clone());
            }
        }
        duplicates
    }
}

impl FromIterator<ColorToken> for Palette {
    fn from_iter<T: IntoIterator<Item = ColorToken>>(iter: T) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}
