//! RGB color handling with hex parsing and WCAG luminance math.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#rrggbb) and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#rrggbb", "rrggbb" (case-insensitive). Exactly six
    /// hex digits are required; shorthand forms are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use blocksmith::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#ff0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00FF00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (rrggbb)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use blocksmith::models::RgbColor;
    ///
    /// let color = RgbColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "#ff0000");
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Creates an `RgbColor` from floating-point channel values.
    ///
    /// Each channel is independently rounded to the nearest integer and
    /// clamped to the 0-255 range, so scaled or blended values outside the
    /// valid range collapse to the channel bounds instead of wrapping.
    #[must_use]
    pub fn from_scaled(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.round().clamp(0.0, 255.0) as u8,
            g: g.round().clamp(0.0, 255.0) as u8,
            b: b.round().clamp(0.0, 255.0) as u8,
        }
    }

    /// Computes the relative luminance of the color per WCAG 2.1.
    ///
    /// Each sRGB channel is linearized (values at or below 0.03928 are
    /// divided by 12.92, larger values pass through the 2.4 gamma curve on
    /// `(c + 0.055) / 1.055`) and the linear channels are combined with the
    /// 0.2126 / 0.7152 / 0.0722 weights.
    ///
    /// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
    #[must_use]
    pub fn luminance(&self) -> f64 {
        fn linearize(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// Computes the WCAG contrast ratio between this color and another.
    ///
    /// Returns a value in [1.0, 21.0]; symmetric in its two operands.
    #[must_use]
    pub fn contrast_with(&self, other: &Self) -> f64 {
        let la = self.luminance();
        let lb = other.luminance();
        let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Blends this color toward `other` by `weight` (0.0 keeps this color,
    /// 1.0 yields `other`), rounding each channel to the nearest integer.
    #[must_use]
    pub fn blend(&self, other: &Self, weight: f64) -> Self {
        let own = 1.0 - weight;
        Self::from_scaled(
            f64::from(self.r) * own + f64::from(other.r) * weight,
            f64::from(self.g) * own + f64::from(other.g) * weight,
            f64::from(self.b) * own + f64::from(other.b) * weight,
        )
    }

    /// Scales each channel by `factor`, clamping to the 0-255 range.
    ///
    /// Factors below 1.0 darken the color; factors above 1.0 lighten it
    /// until the channels saturate at 255.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self::from_scaled(
            f64::from(self.r) * factor,
            f64::from(self.g) * factor,
            f64::from(self.b) * factor,
        )
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#ffffff).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

/// Computes the relative luminance of a hex color string.
///
/// Malformed input yields luminance 0.0 rather than failing. Higher-level
/// palette operations rely on this leniency so a single bad color never
/// aborts a generation run.
#[must_use]
pub fn relative_luminance(hex: &str) -> f64 {
    RgbColor::from_hex(hex).map_or(0.0, |color| color.luminance())
}

/// Computes the WCAG contrast ratio between two hex color strings.
///
/// Symmetric in its arguments; always at least 1.0. Malformed colors are
/// treated as zero-luminance via [`relative_luminance`].
#[must_use]
pub fn contrast_ratio(color_a: &str, color_b: &str) -> f64 {
    let la = relative_luminance(color_a);
    let lb = relative_luminance(color_b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}
