//! WCAG contrast correction for text legibility.
//!
//! The corrector walks darker, then lighter, shades of a color until the
//! contrast ratio against a reference background meets the target. It is
//! unconditional given its inputs; the lock rule (never recolor a locked
//! token) is enforced by the palette pipeline in [`enforce_contrast`].

use tracing::debug;

use crate::models::{contrast_ratio, relative_luminance, ColorToken, Palette, RgbColor};

/// Background color assumed when the palette has no `background` token.
pub const FALLBACK_BACKGROUND: &str = "#ffffff";

/// Adjusts `color` until it meets `target` contrast against `background`.
///
/// Already-compliant colors return unchanged, so the function is a no-op on
/// repeated application. Otherwise darker shades are tried first (channel
/// scale factors from `1.0 - step` down to, but not including, 0.1), then
/// lighter shades (factors from `1.0 + step` up to, but not including, 3.0,
/// channels clamped at 255). If no shade qualifies, the result falls back to
/// pure black on light backgrounds (luminance above 0.5) and pure white on
/// dark ones, which guarantees termination and the strongest available
/// contrast against extreme backgrounds.
///
/// An unparseable `color` is returned unchanged.
#[must_use]
pub fn correct_contrast(color: &str, background: &str, target: f64, step: f64) -> String {
    if contrast_ratio(color, background) >= target {
        return color.to_string();
    }

    let Ok(rgb) = RgbColor::from_hex(color) else {
        return color.to_string();
    };

    // Darker shades first: text usually darkens toward readability on the
    // light backgrounds these themes default to.
    let mut k = 1;
    loop {
        let factor = 1.0 - step * f64::from(k);
        if factor <= 0.1 {
            break;
        }
        let candidate = rgb.scale(factor).to_hex();
        if contrast_ratio(&candidate, background) >= target {
            return candidate;
        }
        k += 1;
    }

    let mut k = 1;
    loop {
        let factor = 1.0 + step * f64::from(k);
        if factor >= 3.0 {
            break;
        }
        let candidate = rgb.scale(factor).to_hex();
        if contrast_ratio(&candidate, background) >= target {
            return candidate;
        }
        k += 1;
    }

    if relative_luminance(background) > 0.5 {
        "#000000".to_string()
    } else {
        "#ffffff".to_string()
    }
}

/// Corrects every unlocked text token in the palette to the target contrast
/// ratio against the palette's background color.
///
/// The reference background is the `background` token's color, or
/// [`FALLBACK_BACKGROUND`] when the palette has none. A token counts as text
/// when its slug contains `"text"`. Locked tokens and non-text tokens pass
/// through unchanged.
#[must_use]
pub fn enforce_contrast(palette: &Palette, target: f64, step: f64) -> Palette {
    let background = palette
        .color_of("background")
        .unwrap_or(FALLBACK_BACKGROUND)
        .to_string();

    palette.map_tokens(|token| {
        if token.locked || !token.slug.contains("text") {
            return token.clone();
        }

        let corrected = correct_contrast(&token.color, &background, target, step);
        if corrected != token.color {
            debug!(slug = %token.slug, from = %token.color, to = %corrected, "contrast corrected");
        }
        ColorToken {
            color: corrected,
            ..token.clone()
        }
    })
}
