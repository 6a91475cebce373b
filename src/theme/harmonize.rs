//! Palette harmonization: tinting brand colors toward the primary.

use tracing::debug;

use crate::models::{ColorToken, Palette, RgbColor};

/// Blends unlocked palette entries toward `primary` to produce a visually
/// coherent brand palette.
///
/// Rules, per token:
/// - locked tokens pass through unchanged;
/// - an unlocked `primary` token takes `primary` verbatim (no blending);
/// - every other unlocked token keeps `1 - blend_weight` of its own RGB and
///   takes `blend_weight` of the primary's, per channel, rounded;
/// - tokens whose color fails to parse pass through unchanged.
///
/// The result has the same slugs in the same order as the input. An
/// unparseable `primary` makes harmonization the identity: this function
/// never fails.
#[must_use]
pub fn harmonize(palette: &Palette, primary: &str, blend_weight: f64) -> Palette {
    let Ok(primary_rgb) = RgbColor::from_hex(primary) else {
        debug!(primary, "primary color unparseable, skipping harmonization");
        return palette.clone();
    };

    palette.map_tokens(|token| harmonize_token(token, primary, primary_rgb, blend_weight))
}

fn harmonize_token(
    token: &ColorToken,
    primary: &str,
    primary_rgb: RgbColor,
    blend_weight: f64,
) -> ColorToken {
    if token.locked {
        return token.clone();
    }

    if token.slug == "primary" {
        return ColorToken {
            color: primary.to_string(),
            ..token.clone()
        };
    }

    match token.rgb() {
        Some(rgb) => ColorToken {
            color: rgb.blend(&primary_rgb, blend_weight).to_hex(),
            ..token.clone()
        },
        // Unparseable colors are left alone; validation reports them separately.
        None => token.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorToken;

    const BLEND: f64 = 0.1;

    fn locked(slug: &str, color: &str) -> ColorToken {
        ColorToken {
            locked: true,
            ..ColorToken::new(slug, color)
        }
    }

    #[test]
    fn test_locked_tokens_unchanged() {
        let palette = Palette::new(vec![
            locked("accent", "#00ff00"),
            ColorToken::new("neutral", "#808080"),
        ]);
        let result = harmonize(&palette, "#ff0000", BLEND);

        assert_eq!(result.color_of("accent"), Some("#00ff00"));
        assert_ne!(result.color_of("neutral"), Some("#808080"));
    }

    #[test]
    fn test_primary_replaced_verbatim() {
        let palette = Palette::new(vec![ColorToken::new("primary", "#123456")]);
        let result = harmonize(&palette, "#ff8800", BLEND);
        assert_eq!(result.color_of("primary"), Some("#ff8800"));
    }

    #[test]
    fn test_locked_primary_not_replaced() {
        let palette = Palette::new(vec![locked("primary", "#123456")]);
        let result = harmonize(&palette, "#ff8800", BLEND);
        assert_eq!(result.color_of("primary"), Some("#123456"));
    }

    #[test]
    fn test_blend_math() {
        // 90% of #646464 (100) + 10% of #c80000 (200/0/0) per channel.
        let palette = Palette::new(vec![ColorToken::new("secondary", "#646464")]);
        let result = harmonize(&palette, "#c80000", BLEND);
        // r: 100*0.9 + 200*0.1 = 110; g/b: 100*0.9 = 90
        assert_eq!(result.color_of("secondary"), Some("#6e5a5a"));
    }

    #[test]
    fn test_unparseable_token_passes_through() {
        let palette = Palette::new(vec![ColorToken::new("broken", "oops")]);
        let result = harmonize(&palette, "#c80000", BLEND);
        assert_eq!(result.color_of("broken"), Some("oops"));
    }

    #[test]
    fn test_unparseable_primary_is_identity() {
        let palette = Palette::new(vec![
            ColorToken::new("primary", "#123456"),
            ColorToken::new("secondary", "#646464"),
        ]);
        let result = harmonize(&palette, "nonsense", BLEND);
        assert_eq!(result, palette);
    }

    #[test]
    fn test_order_and_slugs_preserved() {
        let palette = Palette::new(vec![
            ColorToken::new("background", "#ffffff"),
            ColorToken::new("custom-extra", "#224466"),
            ColorToken::new("text", "#111111"),
        ]);
        let result = harmonize(&palette, "#3b82f6", BLEND);
        let slugs: Vec<_> = result.tokens().iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(slugs, vec!["background", "custom-extra", "text"]);
    }
}
