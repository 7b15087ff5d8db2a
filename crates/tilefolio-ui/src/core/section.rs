//! Route styling for section pages.
//!
//! Each section borrows the color of the tile that links to it; the back
//! button and overlays pick light or dark treatments from that tile's
//! contrast.

use tilefolio_content::TileKey;

use crate::core::icons::IconRef;
use crate::core::theme::{Contrast, ThemeDescriptor};

/// Hint shown under every section title.
pub const SECTION_TIP: &str =
    "Tip: Use the Back button in the top-left corner to return to the tile home.";

/// Channels used when a color is not a parseable hex value.
pub const FALLBACK_RGB: &str = "255, 255, 255";

/// `"#rgb"` or `"#rrggbb"` as `"r, g, b"`; `None` for anything else.
#[must_use]
pub fn hex_to_rgb_channels(color: &str) -> Option<String> {
    let hex = color.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|ch| [ch, ch]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let value = u32::from_str_radix(&expanded, 16).ok()?;
    Some(format!(
        "{}, {}, {}",
        (value >> 16) & 0xff,
        (value >> 8) & 0xff,
        value & 0xff
    ))
}

/// Resolved look of one section page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionStyle {
    /// Default text color.
    pub foreground: &'static str,
    /// Icon next to the title, when the section has a tile.
    pub icon: Option<IconRef>,
    /// Route custom properties, in a stable order.
    pub variables: Vec<(&'static str, String)>,
}

impl SectionStyle {
    /// Inline `style` attribute value.
    #[must_use]
    pub fn inline(&self) -> String {
        let mut style = format!("color: {};", self.foreground);
        for (name, value) in &self.variables {
            style.push_str(&format!(" {name}: {value};"));
        }
        style
    }
}

/// Style for a section tinted by `tile`, or by the accent when it has none.
#[must_use]
pub fn section_style(theme: &ThemeDescriptor, tile: Option<TileKey>) -> SectionStyle {
    let (color, contrast) = tile.map_or((theme.accent, Contrast::Dark), |key| {
        (theme.tile_color(key), theme.tile_contrast(key))
    });
    let rgb = hex_to_rgb_channels(color).unwrap_or_else(|| FALLBACK_RGB.to_string());
    let (overlay, back_bg, back_bg_hover, back_border) = match contrast {
        Contrast::Dark => (
            "rgba(255, 255, 255, 0.14)",
            "rgba(255, 255, 255, 0.12)",
            "rgba(255, 255, 255, 0.22)",
            "rgba(255, 255, 255, 0.45)",
        ),
        Contrast::Light => (
            "rgba(14, 20, 42, 0.2)",
            "rgba(12, 16, 32, 0.46)",
            "rgba(12, 16, 32, 0.58)",
            "rgba(12, 16, 32, 0.6)",
        ),
    };
    SectionStyle {
        foreground: theme.foreground,
        icon: tile.map(|key| theme.tile_icon(key)),
        variables: vec![
            ("--route-accent-color", theme.accent.to_string()),
            ("--route-anim-color", color.to_string()),
            ("--route-anim-color-rgb", rgb),
            ("--route-anim-overlay", overlay.to_string()),
            ("--route-back-fg", theme.text_on(contrast).to_string()),
            ("--route-back-bg", back_bg.to_string()),
            ("--route-back-bg-hover", back_bg_hover.to_string()),
            ("--route-back-border", back_border.to_string()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::{ThemeName, descriptor};

    fn variable<'a>(style: &'a SectionStyle, name: &str) -> &'a str {
        style
            .variables
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
            .unwrap()
    }

    #[test]
    fn hex_channels_accept_short_and_long_forms() {
        assert_eq!(hex_to_rgb_channels("#0af").as_deref(), Some("0, 170, 255"));
        assert_eq!(hex_to_rgb_channels(" 1E293B ").as_deref(), Some("30, 41, 59"));
        assert_eq!(hex_to_rgb_channels("#abcd"), None);
        assert_eq!(hex_to_rgb_channels("rgba(0,0,0,1)"), None);
        assert_eq!(hex_to_rgb_channels("#zzzzzz"), None);
    }

    #[test]
    fn sections_follow_their_tile_contrast() {
        let metro = descriptor(ThemeName::Metro);
        for key in TileKey::ALL {
            let style = section_style(metro, Some(key));
            assert_eq!(variable(&style, "--route-anim-color"), metro.tile_color(key));
            let expected_fg = metro.text_on(metro.tile_contrast(key));
            assert_eq!(variable(&style, "--route-back-fg"), expected_fg);
            let border = variable(&style, "--route-back-border");
            match metro.tile_contrast(key) {
                Contrast::Dark => assert_eq!(border, "rgba(255, 255, 255, 0.45)"),
                Contrast::Light => assert_eq!(border, "rgba(12, 16, 32, 0.6)"),
            }
            assert_eq!(style.icon, Some(metro.tile_icon(key)));
        }
    }

    #[test]
    fn sections_without_a_tile_use_the_accent() {
        let neon = descriptor(ThemeName::Neon);
        let style = section_style(neon, None);
        assert_eq!(variable(&style, "--route-anim-color"), neon.accent);
        assert_eq!(variable(&style, "--route-back-fg"), neon.tile_dark_text);
        assert_eq!(style.icon, None);
    }

    #[test]
    fn unparseable_colors_fall_back_to_white_channels() {
        let mut theme = descriptor(ThemeName::Glass).clone();
        theme.accent = "rgba(255, 0, 0, 0.5)";
        let style = section_style(&theme, None);
        assert_eq!(variable(&style, "--route-anim-color-rgb"), FALLBACK_RGB);
    }

    #[test]
    fn inline_style_lists_color_then_variables() {
        let style = section_style(descriptor(ThemeName::Metro), Some(TileKey::Profile));
        let inline = style.inline();
        assert!(inline.starts_with("color: "));
        assert!(inline.contains("--route-anim-overlay: "));
        assert_eq!(inline.matches(';').count(), 9);
    }
}
