//! Theme-resolved tile definitions.

use tilefolio_content::{SiteContent, TileCopy, TileKey, TileLink, TileSize, TileTable};

use crate::core::icons::IconRef;
use crate::core::theme::{Contrast, ThemeDescriptor};

/// Everything needed to render one logical tile under one theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileDefinition {
    /// Logical key.
    pub key: TileKey,
    /// Title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Themed icon.
    pub icon: IconRef,
    /// Optional destination.
    pub link: Option<TileLink>,
    /// Default footprint.
    pub size: TileSize,
    /// Themed color.
    pub color: &'static str,
    /// Themed contrast.
    pub contrast: Contrast,
    /// Text color readable on `color`.
    pub text_color: &'static str,
}

impl TileDefinition {
    /// Resolve one tile's copy against a theme.
    #[must_use]
    pub fn resolve(copy: &TileCopy, theme: &ThemeDescriptor) -> Self {
        let contrast = theme.tile_contrast(copy.key);
        Self {
            key: copy.key,
            title: copy.title.clone(),
            description: copy.description.clone(),
            icon: theme.tile_icon(copy.key),
            link: copy.link.clone(),
            size: copy.size,
            color: theme.tile_color(copy.key),
            contrast,
            text_color: theme.text_on(contrast),
        }
    }
}

/// Definitions for every tile key under `theme`.
#[must_use]
pub fn themed_tiles(content: &SiteContent, theme: &ThemeDescriptor) -> TileTable<TileDefinition> {
    TileTable::from_fn(|key| TileDefinition::resolve(content.tiles.get(key), theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::{ThemeName, descriptor};

    #[test]
    fn switching_theme_changes_color_and_icon_but_not_copy() {
        let content = SiteContent::embedded().unwrap();
        let metro = themed_tiles(&content, descriptor(ThemeName::Metro));
        let retro = themed_tiles(&content, descriptor(ThemeName::Retro));
        for key in TileKey::ALL {
            let before = metro.get(key);
            let after = retro.get(key);
            assert_eq!(before.title, after.title);
            assert_eq!(before.link, after.link);
            assert_eq!(before.size, after.size);
            assert_eq!(after.color, descriptor(ThemeName::Retro).tile_color(key));
            assert!(matches!(after.icon, IconRef::Pixel(_)));
        }
    }

    #[test]
    fn text_color_follows_contrast() {
        let content = SiteContent::embedded().unwrap();
        let theme = descriptor(ThemeName::Metro);
        let tiles = themed_tiles(&content, theme);
        let sandbox = tiles.get(TileKey::Sandbox);
        assert_eq!(sandbox.contrast, Contrast::Light);
        assert_eq!(sandbox.text_color, theme.tile_light_text);
        assert_eq!(tiles.get(TileKey::Lms).text_color, theme.tile_dark_text);
    }
}
