//! Theme registry and style projection.
//!
//! # Design
//! - Descriptors are static data; lookups never allocate and never fail.
//! - Every per-tile table is a [`TileTable`], so a theme cannot omit a key.
//! - [`style_variables`] is the single place that decides which CSS custom
//!   properties a theme writes on the document root.

mod presets;

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use tilefolio_content::{TileKey, TileTable};

use crate::core::icons::IconRef;

/// Named themes, in cycle order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Flat tiles on a dark canvas.
    #[default]
    Metro,
    /// Soft tones.
    Pastel,
    /// Saturated glow.
    Neon,
    /// Warm earth tones.
    Solar,
    /// Pixel art.
    Retro,
    /// Frosted translucent tiles.
    Glass,
    /// Violet gradients.
    Orchid,
}

impl ThemeName {
    /// Every theme in cycle order.
    pub const ALL: [Self; 7] = [
        Self::Metro,
        Self::Pastel,
        Self::Neon,
        Self::Solar,
        Self::Retro,
        Self::Glass,
        Self::Orchid,
    ];

    /// Stable identifier, also the persisted value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metro => "metro",
            Self::Pastel => "pastel",
            Self::Neon => "neon",
            Self::Solar => "solar",
            Self::Retro => "retro",
            Self::Glass => "glass",
            Self::Orchid => "orchid",
        }
    }

    /// Parse a persisted identifier.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.as_str() == value)
    }

    /// Theme after this one, wrapping from last to first.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL
            .iter()
            .position(|name| *name == self)
            .unwrap_or_default();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl Display for ThemeName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Whether a tile color is light or dark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Contrast {
    /// Light tile; pair with dark text.
    Light,
    /// Dark tile; pair with light text.
    Dark,
}

impl Contrast {
    /// Identifier written to `--metro-tile-contrast-*`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Full description of one theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeDescriptor {
    /// Theme identity.
    pub name: ThemeName,
    /// Page background.
    pub background: &'static str,
    /// Backdrop behind the grid.
    pub backdrop: &'static str,
    /// Default text color.
    pub foreground: &'static str,
    /// Header and chrome surfaces.
    pub chrome: &'static str,
    /// Accent color.
    pub accent: &'static str,
    /// Muted neutral.
    pub neutral: &'static str,
    /// Body font stack.
    pub font_family: &'static str,
    /// Heading font stack.
    pub heading_font_family: &'static str,
    /// Tile colors.
    pub tile_palette: TileTable<&'static str>,
    /// Tile contrasts.
    pub tile_contrasts: TileTable<Contrast>,
    /// Tile icons.
    pub tile_icons: TileTable<IconRef>,
    /// Text color used on light tiles.
    pub tile_light_text: &'static str,
    /// Text color used on dark tiles.
    pub tile_dark_text: &'static str,
    /// Tiles follow the pointer with a glow.
    pub pointer_glow: bool,
    /// Tiles render as frosted glass.
    pub glass_surface: bool,
}

impl ThemeDescriptor {
    /// Color of one tile.
    #[must_use]
    pub const fn tile_color(&self, key: TileKey) -> &'static str {
        *self.tile_palette.get(key)
    }

    /// Contrast of one tile.
    #[must_use]
    pub const fn tile_contrast(&self, key: TileKey) -> Contrast {
        *self.tile_contrasts.get(key)
    }

    /// Icon of one tile.
    #[must_use]
    pub const fn tile_icon(&self, key: TileKey) -> IconRef {
        *self.tile_icons.get(key)
    }

    /// Text color readable on a tile of the given contrast.
    #[must_use]
    pub const fn text_on(&self, contrast: Contrast) -> &'static str {
        match contrast {
            Contrast::Light => self.tile_light_text,
            Contrast::Dark => self.tile_dark_text,
        }
    }
}

/// Descriptor for `name`.
#[must_use]
pub fn descriptor(name: ThemeName) -> &'static ThemeDescriptor {
    match name {
        ThemeName::Metro => &presets::METRO,
        ThemeName::Pastel => &presets::PASTEL,
        ThemeName::Neon => &presets::NEON,
        ThemeName::Solar => &presets::SOLAR,
        ThemeName::Retro => &presets::RETRO,
        ThemeName::Glass => &presets::GLASS,
        ThemeName::Orchid => &presets::ORCHID,
    }
}

/// Receiver for document-level style writes.
pub trait StyleSink {
    /// Set a CSS custom property on the document root.
    fn set_property(&mut self, name: &str, value: &str);

    /// Set the root `data-theme` attribute.
    fn set_theme_attribute(&mut self, name: ThemeName);
}

/// CSS custom properties describing `theme`, in write order.
#[must_use]
pub fn style_variables(theme: &ThemeDescriptor) -> Vec<(String, String)> {
    let mut vars = vec![
        ("--metro-background".to_string(), theme.background.to_string()),
        ("--metro-backdrop".to_string(), theme.backdrop.to_string()),
        ("--metro-foreground".to_string(), theme.foreground.to_string()),
        ("--metro-chrome".to_string(), theme.chrome.to_string()),
        ("--metro-accent".to_string(), theme.accent.to_string()),
        ("--metro-neutral".to_string(), theme.neutral.to_string()),
    ];
    vars.extend(
        theme
            .tile_palette
            .iter()
            .map(|(key, color)| (format!("--metro-tile-{key}"), (*color).to_string())),
    );
    vars.extend(theme.tile_contrasts.iter().map(|(key, contrast)| {
        (
            format!("--metro-tile-contrast-{key}"),
            contrast.as_str().to_string(),
        )
    }));
    vars.extend([
        (
            "--metro-tile-light-text".to_string(),
            theme.tile_light_text.to_string(),
        ),
        (
            "--metro-tile-dark-text".to_string(),
            theme.tile_dark_text.to_string(),
        ),
        ("--metro-font-family".to_string(), theme.font_family.to_string()),
        (
            "--metro-heading-font-family".to_string(),
            theme.heading_font_family.to_string(),
        ),
    ]);
    vars
}

/// Write every variable for `theme` plus the `data-theme` attribute.
pub fn apply_theme(sink: &mut impl StyleSink, theme: &ThemeDescriptor) {
    for (name, value) in style_variables(theme) {
        sink.set_property(&name, &value);
    }
    sink.set_theme_attribute(theme.name);
}

/// [`StyleSink`] that records the latest value of every write.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingStyleSink {
    /// Latest value per property.
    pub properties: std::collections::BTreeMap<String, String>,
    /// Latest `data-theme` value.
    pub theme_attribute: Option<ThemeName>,
    /// Total property writes.
    pub writes: usize,
}

impl RecordingStyleSink {
    /// Latest value of `name`.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}

impl StyleSink for RecordingStyleSink {
    fn set_property(&mut self, name: &str, value: &str) {
        self.writes += 1;
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn set_theme_attribute(&mut self, name: ThemeName) {
        self.theme_attribute = Some(name);
    }
}
