//! Front-end tuning loaded from the embedded `ui.json`.
//!
//! # Design
//! - Every field has a default, so a partial document only overrides what it names.
//! - Validation rejects values that would stall the grid (zero delays, empty caps).

use serde::Deserialize;
use thiserror::Error;

use crate::core::theme::ThemeName;

/// UI tuning shipped with the bundle.
pub const EMBEDDED_UI_JSON: &str = include_str!("../../config/ui.json");

/// Errors raised while loading [`UiConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document was not valid JSON for the config shape.
    #[error("ui config is not valid JSON")]
    Parse {
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },
    /// A field held a value outside its accepted range.
    #[error("invalid value for '{field}' in '{section}': {reason}")]
    InvalidField {
        /// Config section.
        section: &'static str,
        /// Field name.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Convenience alias for config results.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete UI configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Grid engine tuning.
    pub grid: GridTuning,
    /// Theme session tuning.
    pub theme: ThemeTuning,
    /// Browser storage keys.
    pub storage: StorageKeys,
}

/// Grid engine tuning.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridTuning {
    /// Quiet period before a hover target commits a reorder.
    pub hover_reorder_delay_ms: u32,
    /// Nominal tile edge used to estimate how many tiles fill the viewport.
    pub tile_footprint: f64,
    /// Over-fill factor applied to the estimated cell count.
    pub density: f64,
    /// Upper bound on the estimate.
    pub max_instances: usize,
    /// Minimum instances per logical key.
    pub coverage_multiplier: usize,
    /// Parallax changes below this on both axes are not written.
    pub parallax_epsilon: f64,
    /// Maximum parallax translation in pixels.
    pub parallax_range_px: f64,
    /// Press duration before a pointer press becomes a drag.
    pub activation_delay_ms: u32,
    /// Movement allowed during the press before it is treated as a scroll.
    pub activation_tolerance_px: f64,
}

impl Default for GridTuning {
    fn default() -> Self {
        Self {
            hover_reorder_delay_ms: 220,
            tile_footprint: 160.0,
            density: 1.4,
            max_instances: 48,
            coverage_multiplier: 3,
            parallax_epsilon: 0.002,
            parallax_range_px: 20.0,
            activation_delay_ms: 200,
            activation_tolerance_px: 12.0,
        }
    }
}

/// Theme session tuning.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeTuning {
    /// Length of the ripple transition.
    pub ripple_duration_ms: u32,
    /// Theme used when nothing valid is persisted.
    pub default_theme: ThemeName,
}

impl Default for ThemeTuning {
    fn default() -> Self {
        Self {
            ripple_duration_ms: 2200,
            default_theme: ThemeName::Metro,
        }
    }
}

/// Browser storage keys.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    /// Local storage key for the persisted theme name.
    pub theme: String,
    /// Session storage key for the tile color handed to the next page.
    pub tile_tint: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            theme: "metro-theme".to_string(),
            tile_tint: "metro-tile-color".to_string(),
        }
    }
}

impl UiConfig {
    /// Parse and validate a config document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidField`] for out-of-range values.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse the embedded document.
    ///
    /// # Errors
    ///
    /// Same as [`UiConfig::from_json`].
    pub fn embedded() -> ConfigResult<Self> {
        Self::from_json(EMBEDDED_UI_JSON)
    }

    fn validate(&self) -> ConfigResult<()> {
        let grid = &self.grid;
        check(grid.hover_reorder_delay_ms > 0, "grid", "hover_reorder_delay_ms", "must be positive")?;
        check(grid.tile_footprint > 0.0, "grid", "tile_footprint", "must be positive")?;
        check(grid.density > 0.0, "grid", "density", "must be positive")?;
        check(grid.max_instances > 0, "grid", "max_instances", "must be at least 1")?;
        check(grid.coverage_multiplier > 0, "grid", "coverage_multiplier", "must be at least 1")?;
        check(grid.parallax_epsilon >= 0.0, "grid", "parallax_epsilon", "must not be negative")?;
        check(
            grid.activation_tolerance_px >= 0.0,
            "grid",
            "activation_tolerance_px",
            "must not be negative",
        )?;
        check(self.theme.ripple_duration_ms > 0, "theme", "ripple_duration_ms", "must be positive")?;
        check(!self.storage.theme.trim().is_empty(), "storage", "theme", "must not be empty")?;
        check(
            !self.storage.tile_tint.trim().is_empty(),
            "storage",
            "tile_tint",
            "must not be empty",
        )
    }
}

fn check(
    ok: bool,
    section: &'static str,
    field: &'static str,
    reason: &'static str,
) -> ConfigResult<()> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::InvalidField {
            section,
            field,
            reason,
        })
    }
}
