//! Error types for loading and validating site content.

use thiserror::Error;

use crate::model::{SectionId, TileKey};

/// Primary error type for content loading.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The embedded JSON document could not be parsed.
    #[error("site content is not valid JSON")]
    Parse {
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },
    /// A tile key has no copy entry.
    #[error("tile copy missing for key")]
    MissingTile {
        /// Key without copy.
        key: TileKey,
    },
    /// A tile key appears more than once.
    #[error("tile copy declared twice")]
    DuplicateTile {
        /// Key declared twice.
        key: TileKey,
    },
    /// A content section has no copy entry.
    #[error("section copy missing")]
    MissingSection {
        /// Section without copy.
        section: SectionId,
    },
    /// A content section appears more than once.
    #[error("section copy declared twice")]
    DuplicateSection {
        /// Section declared twice.
        section: SectionId,
    },
    /// A required text field was blank.
    #[error("required content field is empty")]
    EmptyField {
        /// Where the field lives (tile key, section id or project title).
        context: String,
        /// Name of the blank field.
        field: &'static str,
    },
}

/// Convenience alias for content results.
pub type ContentResult<T> = Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_errors_render_stable_messages() {
        let missing = ContentError::MissingTile {
            key: TileKey::Github,
        };
        assert_eq!(missing.to_string(), "tile copy missing for key");

        let empty = ContentError::EmptyField {
            context: "about".to_string(),
            field: "title",
        };
        assert_eq!(empty.to_string(), "required content field is empty");
    }
}
