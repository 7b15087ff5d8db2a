//! Embedded site content parsing and validation.

use serde::Deserialize;

use crate::error::{ContentError, ContentResult};
use crate::model::{
    ContactSettings, Project, SectionCopy, SectionId, SiteContent, SiteProfile, Testimonial,
    TileCopy, TileTable,
};

/// Site content shipped with the bundle.
pub const EMBEDDED_SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize)]
struct SiteDocument {
    profile: SiteProfile,
    contact: ContactSettings,
    tiles: Vec<TileCopy>,
    sections: Vec<SectionCopy>,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    testimonials: Vec<Testimonial>,
}

impl SiteContent {
    /// Parse and validate the content embedded in the bundle.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] when the embedded document is malformed.
    pub fn embedded() -> ContentResult<Self> {
        parse_site_content(EMBEDDED_SITE_JSON)
    }
}

/// Parse and validate a site content document.
///
/// # Errors
///
/// Returns [`ContentError::Parse`] for malformed JSON, and a validation
/// variant when a tile key or section is missing, duplicated, or has a blank
/// required field.
pub fn parse_site_content(json: &str) -> ContentResult<SiteContent> {
    let document: SiteDocument =
        serde_json::from_str(json).map_err(|source| ContentError::Parse { source })?;

    let tiles = collect_tiles(document.tiles)?;
    let sections = collect_sections(document.sections)?;
    for project in &document.projects {
        require(&project.title, &project.title, "title")?;
        require(&project.summary, &project.title, "summary")?;
    }
    require(&document.profile.name, "profile", "name")?;
    require(&document.contact.email, "contact", "email")?;

    Ok(SiteContent {
        profile: document.profile,
        contact: document.contact,
        tiles,
        sections,
        projects: document.projects,
        testimonials: document.testimonials,
    })
}

fn collect_tiles(tiles: Vec<TileCopy>) -> ContentResult<TileTable<TileCopy>> {
    let mut slots: TileTable<Option<TileCopy>> = TileTable::from_fn(|_| None);
    for tile in tiles {
        require(&tile.title, tile.key.as_str(), "title")?;
        let slot = slots.get_mut(tile.key);
        if slot.is_some() {
            return Err(ContentError::DuplicateTile { key: tile.key });
        }
        *slot = Some(tile);
    }
    slots
        .transpose()
        .map_err(|key| ContentError::MissingTile { key })
}

fn collect_sections(sections: Vec<SectionCopy>) -> ContentResult<Vec<SectionCopy>> {
    let mut ordered = Vec::with_capacity(SectionId::ALL.len());
    for id in SectionId::ALL {
        let mut matching = sections.iter().filter(|section| section.id == id);
        let Some(section) = matching.next() else {
            return Err(ContentError::MissingSection { section: id });
        };
        if matching.next().is_some() {
            return Err(ContentError::DuplicateSection { section: id });
        }
        require(&section.title, id.as_str(), "title")?;
        ordered.push(section.clone());
    }
    Ok(ordered)
}

fn require(value: &str, context: &str, field: &'static str) -> ContentResult<()> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField {
            context: context.to_string(),
            field,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TileKey, TileLink, TileSize};
    use serde_json::{Value, json};

    fn embedded_value() -> Value {
        serde_json::from_str(EMBEDDED_SITE_JSON).unwrap()
    }

    #[test]
    fn embedded_content_is_complete() {
        let content = SiteContent::embedded().unwrap();
        for key in TileKey::ALL {
            assert_eq!(content.tiles.get(key).key, key);
        }
        let ids: Vec<SectionId> = content.sections.iter().map(|section| section.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
        assert!(!content.projects.is_empty());
    }

    #[test]
    fn embedded_content_has_external_and_internal_links() {
        let content = SiteContent::embedded().unwrap();
        assert!(matches!(
            content.tiles.get(TileKey::Github).link,
            Some(TileLink::External(_))
        ));
        assert!(matches!(
            content.tiles.get(TileKey::Profile).link,
            Some(TileLink::Internal(_))
        ));
        assert!(content.tiles.get(TileKey::Lms).link.is_none());
    }

    #[test]
    fn missing_tile_is_rejected() {
        let mut value = embedded_value();
        let tiles = value["tiles"].as_array_mut().unwrap();
        tiles.retain(|tile| tile["key"] != "sandbox");
        let err = parse_site_content(&value.to_string()).unwrap_err();
        assert!(matches!(
            err,
            ContentError::MissingTile {
                key: TileKey::Sandbox
            }
        ));
    }

    #[test]
    fn duplicate_tile_is_rejected() {
        let mut value = embedded_value();
        let tiles = value["tiles"].as_array_mut().unwrap();
        tiles.push(json!({"key": "github", "title": "Again", "size": "medium"}));
        let err = parse_site_content(&value.to_string()).unwrap_err();
        assert!(matches!(
            err,
            ContentError::DuplicateTile {
                key: TileKey::Github
            }
        ));
    }

    #[test]
    fn missing_section_is_rejected() {
        let mut value = embedded_value();
        let sections = value["sections"].as_array_mut().unwrap();
        sections.retain(|section| section["id"] != "blog");
        let err = parse_site_content(&value.to_string()).unwrap_err();
        assert!(matches!(
            err,
            ContentError::MissingSection {
                section: SectionId::Blog
            }
        ));
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut value = embedded_value();
        value["tiles"][0]["title"] = json!("   ");
        let err = parse_site_content(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::EmptyField { field: "title", .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_site_content("{").unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn tile_sizes_parse_from_lowercase() {
        let tile: TileCopy =
            serde_json::from_value(json!({"key": "stack", "title": "Skills", "size": "wide"}))
                .unwrap();
        assert_eq!(tile.size, TileSize::Wide);
        assert_eq!(tile.description, None);
    }
}
