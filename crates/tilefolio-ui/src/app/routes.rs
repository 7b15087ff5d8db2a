//! Routing definitions for the start screen and section pages.
use tilefolio_content::{SectionId, TileKey};
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/tile/:key")]
    Tile { key: String },
    #[at("/about")]
    About,
    #[at("/projects")]
    Projects,
    #[at("/resume")]
    Resume,
    #[at("/skills")]
    Skills,
    #[at("/blog")]
    Blog,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Deep link to a tile's detail flyover.
    pub(crate) fn tile(key: TileKey) -> Self {
        Self::Tile {
            key: key.as_str().to_string(),
        }
    }

    /// Tile whose flyover this route opens.
    pub(crate) fn tile_key(&self) -> Option<TileKey> {
        match self {
            Self::Tile { key } => TileKey::parse(key),
            _ => None,
        }
    }

    pub(crate) const fn section(&self) -> Option<SectionId> {
        match self {
            Self::About => Some(SectionId::About),
            Self::Projects => Some(SectionId::Projects),
            Self::Resume => Some(SectionId::Resume),
            Self::Skills => Some(SectionId::Skills),
            Self::Blog => Some(SectionId::Blog),
            Self::Contact => Some(SectionId::Contact),
            Self::Home | Self::Tile { .. } | Self::NotFound => None,
        }
    }
}
