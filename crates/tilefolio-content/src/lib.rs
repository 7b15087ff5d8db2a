#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(
    missing_docs,
    unreachable_pub,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Shared portfolio content for the Tilefolio start screen.
//!
//! Layout: `model.rs` (tile keys, sizes, copy and project models), `loader.rs`
//! (embedded JSON parsing and validation), `error.rs` (`ContentError`).
//! Everything here is DOM-free so the UI core can be tested natively.

pub mod error;
pub mod loader;
pub mod model;

pub use error::{ContentError, ContentResult};
pub use loader::{EMBEDDED_SITE_JSON, parse_site_content};
pub use model::{
    ContactSettings, ContentItem, Fact, GridSpan, Project, ProjectSection, SectionCopy, SectionId,
    SiteContent, SiteProfile, Testimonial, TileCopy, TileKey, TileLink, TileSize, TileTable,
};
