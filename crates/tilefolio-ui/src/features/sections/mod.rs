//! Content page feature slice.
//!
//! # Design
//! - Every page renders inside the shared section shell.
//! - About, Projects and Contact add their own bodies; the rest render the
//!   generic paragraph and item lists.

mod about;
mod contact;
mod projects;
mod view;

pub(crate) use view::SectionPage;
