//! Start screen feature slice.
//!
//! # Design
//! - The header and the draggable grid share the themed catalog.
//! - Tile activations are turned into navigation here; the grid only reports
//!   them.

mod view;

pub(crate) use view::HomePage;
