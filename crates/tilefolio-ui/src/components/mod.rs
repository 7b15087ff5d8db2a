//! Shared Yew components.
pub(crate) mod context_menu;
pub(crate) mod grid;
pub(crate) mod header;
pub(crate) mod icon;
pub(crate) mod overlay;
pub(crate) mod page_background;
pub(crate) mod section;
pub(crate) mod theme_switcher;
pub(crate) mod tile;
