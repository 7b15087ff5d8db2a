//! Core, DOM-free engines and helpers for the front-end.
pub mod catalog;
pub mod config;
pub mod contact;
pub mod geometry;
pub mod grid;
pub mod icons;
pub mod instances;
pub mod overlay;
pub mod preferences;
pub mod scheduler;
pub mod section;
pub mod session;
pub mod store;
pub mod theme;
