#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(
    dead_code,
    unused,
    missing_docs,
    unreachable_pub,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Tilefolio web front-end.
//!
//! `core` holds the DOM-free engines (theme session, tile grid, overlay
//! state) and is unit-tested natively. The Yew views that bind them to the
//! browser only compile for `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod features;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
