//! App-wide yewdux store.
//!
//! # Design
//! - Only state shared by unrelated components lives here: the detail
//!   overlay (opened from the grid and from project cards) and the
//!   reduced-motion preference.
//! - Grid order and theme state stay with their owners.

use yewdux::store::Store;

use crate::core::overlay::{OverlayContent, OverlayState, ScrollLock};

/// Global application store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Detail overlay.
    pub overlay: OverlayState,
    /// Platform reduced-motion preference.
    pub reduced_motion: bool,
}

/// Open the overlay, returning the scroll-lock change to apply.
pub fn open_overlay(store: &mut AppStore, content: OverlayContent) -> Option<ScrollLock> {
    store.overlay.open(content)
}

/// Close the overlay, returning the scroll-lock change to apply.
pub fn close_overlay(store: &mut AppStore) -> ScrollLock {
    store.overlay.close()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilefolio_content::TileKey;

    #[test]
    fn overlay_reducers_track_the_lock() {
        let mut store = AppStore::default();
        assert_eq!(
            open_overlay(&mut store, OverlayContent::Tile(TileKey::Talk)),
            Some(ScrollLock::Acquire)
        );
        assert!(store.overlay.is_open());
        assert_eq!(close_overlay(&mut store), ScrollLock::Release);
        assert_eq!(store, AppStore::default());
    }
}
