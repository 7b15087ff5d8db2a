//! Detail overlay state and paragraph markup.

use tilefolio_content::{Project, TileKey};
use tracing::debug;

/// What the overlay shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayContent {
    /// Flyover for a tile without a link.
    Tile(TileKey),
    /// Project detail opened from a project card.
    Project(Box<Project>),
}

impl OverlayContent {
    /// Tile flyovers mirror `/tile/:key`, so closing one navigates home.
    #[must_use]
    pub const fn is_route_driven(&self) -> bool {
        matches!(self, Self::Tile(_))
    }
}

/// Scroll-lock change the view must apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollLock {
    /// Hide page overflow.
    Acquire,
    /// Restore page overflow.
    Release,
}

/// Open/closed overlay plus whether it holds the page scroll lock.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlayState {
    content: Option<OverlayContent>,
    lock_held: bool,
}

impl OverlayState {
    /// Show `content`, replacing whatever was open.
    ///
    /// Returns [`ScrollLock::Acquire`] only when the lock was not held yet.
    pub fn open(&mut self, content: OverlayContent) -> Option<ScrollLock> {
        debug!(?content, "overlay opened");
        self.content = Some(content);
        if self.lock_held {
            return None;
        }
        self.lock_held = true;
        Some(ScrollLock::Acquire)
    }

    /// Hide the overlay. Always releases the scroll lock, even when nothing
    /// was open, so an unmount can never leave the page locked.
    pub fn close(&mut self) -> ScrollLock {
        if self.content.take().is_some() {
            debug!("overlay closed");
        }
        self.lock_held = false;
        ScrollLock::Release
    }

    /// Current content.
    #[must_use]
    pub const fn content(&self) -> Option<&OverlayContent> {
        self.content.as_ref()
    }

    /// Whether anything is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.content.is_some()
    }

    /// Whether the page scroll lock is held.
    #[must_use]
    pub const fn lock_held(&self) -> bool {
        self.lock_held
    }
}

/// Run of paragraph text, optionally emphasised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextRun<'a> {
    /// Text to render.
    pub text: &'a str,
    /// Render as strong text.
    pub strong: bool,
}

/// Split a detail paragraph into runs.
///
/// Paragraphs opening with `**` get every `**…**` pair rendered strong; an
/// unpaired marker stays literal. Other paragraphs are a single plain run.
#[must_use]
pub fn paragraph_runs(paragraph: &str) -> Vec<TextRun<'_>> {
    if !paragraph.starts_with("**") {
        return vec![TextRun {
            text: paragraph,
            strong: false,
        }];
    }
    let mut runs = Vec::new();
    let mut rest = paragraph;
    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("**") else {
            break;
        };
        if start > 0 {
            runs.push(TextRun {
                text: &rest[..start],
                strong: false,
            });
        }
        runs.push(TextRun {
            text: &after[..end],
            strong: true,
        });
        rest = &after[end + 2..];
    }
    if !rest.is_empty() {
        runs.push(TextRun {
            text: rest,
            strong: false,
        });
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            title: "Board".to_string(),
            summary: "Kanban".to_string(),
            tech: vec!["Rust".to_string()],
            impact: "Shipped".to_string(),
            link: None,
            details: Vec::new(),
        }
    }

    #[test]
    fn only_tile_flyovers_follow_the_route() {
        assert!(OverlayContent::Tile(TileKey::Lms).is_route_driven());
        assert!(!OverlayContent::Project(Box::new(project())).is_route_driven());
    }

    #[test]
    fn first_open_acquires_the_lock_once() {
        let mut state = OverlayState::default();
        assert_eq!(state.open(OverlayContent::Tile(TileKey::Lms)), Some(ScrollLock::Acquire));
        assert_eq!(state.open(OverlayContent::Project(Box::new(project()))), None);
        assert!(matches!(state.content(), Some(OverlayContent::Project(_))));
        assert!(state.lock_held());
    }

    #[test]
    fn rapid_open_close_cycles_never_leak_the_lock() {
        let mut state = OverlayState::default();
        for _ in 0..5 {
            assert_eq!(state.open(OverlayContent::Tile(TileKey::Sandbox)), Some(ScrollLock::Acquire));
            assert_eq!(state.close(), ScrollLock::Release);
            assert!(!state.lock_held());
        }
        assert!(!state.is_open());
    }

    #[test]
    fn closing_when_closed_still_releases() {
        let mut state = OverlayState::default();
        assert_eq!(state.close(), ScrollLock::Release);
        assert_eq!(state.content(), None);
    }

    #[test]
    fn bold_lead_ins_become_strong_runs() {
        let runs = paragraph_runs("**Problem:** slow builds and **flaky** tests");
        assert_eq!(
            runs,
            vec![
                TextRun { text: "Problem:", strong: true },
                TextRun { text: " slow builds and ", strong: false },
                TextRun { text: "flaky", strong: true },
                TextRun { text: " tests", strong: false },
            ]
        );
    }

    #[test]
    fn plain_and_unpaired_paragraphs_stay_literal() {
        assert_eq!(
            paragraph_runs("Plain **text** here"),
            vec![TextRun { text: "Plain **text** here", strong: false }]
        );
        assert_eq!(
            paragraph_runs("**Dangling"),
            vec![TextRun { text: "**Dangling", strong: false }]
        );
    }
}
