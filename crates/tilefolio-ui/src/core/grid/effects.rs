//! Pointer-driven paint effects: tile glow and whole-grid parallax.
//!
//! Neither effect touches grid order or layout; they only produce CSS
//! custom property values.

use crate::core::geometry::{Point, Rect};
use crate::core::scheduler::TaskHandle;

/// Glow origin inside one tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileGlow {
    /// Horizontal origin, 0..=100 percent of the tile width.
    pub x_percent: f64,
    /// Vertical origin, 0..=100 percent of the tile height.
    pub y_percent: f64,
    /// Horizontal shift, -1..=1.
    pub shift_x: f64,
    /// Vertical shift, -1..=1.
    pub shift_y: f64,
}

impl TileGlow {
    /// Glow centered on the tile with no shift.
    pub const NEUTRAL: Self = Self {
        x_percent: 50.0,
        y_percent: 50.0,
        shift_x: 0.0,
        shift_y: 0.0,
    };

    /// Glow for a pointer at `point` over a tile occupying `rect`.
    ///
    /// A zero-sized axis stays centered.
    #[must_use]
    pub fn at(rect: Rect, point: Point) -> Self {
        let x_percent = if rect.width > 0.0 {
            ((point.x - rect.left) / rect.width) * 100.0
        } else {
            50.0
        };
        let y_percent = if rect.height > 0.0 {
            ((point.y - rect.top) / rect.height) * 100.0
        } else {
            50.0
        };
        Self {
            x_percent,
            y_percent,
            shift_x: (x_percent / 100.0 - 0.5) * 2.0,
            shift_y: (y_percent / 100.0 - 0.5) * 2.0,
        }
    }

    /// `--hover-*` custom properties for this glow.
    #[must_use]
    pub fn style_vars(self) -> [(&'static str, String); 4] {
        [
            ("--hover-x", format!("{:.2}%", self.x_percent)),
            ("--hover-y", format!("{:.2}%", self.y_percent)),
            ("--hover-shift-x", format!("{:.3}", self.shift_x)),
            ("--hover-shift-y", format!("{:.3}", self.shift_y)),
        ]
    }
}

/// Whole-grid parallax offset, each axis in -1..=1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxOffset {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

impl ParallaxOffset {
    /// No offset.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Offset for a pointer at `point` over a grid occupying `rect`;
    /// `None` when the grid has no area.
    #[must_use]
    pub fn at(rect: Rect, point: Point) -> Option<Self> {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return None;
        }
        let relative_x = ((point.x - rect.left) / rect.width - 0.5).clamp(-0.5, 0.5);
        let relative_y = ((point.y - rect.top) / rect.height - 0.5).clamp(-0.5, 0.5);
        Some(Self {
            x: relative_x * 2.0,
            y: relative_y * 2.0,
        })
    }

    /// True when both axes differ from `other` by less than `epsilon`.
    #[must_use]
    pub fn within(self, other: Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }

    /// `--grid-parallax-*` custom properties for this offset.
    #[must_use]
    pub fn style_vars(self) -> [(&'static str, String); 2] {
        [
            ("--grid-parallax-x", format!("{:.3}", self.x)),
            ("--grid-parallax-y", format!("{:.3}", self.y)),
        ]
    }
}

/// Kind of pointer producing a move event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse.
    Mouse,
    /// Pen or stylus.
    Pen,
    /// Touch; never drives parallax.
    Touch,
}

impl PointerKind {
    /// Parse a DOM `pointerType`; unknown types behave like a mouse.
    #[must_use]
    pub fn from_dom(pointer_type: &str) -> Self {
        match pointer_type {
            "touch" => Self::Touch,
            "pen" => Self::Pen,
            _ => Self::Mouse,
        }
    }
}

/// Coalesces parallax writes to at most one per animation frame.
#[derive(Clone, Debug, Default)]
pub(crate) struct ParallaxState {
    latest: ParallaxOffset,
    frame: Option<TaskHandle>,
}

impl ParallaxState {
    /// Record `next` if it moved by at least `epsilon`. Returns `true` when a
    /// frame must be scheduled to write it.
    pub(crate) fn request(&mut self, next: ParallaxOffset, epsilon: f64) -> bool {
        if next.within(self.latest, epsilon) {
            return false;
        }
        self.latest = next;
        self.frame.is_none()
    }

    pub(crate) const fn set_frame(&mut self, handle: TaskHandle) {
        self.frame = Some(handle);
    }

    /// Take the value to write if `handle` is the pending frame.
    pub(crate) fn flush(&mut self, handle: TaskHandle) -> Option<ParallaxOffset> {
        if self.frame != Some(handle) {
            return None;
        }
        self.frame = None;
        Some(self.latest)
    }

    /// Drop the pending frame, returning its handle for cancellation.
    pub(crate) const fn take_frame(&mut self) -> Option<TaskHandle> {
        self.frame.take()
    }

    pub(crate) fn reset(&mut self) {
        self.latest = ParallaxOffset::ZERO;
    }

    #[cfg(test)]
    pub(crate) const fn has_frame(&self) -> bool {
        self.frame.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_maps_pointer_to_percent_and_shift() {
        let glow = TileGlow::at(Rect::new(100.0, 100.0, 200.0, 100.0), Point::new(150.0, 175.0));
        assert!((glow.x_percent - 25.0).abs() < 1e-9);
        assert!((glow.y_percent - 75.0).abs() < 1e-9);
        assert!((glow.shift_x + 0.5).abs() < 1e-9);
        assert!((glow.shift_y - 0.5).abs() < 1e-9);
        assert_eq!(glow.style_vars()[2], ("--hover-shift-x", "-0.500".to_string()));
    }

    #[test]
    fn glow_on_empty_rect_stays_centered() {
        let glow = TileGlow::at(Rect::new(0.0, 0.0, 0.0, 0.0), Point::new(40.0, 40.0));
        assert_eq!(glow, TileGlow::NEUTRAL);
        assert_eq!(glow.style_vars()[0], ("--hover-x", "50.00%".to_string()));
    }

    #[test]
    fn parallax_is_clamped_to_unit_range() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let outside = ParallaxOffset::at(rect, Point::new(500.0, -500.0)).unwrap();
        assert_eq!(outside, ParallaxOffset { x: 1.0, y: -1.0 });
        let center = ParallaxOffset::at(rect, Point::new(50.0, 50.0)).unwrap();
        assert_eq!(center, ParallaxOffset::ZERO);
        assert_eq!(ParallaxOffset::at(Rect::new(0.0, 0.0, 0.0, 10.0), Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn parallax_requests_skip_tiny_moves_and_coalesce() {
        let mut state = ParallaxState::default();
        assert!(!state.request(ParallaxOffset { x: 0.001, y: 0.001 }, 0.002));
        assert!(state.request(ParallaxOffset { x: 0.5, y: 0.0 }, 0.002));
        state.set_frame(TaskHandle::new(1));
        assert!(!state.request(ParallaxOffset { x: 0.6, y: 0.1 }, 0.002));
        assert_eq!(state.flush(TaskHandle::new(2)), None);
        assert_eq!(
            state.flush(TaskHandle::new(1)),
            Some(ParallaxOffset { x: 0.6, y: 0.1 })
        );
        assert!(!state.has_frame());
    }

    #[test]
    fn pointer_kinds_parse_from_dom_names() {
        assert_eq!(PointerKind::from_dom("touch"), PointerKind::Touch);
        assert_eq!(PointerKind::from_dom("pen"), PointerKind::Pen);
        assert_eq!(PointerKind::from_dom("mouse"), PointerKind::Mouse);
        assert_eq!(PointerKind::from_dom(""), PointerKind::Mouse);
    }
}
