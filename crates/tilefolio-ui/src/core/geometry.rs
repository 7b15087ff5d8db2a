//! Plain geometry values passed between the DOM layer and the engines.

/// Point in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal offset from the viewport's left edge.
    pub x: f64,
    /// Vertical offset from the viewport's top edge.
    pub y: f64,
}

impl Point {
    /// Construct a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned rectangle in viewport pixels (a `getBoundingClientRect` snapshot).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Construct a rectangle.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Center point.
    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Visible viewport size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Inner width.
    pub width: f64,
    /// Inner height.
    pub height: f64,
}

impl Viewport {
    /// Size assumed before the window can be measured.
    pub const FALLBACK: Self = Self::new(1280.0, 720.0);

    /// Construct a viewport.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Viewport center, the ripple origin when none is supplied.
    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Distance from `origin` to the farthest viewport corner.
    #[must_use]
    pub fn farthest_corner_distance(self, origin: Point) -> f64 {
        [
            Point::new(0.0, 0.0),
            Point::new(self.width, 0.0),
            Point::new(0.0, self.height),
            Point::new(self.width, self.height),
        ]
        .into_iter()
        .map(|corner| origin.distance_to(corner))
        .fold(0.0, f64::max)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::FALLBACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn farthest_corner_from_center_is_half_diagonal() {
        let viewport = Viewport::new(300.0, 400.0);
        let radius = viewport.farthest_corner_distance(viewport.center());
        assert!((radius - 250.0).abs() < 1e-9);
    }

    #[test]
    fn farthest_corner_from_top_left_is_full_diagonal() {
        let viewport = Viewport::new(300.0, 400.0);
        let radius = viewport.farthest_corner_distance(Point::new(0.0, 0.0));
        assert!((radius - 500.0).abs() < 1e-9);
    }

    #[test]
    fn rect_center_is_midpoint() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.center(), Point::new(60.0, 45.0));
    }
}
