//! Coordinate helpers for connector routing and unit conversion.
//!
//! All math here runs on plain f64 inch values and is exact: repeated calls
//! over the same rectangle always produce identical points, which the
//! flowchart engine relies on when routing several connectors to one shape.

use crate::doc::common::CM_PER_INCH;

/// A shape rectangle in inch coordinates, as registered by the flowchart
/// engine. Width and height are non-negative; zero is a legal degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InchRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl InchRect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// A named anchor on a rectangle's boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

impl Side {
    /// Parses a side token. Returns `None` for unrecognized tokens so the
    /// caller can warn and fall back to [`Side::Center`].
    pub fn parse(token: &str) -> Option<Side> {
        match token {
            "top" => Some(Side::Top),
            "bottom" => Some(Side::Bottom),
            "left" => Some(Side::Left),
            "right" => Some(Side::Right),
            "top-left" => Some(Side::TopLeft),
            "top-right" => Some(Side::TopRight),
            "bottom-left" => Some(Side::BottomLeft),
            "bottom-right" => Some(Side::BottomRight),
            "center" => Some(Side::Center),
            _ => None,
        }
    }
}

/// Computes the connection endpoint for a side of a rectangle.
///
/// Edges anchor at their midpoint, corners at the literal corner, and
/// [`Side::Center`] at the rectangle's center.
pub fn connection_point(rect: InchRect, side: Side) -> (f64, f64) {
    match side {
        Side::Top => (rect.x + rect.w / 2.0, rect.y),
        Side::Bottom => (rect.x + rect.w / 2.0, rect.y + rect.h),
        Side::Left => (rect.x, rect.y + rect.h / 2.0),
        Side::Right => (rect.x + rect.w, rect.y + rect.h / 2.0),
        Side::TopLeft => (rect.x, rect.y),
        Side::TopRight => (rect.x + rect.w, rect.y),
        Side::BottomLeft => (rect.x, rect.y + rect.h),
        Side::BottomRight => (rect.x + rect.w, rect.y + rect.h),
        Side::Center => rect.center(),
    }
}

/// Midpoint of the segment between two points.
pub fn midpoint(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}

/// Converts centimeters to inches at the fixed 2.54 cm/inch ratio.
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: InchRect = InchRect {
        x: 2.0,
        y: 1.0,
        w: 4.0,
        h: 2.0,
    };

    #[test]
    fn edge_midpoints() {
        assert_eq!(connection_point(R, Side::Top), (4.0, 1.0));
        assert_eq!(connection_point(R, Side::Bottom), (4.0, 3.0));
        assert_eq!(connection_point(R, Side::Left), (2.0, 2.0));
        assert_eq!(connection_point(R, Side::Right), (6.0, 2.0));
    }

    #[test]
    fn corners_are_literal() {
        assert_eq!(connection_point(R, Side::TopLeft), (2.0, 1.0));
        assert_eq!(connection_point(R, Side::TopRight), (6.0, 1.0));
        assert_eq!(connection_point(R, Side::BottomLeft), (2.0, 3.0));
        assert_eq!(connection_point(R, Side::BottomRight), (6.0, 3.0));
    }

    #[test]
    fn unknown_token_maps_to_center_by_caller() {
        assert_eq!(Side::parse("diagonal"), None);
        assert_eq!(connection_point(R, Side::Center), (4.0, 2.0));
    }

    #[test]
    fn degenerate_rect_does_not_break() {
        let r = InchRect::new(1.0, 1.0, 0.0, 0.0);
        assert_eq!(connection_point(r, Side::Bottom), (1.0, 1.0));
        assert_eq!(connection_point(r, Side::Center), (1.0, 1.0));
    }

    #[test]
    fn repeated_calls_are_exact() {
        let first = connection_point(R, Side::Right);
        for _ in 0..100 {
            assert_eq!(connection_point(R, Side::Right), first);
        }
    }

    #[test]
    fn cm_conversion() {
        assert!((cm_to_inches(25.4) - 10.0).abs() < 1e-12);
    }
}
