use serde::{Deserialize, Serialize};

/// English Metric Units per inch. 1 EMU = 1/914400 inch = 1/360000 cm.
pub const EMU_PER_INCH: f64 = 914_400.0;
/// English Metric Units per centimeter.
pub const EMU_PER_CM: f64 = 360_000.0;
/// English Metric Units per point (1 pt = 1/72 inch).
pub const EMU_PER_PT: f64 = 12_700.0;
/// Centimeters per inch, the fixed conversion ratio.
pub const CM_PER_INCH: f64 = 2.54;

/// A physical length stored in English Metric Units.
///
/// All geometry in the rendered document is resolved to EMU; the spec-side
/// inch values are converted exactly once, at element construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Length(pub i64);

impl Length {
    pub const ZERO: Length = Length(0);

    pub fn from_inches(inches: f64) -> Self {
        Length((inches * EMU_PER_INCH).round() as i64)
    }

    pub fn from_cm(cm: f64) -> Self {
        Length((cm * EMU_PER_CM).round() as i64)
    }

    pub fn from_points(pt: f64) -> Self {
        Length((pt * EMU_PER_PT).round() as i64)
    }

    pub fn emu(self) -> i64 {
        self.0
    }

    pub fn inches(self) -> f64 {
        self.0 as f64 / EMU_PER_INCH
    }

    pub fn points(self) -> f64 {
        self.0 as f64 / EMU_PER_PT
    }
}

/// A 2D position in the document coordinate space. Origin is the slide's
/// top-left corner; Y increases downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub x: Length,
    pub y: Length,
}

impl Point {
    pub fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }

    pub fn from_inches(x: f64, y: f64) -> Self {
        Self {
            x: Length::from_inches(x),
            y: Length::from_inches(y),
        }
    }
}

/// An axis-aligned rectangle. Width and height are non-negative; zero is
/// legal and denotes a degenerate shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub x: Length,
    pub y: Length,
    pub width: Length,
    pub height: Length,
}

impl Rect {
    pub fn new(x: Length, y: Length, width: Length, height: Length) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_inches(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x: Length::from_inches(x),
            y: Length::from_inches(y),
            width: Length::from_inches(w),
            height: Length::from_inches(h),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inch_round_trip() {
        let l = Length::from_inches(2.5);
        assert_eq!(l.emu(), 2_286_000);
        assert!((l.inches() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn cm_matches_inch_ratio() {
        // 2.54 cm and 1 inch are the same physical length.
        assert_eq!(Length::from_cm(2.54), Length::from_inches(1.0));
    }

    #[test]
    fn points_convert_exactly() {
        assert_eq!(Length::from_points(72.0), Length::from_inches(1.0));
    }
}
