use serde::{Deserialize, Serialize};

use crate::doc::colors::Color;
use crate::doc::common::Length;

/// One stop of a gradient fill. Positions are normalized to 0..=1 and kept
/// in ascending order by the style resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientStop {
    pub position: f64,
    pub color: Color,
}

/// A resolved shape or background fill.
///
/// `None` is an explicit "no fill" (the shape is transparent), distinct from
/// a spec that omitted the fill entirely; omission is resolved to a
/// per-shape-kind default before this type is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Fill {
    None,
    Solid { color: Color },
    Gradient { stops: Vec<GradientStop> },
    Pattern { pattern: String, fore: Color, back: Color },
    Picture { source: String },
}

/// The dash pattern of an outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DashStyle {
    #[default]
    Solid,
    Dot,
    Dash,
    DashDot,
    LongDash,
    LongDashDot,
}

/// A resolved line / border style. Absence of an `Outline` on an element
/// means the element draws no border at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outline {
    pub color: Color,
    /// Line weight. Stored like every other length in EMU; specs give points.
    pub weight: Length,
    #[serde(default)]
    pub dash: DashStyle,
}

/// Placement of a drop shadow relative to its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShadowKind {
    #[default]
    Outer,
    Inner,
}

/// A resolved shadow effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub kind: ShadowKind,
    pub visible: bool,
    pub color: Color,
}
