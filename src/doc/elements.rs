use serde::{Deserialize, Serialize};

use crate::doc::chart::Chart;
use crate::doc::common::{Point, Rect};
use crate::doc::fill::{Fill, Outline, Shadow};
use crate::doc::table::Table;
use crate::doc::text::TextBody;

/// Geometric preset of an auto shape.
///
/// A subset of the ECMA-376 preset geometry catalogue: the general-purpose
/// presets specs commonly request plus the full flowchart family used by the
/// flowchart engine's kind table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutoShapeKind {
    Rectangle,
    RoundedRectangle,
    Oval,
    Diamond,
    Parallelogram,
    Trapezoid,
    Triangle,
    RightTriangle,
    Pentagon,
    Hexagon,
    Octagon,
    Chevron,
    Arc,
    Cloud,
    Heart,
    LightningBolt,
    Star5,
    RightArrow,
    LeftArrow,
    UpArrow,
    DownArrow,
    FlowchartDocument,
    FlowchartPredefinedProcess,
    FlowchartInternalStorage,
    FlowchartManualInput,
    FlowchartManualOperation,
    FlowchartConnector,
    FlowchartOffpageConnector,
    FlowchartPreparation,
    FlowchartExtract,
    FlowchartMerge,
    FlowchartStoredData,
    FlowchartDelay,
    FlowchartAlternateProcess,
    FlowchartCard,
    FlowchartPunchedTape,
    FlowchartSummingJunction,
    FlowchartOr,
    FlowchartCollate,
    FlowchartSort,
    FlowchartMultidocument,
    FlowchartTerminator,
    FlowchartDisplay,
}

/// The routing style of a connector line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectorKind {
    #[default]
    Straight,
    Elbow,
    Curved,
}

/// A single action in a freeform path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PathAction {
    MoveTo,
    LineTo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathPoint {
    pub action: PathAction,
    pub at: Point,
}

/// A text box element. Defaults to no fill and no outline so it composes
/// invisibly over backgrounds; explicit spec styling overrides both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBoxElement {
    pub body: TextBody,
    pub fill: Fill,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<Outline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoShapeElement {
    pub kind: AutoShapeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<TextBody>,
    pub fill: Fill,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<Outline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

/// A picture element. Carries the resolved source location; the asset bytes
/// themselves are fetched for validation but not embedded in the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureElement {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<Outline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

/// A connector between two absolute points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorElement {
    pub kind: ConnectorKind,
    pub begin: Point,
    pub end: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<Outline>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeformElement {
    pub path: Vec<PathPoint>,
    pub fill: Fill,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<Outline>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupElement {
    pub children: Vec<Element>,
}

/// The specific kind of element and its properties. The JSON representation
/// uses the variant name as the key (e.g. `"textBox": {...}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    TextBox(TextBoxElement),
    AutoShape(AutoShapeElement),
    Picture(PictureElement),
    Chart(Chart),
    Table(Table),
    Connector(ConnectorElement),
    Freeform(FreeformElement),
    Group(GroupElement),
}

/// A visual element rendered on a slide at a resolved rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub rect: Rect,
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    pub fn new(rect: Rect, kind: ElementKind) -> Self {
        Self { rect, kind }
    }
}
