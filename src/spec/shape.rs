use serde::{Deserialize, Serialize};

use crate::spec::chart::ChartPayload;
use crate::spec::flowchart::FlowchartPayload;
use crate::spec::style::{
    FillSpec, FontSpec, LineSpec, ParagraphSpec, ShadowSpec, StyleSpec, TextFrameSpec,
};
use crate::spec::table::TablePayload;

/// Position and size of a shape, in inches. Missing fields fall back to
/// engine defaults rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "default_width")]
    pub w: f64,
    #[serde(default = "default_height")]
    pub h: f64,
}

fn default_width() -> f64 {
    4.0
}

fn default_height() -> f64 {
    1.0
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry {
            x: 0.0,
            y: 0.0,
            w: default_width(),
            h: default_height(),
        }
    }
}

/// A run of rich text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSpec {
    pub text: String,
    #[serde(default)]
    pub font: Option<FontSpec>,
    #[serde(default)]
    pub hyperlink: Option<String>,
}

/// A paragraph of rich text: ordered runs plus optional paragraph styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichParagraphSpec {
    pub runs: Vec<RunSpec>,
    #[serde(default)]
    pub font: Option<FontSpec>,
    #[serde(flatten)]
    pub paragraph: ParagraphSpec,
}

/// Text content of a text shape: a plain string, an ordered list of
/// paragraph strings, or a rich paragraphs→runs tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextContentSpec {
    Plain(String),
    Paragraphs(Vec<String>),
    Rich(Vec<RichParagraphSpec>),
}

impl Default for TextContentSpec {
    fn default() -> Self {
        TextContentSpec::Plain(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextShape {
    #[serde(flatten)]
    pub geometry: Geometry,
    #[serde(default)]
    pub text: TextContentSpec,
    #[serde(default)]
    pub paragraph: Option<ParagraphSpec>,
    #[serde(default)]
    pub text_frame: Option<TextFrameSpec>,
    #[serde(flatten)]
    pub style: StyleSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletShape {
    #[serde(flatten)]
    pub geometry: Geometry,
    #[serde(default)]
    pub items: Vec<String>,
    /// Indent level applied to every item.
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub paragraph: Option<ParagraphSpec>,
    #[serde(default)]
    pub text_frame: Option<TextFrameSpec>,
    #[serde(flatten)]
    pub style: StyleSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageShape {
    #[serde(flatten)]
    pub geometry: Geometry,
    /// Local path (resolved against the assets base directory) or URL.
    pub path: String,
    #[serde(default)]
    pub line: Option<LineSpec>,
    #[serde(default)]
    pub shadow: Option<ShadowSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartShape {
    #[serde(flatten)]
    pub geometry: Geometry,
    #[serde(flatten)]
    pub chart: ChartPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableShape {
    #[serde(flatten)]
    pub geometry: Geometry,
    #[serde(flatten)]
    pub table: TablePayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoShape {
    #[serde(flatten)]
    pub geometry: Geometry,
    /// Preset name, e.g. "RECTANGLE", "OVAL", "DIAMOND". Unknown names are
    /// skipped with a diagnostic.
    #[serde(default)]
    pub shape_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(flatten)]
    pub style: StyleSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorShape {
    #[serde(flatten)]
    pub geometry: Geometry,
    /// "STRAIGHT" (default), "ELBOW" or "CURVED".
    #[serde(default)]
    pub connector_type: Option<String>,
    #[serde(default)]
    pub line: Option<LineSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowchartShape {
    #[serde(flatten)]
    pub geometry: Geometry,
    #[serde(flatten)]
    pub flowchart: FlowchartPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupShape {
    #[serde(flatten)]
    pub geometry: Geometry,
    #[serde(default)]
    pub shapes: Vec<ShapeNode>,
}

/// One point of a freeform path. The action describes how the path reaches
/// this point; the first point is always treated as a move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeformPointSpec {
    pub x: f64,
    pub y: f64,
    /// "move_to", "line_to" or "curve_to".
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeformShape {
    #[serde(flatten)]
    pub geometry: Geometry,
    #[serde(default)]
    pub points: Vec<FreeformPointSpec>,
    #[serde(default)]
    pub fill: Option<FillSpec>,
    #[serde(default)]
    pub line: Option<LineSpec>,
}

/// The closed union of shape kinds. Dispatch over this type is exhaustive;
/// adding a kind is a compile-time decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeSpec {
    Text(TextShape),
    Bullet(BulletShape),
    Image(ImageShape),
    Chart(ChartShape),
    Table(TableShape),
    Autoshape(AutoShape),
    Connector(ConnectorShape),
    Flowchart(FlowchartShape),
    Group(GroupShape),
    Freeform(FreeformShape),
}

/// A shape entry as parsed from a slide's shape list.
///
/// Deserialization tries the typed union first and falls back to the raw
/// JSON value: an unknown `type` tag, a malformed payload, or a non-object
/// entry is reported and skipped at dispatch time instead of failing the
/// whole specification parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShapeNode {
    Known(Box<ShapeSpec>),
    Unknown(serde_json::Value),
}

impl ShapeNode {
    /// The `type` tag of an unknown entry, when it has one.
    pub fn raw_kind(&self) -> Option<&str> {
        match self {
            ShapeNode::Known(_) => None,
            ShapeNode::Unknown(value) => value.get("type").and_then(|v| v.as_str()),
        }
    }
}
