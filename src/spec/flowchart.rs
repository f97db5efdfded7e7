use serde::{Deserialize, Serialize};

use crate::spec::style::{FillSpec, FontSpec, LineSpec, StyleSpec};

/// One node of a flowchart. Ids are scoped to the enclosing flowchart
/// instance; two flowcharts on the same slide may reuse the same ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowchartElementSpec {
    pub id: String,
    /// Node kind: "start", "end", "process", "decision", "data",
    /// "document", ... Unknown kinds fall back to the default style and a
    /// rectangle geometry.
    #[serde(rename = "flowchart_type", alias = "kind", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "default_width")]
    pub w: f64,
    #[serde(default = "default_height")]
    pub h: f64,
    #[serde(flatten)]
    pub style: StyleSpec,
}

fn default_width() -> f64 {
    2.0
}

fn default_height() -> f64 {
    1.0
}

impl FlowchartElementSpec {
    /// A bare element with id, kind and text; geometry comes from one of
    /// the layout helpers.
    pub fn new(id: impl Into<String>, kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: Some(kind.into()),
            text: Some(text.into()),
            x: 0.0,
            y: 0.0,
            w: default_width(),
            h: default_height(),
            style: StyleSpec::default(),
        }
    }
}

/// Label configuration for a connection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelConfigSpec {
    /// Label box width in inches (default 1.0).
    #[serde(default)]
    pub w: Option<f64>,
    /// Label box height in inches (default 0.3).
    #[serde(default)]
    pub h: Option<f64>,
    #[serde(default)]
    pub font: Option<FontSpec>,
    #[serde(default)]
    pub background: Option<FillSpec>,
}

/// A connection between two flowchart elements, referenced by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionSpec {
    #[serde(rename = "from")]
    pub from_id: String,
    #[serde(rename = "to")]
    pub to_id: String,
    /// Side token on the source shape; defaults to "bottom".
    #[serde(default)]
    pub from_side: Option<String>,
    /// Side token on the target shape; defaults to "top".
    #[serde(default)]
    pub to_side: Option<String>,
    /// "STRAIGHT" (default), "ELBOW" or "CURVED".
    #[serde(default)]
    pub connector_type: Option<String>,
    #[serde(default)]
    pub line: Option<LineSpec>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub label_config: Option<LabelConfigSpec>,
}

impl ConnectionSpec {
    pub fn new(from_id: impl Into<String>, to_id: impl Into<String>) -> Self {
        Self {
            from_id: from_id.into(),
            to_id: to_id.into(),
            from_side: None,
            to_side: None,
            connector_type: None,
            line: None,
            label: None,
            label_config: None,
        }
    }
}

/// Payload of a `flowchart` shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowchartPayload {
    #[serde(default)]
    pub elements: Vec<FlowchartElementSpec>,
    #[serde(default)]
    pub connections: Vec<ConnectionSpec>,
}
