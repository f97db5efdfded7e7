use serde::{Deserialize, Serialize};

/// One data series. Which payload field applies depends on the chart
/// family: `values` for category charts, `xy_points` for scatter charts,
/// `points` for bubble charts. The builder picks the right one and warns on
/// a mismatch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesSpec {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub values: Option<Vec<f64>>,
    #[serde(default, alias = "xyPoints")]
    pub xy_points: Option<Vec<(f64, f64)>>,
    #[serde(default)]
    pub points: Option<Vec<(f64, f64, f64)>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegendSpec {
    #[serde(default)]
    pub visible: Option<bool>,
    /// "right" (default), "left", "top" or "bottom".
    #[serde(default)]
    pub position: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartFormattingSpec {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub legend: Option<LegendSpec>,
}

/// Payload of a `chart` shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    /// Chart type name, e.g. "COLUMN_CLUSTERED", "XY_SCATTER", "BUBBLE".
    #[serde(rename = "chartType", default)]
    pub chart_type: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub series: Vec<SeriesSpec>,
    #[serde(default)]
    pub formatting: Option<ChartFormattingSpec>,
}
