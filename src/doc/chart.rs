use serde::{Deserialize, Serialize};

/// The chart types the engine knows how to populate.
///
/// Grouped into three data families; the family decides which series payload
/// the builder expects (categories+values, xy points, or bubble points).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChartKind {
    ColumnClustered,
    ColumnStacked,
    BarClustered,
    BarStacked,
    Line,
    LineMarkers,
    Pie,
    Doughnut,
    Area,
    AreaStacked,
    Radar,
    XyScatter,
    XyScatterLines,
    Bubble,
}

/// Which series payload a [`ChartKind`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFamily {
    Category,
    Xy,
    Bubble,
}

impl ChartKind {
    pub fn family(self) -> ChartFamily {
        match self {
            ChartKind::XyScatter | ChartKind::XyScatterLines => ChartFamily::Xy,
            ChartKind::Bubble => ChartFamily::Bubble,
            _ => ChartFamily::Category,
        }
    }
}

/// A named series of plain values plotted against shared categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// A named series of (x, y) points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XySeries {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

/// A named series of (x, y, size) points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BubbleSeries {
    pub name: String,
    pub points: Vec<(f64, f64, f64)>,
}

/// Prepared chart data, one variant per family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartData {
    Category {
        categories: Vec<String>,
        series: Vec<CategorySeries>,
    },
    Xy {
        series: Vec<XySeries>,
    },
    Bubble {
        series: Vec<BubbleSeries>,
    },
}

/// Where the legend is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegendPosition {
    #[default]
    Right,
    Left,
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub visible: bool,
    #[serde(default)]
    pub position: LegendPosition,
}

/// A chart element with its kind, prepared data and optional furniture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub kind: ChartKind,
    pub data: ChartData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}
