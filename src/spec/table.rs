use serde::{Deserialize, Serialize};

use crate::spec::style::{FillSpec, FontSpec};

/// A table cell as written in a specification: either a bare string or an
/// object carrying text plus cell-level styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellSpec {
    Text(String),
    Styled {
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        font: Option<FontSpec>,
        #[serde(default)]
        fill: Option<FillSpec>,
    },
}

/// An inclusive cell range to merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSpec {
    pub from_row: usize,
    pub from_col: usize,
    pub to_row: usize,
    pub to_col: usize,
}

/// A style override addressed to one cell coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellStyleSpec {
    pub row: usize,
    pub col: usize,
    #[serde(default)]
    pub font: Option<FontSpec>,
    #[serde(default)]
    pub fill: Option<FillSpec>,
}

/// Styling applied to every cell of row 0.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeaderRowSpec {
    #[serde(default)]
    pub fill: Option<FillSpec>,
    #[serde(default)]
    pub font: Option<FontSpec>,
}

/// Alternating-band styling. Bands are counted from index 0; the fill is
/// applied to odd bands (1, 3, 5, ...), leaving even bands untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandingSpec {
    /// "rows" or "columns".
    pub direction: String,
    pub fill: FillSpec,
}

/// Payload of a `table` shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablePayload {
    #[serde(default = "default_dim")]
    pub rows: usize,
    #[serde(default = "default_dim")]
    pub cols: usize,
    #[serde(default)]
    pub data: Vec<Vec<CellSpec>>,
    /// Column widths in inches, applied positionally.
    #[serde(default, alias = "colWidths")]
    pub col_widths: Option<Vec<f64>>,
    /// Row heights in inches, applied positionally.
    #[serde(default, alias = "rowHeights")]
    pub row_heights: Option<Vec<f64>>,
    #[serde(default, alias = "mergedCells")]
    pub merged_cells: Vec<MergeSpec>,
    #[serde(default, alias = "cellStyles")]
    pub cell_styles: Vec<CellStyleSpec>,
    #[serde(default, alias = "headerRow")]
    pub header_row: Option<HeaderRowSpec>,
    #[serde(default)]
    pub banding: Option<BandingSpec>,
}

fn default_dim() -> usize {
    2
}
