use serde::{Deserialize, Serialize};

use crate::doc::common::Length;
use crate::doc::fill::Fill;
use crate::doc::text::TextBody;

/// One cell of a rendered table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    #[serde(default, skip_serializing_if = "is_default_body")]
    pub body: TextBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
    /// Number of grid columns this cell spans. 1 for normal cells; 0 for a
    /// cell swallowed by a merge (its content is carried by the origin cell).
    #[serde(default = "one")]
    pub column_span: u32,
    #[serde(default = "one")]
    pub row_span: u32,
}

fn one() -> u32 {
    1
}

fn is_default_body(body: &TextBody) -> bool {
    *body == TextBody::default()
}

impl Default for TableCell {
    fn default() -> Self {
        TableCell {
            body: TextBody::default(),
            fill: None,
            column_span: 1,
            row_span: 1,
        }
    }
}

impl TableCell {
    pub fn is_merged_away(&self) -> bool {
        self.column_span == 0 && self.row_span == 0
    }
}

/// An applied cell merge: the inclusive range of grid coordinates it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellMerge {
    pub from_row: usize,
    pub from_col: usize,
    pub to_row: usize,
    pub to_col: usize,
}

/// A table element: a rows × cols grid of cells plus layout metadata.
///
/// `cells` always holds exactly `rows * cols` entries in row-major order,
/// including cells swallowed by merges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<TableCell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_widths: Option<Vec<Length>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_heights: Option<Vec<Length>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub merges: Vec<CellMerge>,
}

impl Table {
    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut TableCell> {
        if row < self.rows && col < self.cols {
            self.cells.get_mut(row * self.cols + col)
        } else {
            None
        }
    }
}
