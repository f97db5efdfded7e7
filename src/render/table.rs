//! Table construction: positional cell fill, then, in order, column
//! widths, row heights, merges, per-cell overrides, header styling and
//! banding. A failing merge is logged and skipped; the remaining merges
//! still apply.

use crate::diagnostics::{DiagnosticContext, Diagnostics};
use crate::doc::common::Length;
use crate::doc::table::{CellMerge, Table, TableCell};
use crate::doc::text::TextBody;
use crate::render::style::StyleResolver;
use crate::spec::table::{CellSpec, MergeSpec, TablePayload};

pub fn build_table(
    payload: &TablePayload,
    resolver: &StyleResolver,
    ctx: &DiagnosticContext,
    diags: &mut Diagnostics,
) -> Table {
    let rows = payload.rows;
    let cols = payload.cols;
    let mut table = Table {
        rows,
        cols,
        cells: vec![TableCell::default(); rows * cols],
        column_widths: None,
        row_heights: None,
        merges: Vec::new(),
    };

    // Positional fill. Data beyond the declared grid is ignored, not an
    // error.
    for (row_idx, row_data) in payload.data.iter().take(rows).enumerate() {
        for (col_idx, cell_data) in row_data.iter().take(cols).enumerate() {
            let Some(cell) = table.cell_mut(row_idx, col_idx) else {
                continue;
            };
            match cell_data {
                CellSpec::Text(text) => {
                    cell.body = TextBody::from_plain(text.clone());
                }
                CellSpec::Styled { text, font, fill } => {
                    let mut body = TextBody::from_plain(text.clone().unwrap_or_default());
                    if let Some(font) = font {
                        let resolved = resolver.resolve_font(font, ctx, diags);
                        for paragraph in &mut body.paragraphs {
                            for run in &mut paragraph.runs {
                                run.font = resolved.clone();
                            }
                        }
                    }
                    cell.body = body;
                    if let Some(fill) = fill {
                        cell.fill = Some(resolver.resolve_fill(
                            Some(fill),
                            crate::doc::fill::Fill::None,
                            ctx,
                            diags,
                        ));
                    }
                }
            }
        }
    }

    // Column widths and row heights, applied positionally; extra entries
    // are ignored.
    if let Some(widths) = &payload.col_widths {
        table.column_widths = Some(
            widths
                .iter()
                .take(cols)
                .map(|w| Length::from_inches(*w))
                .collect(),
        );
    }
    if let Some(heights) = &payload.row_heights {
        table.row_heights = Some(
            heights
                .iter()
                .take(rows)
                .map(|h| Length::from_inches(*h))
                .collect(),
        );
    }

    // Merges. Out-of-range coordinates skip that merge only.
    for merge in &payload.merged_cells {
        apply_merge(&mut table, merge, ctx, diags);
    }

    // Per-cell style overrides.
    for style in &payload.cell_styles {
        if style.row >= rows || style.col >= cols {
            diags.warn(
                ctx.clone(),
                format!(
                    "cell style targets ({}, {}) outside a {}x{} table, skipping",
                    style.row, style.col, rows, cols
                ),
            );
            continue;
        }
        let font = style
            .font
            .as_ref()
            .map(|f| resolver.resolve_font(f, ctx, diags));
        let fill = style.fill.as_ref().map(|f| {
            resolver.resolve_fill(Some(f), crate::doc::fill::Fill::None, ctx, diags)
        });
        if let Some(cell) = table.cell_mut(style.row, style.col) {
            if let Some(font) = font {
                for paragraph in &mut cell.body.paragraphs {
                    for run in &mut paragraph.runs {
                        run.font = font.clone();
                    }
                }
            }
            if fill.is_some() {
                cell.fill = fill;
            }
        }
    }

    // Header-row styling applies to every cell of row 0.
    if let Some(header) = &payload.header_row {
        let font = header
            .font
            .as_ref()
            .map(|f| resolver.resolve_font(f, ctx, diags));
        let fill = header.fill.as_ref().map(|f| {
            resolver.resolve_fill(Some(f), crate::doc::fill::Fill::None, ctx, diags)
        });
        for col in 0..cols {
            if let Some(cell) = table.cell_mut(0, col) {
                if let Some(font) = &font {
                    for paragraph in &mut cell.body.paragraphs {
                        for run in &mut paragraph.runs {
                            run.font = font.clone();
                        }
                    }
                }
                if let Some(fill) = &fill {
                    cell.fill = Some(fill.clone());
                }
            }
        }
    }

    // Banding: fill odd bands, leave even bands (and already-filled cells)
    // untouched.
    if let Some(banding) = &payload.banding {
        let fill = resolver.resolve_fill(
            Some(&banding.fill),
            crate::doc::fill::Fill::None,
            ctx,
            diags,
        );
        match banding.direction.as_str() {
            "rows" => {
                for row in (1..rows).step_by(2) {
                    for col in 0..cols {
                        if let Some(cell) = table.cell_mut(row, col) {
                            if cell.fill.is_none() {
                                cell.fill = Some(fill.clone());
                            }
                        }
                    }
                }
            }
            "columns" => {
                for col in (1..cols).step_by(2) {
                    for row in 0..rows {
                        if let Some(cell) = table.cell_mut(row, col) {
                            if cell.fill.is_none() {
                                cell.fill = Some(fill.clone());
                            }
                        }
                    }
                }
            }
            other => diags.warn(
                ctx.clone(),
                format!("unknown banding direction '{}', skipping banding", other),
            ),
        }
    }

    table
}

fn apply_merge(
    table: &mut Table,
    merge: &MergeSpec,
    ctx: &DiagnosticContext,
    diags: &mut Diagnostics,
) {
    let valid = merge.from_row <= merge.to_row
        && merge.from_col <= merge.to_col
        && merge.to_row < table.rows
        && merge.to_col < table.cols;
    if !valid {
        diags.warn(
            ctx.clone(),
            format!(
                "merge ({},{})-({},{}) out of range for {}x{} table, skipping",
                merge.from_row,
                merge.from_col,
                merge.to_row,
                merge.to_col,
                table.rows,
                table.cols
            ),
        );
        return;
    }

    let row_span = (merge.to_row - merge.from_row + 1) as u32;
    let col_span = (merge.to_col - merge.from_col + 1) as u32;
    for row in merge.from_row..=merge.to_row {
        for col in merge.from_col..=merge.to_col {
            if let Some(cell) = table.cell_mut(row, col) {
                if row == merge.from_row && col == merge.from_col {
                    cell.row_span = row_span;
                    cell.column_span = col_span;
                } else {
                    cell.row_span = 0;
                    cell.column_span = 0;
                }
            }
        }
    }
    table.merges.push(CellMerge {
        from_row: merge.from_row,
        from_col: merge.from_col,
        to_row: merge.to_row,
        to_col: merge.to_col,
    });
}
