//! Raw grid normalization and header resolution.
//!
//! Detected table boundaries are rarely perfect: rows come back jagged,
//! cells may be `None`, and whole rows or columns can be empty. This stage
//! turns such a grid into a rectangular one with only meaningful rows and
//! columns, then resolves a header row into unique column names.

use crate::model::CleanTable;
use crate::text::clean;

/// Normalize a raw grid into a rectangular grid of cleaned cells.
///
/// Drops null and fully-empty rows, right-pads every row with empty strings
/// to the maximum width, and removes columns that are empty across every
/// row. Lossless with respect to non-empty content. Returns an empty grid
/// when nothing survives; callers skip those.
pub fn normalize_grid(raw: &[Vec<Option<String>>]) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut max_cols = 0usize;

    for row in raw {
        let cleaned: Vec<String> = row
            .iter()
            .map(|cell| clean(cell.as_deref().unwrap_or("")))
            .collect();
        if cleaned.iter().all(|c| c.is_empty()) {
            continue;
        }
        max_cols = max_cols.max(cleaned.len());
        rows.push(cleaned);
    }

    if rows.is_empty() || max_cols == 0 {
        return Vec::new();
    }

    for row in &mut rows {
        row.resize(max_cols, String::new());
    }

    let keep: Vec<usize> = (0..max_cols)
        .filter(|&j| rows.iter().any(|r| !r[j].is_empty()))
        .collect();
    if keep.is_empty() {
        return Vec::new();
    }

    rows.iter()
        .map(|row| keep.iter().map(|&j| row[j].clone()).collect())
        .collect()
}

/// Make column names unique and non-empty.
///
/// Blank names become `col`; a repeated name gets a `_<k>` suffix counting
/// from its second occurrence.
pub fn make_unique_columns(columns: &[String]) -> Vec<String> {
    let mut seen: Vec<(String, usize)> = Vec::new();
    let mut out = Vec::with_capacity(columns.len());
    for col in columns {
        let base = {
            let c = clean(col);
            if c.is_empty() {
                "col".to_string()
            } else {
                c
            }
        };
        if let Some(entry) = seen.iter_mut().find(|(name, _)| *name == base) {
            entry.1 += 1;
            out.push(format!("{}_{}", base, entry.1));
        } else {
            seen.push((base.clone(), 1));
            out.push(base);
        }
    }
    out
}

/// Resolve a normalized grid into a [`CleanTable`] with a header.
///
/// A single-row grid becomes a one-row table with positional column names.
/// Otherwise row 0 is the header candidate: it is accepted when at least
/// half its cells are non-empty (blank header cells synthesize `col_<n>`),
/// else all rows stay data rows under positional names. This tolerates
/// tables whose visual header row was not detected as distinct from data.
pub fn grid_to_table(grid: Vec<Vec<String>>) -> CleanTable {
    if grid.is_empty() {
        return CleanTable::default();
    }

    if grid.len() == 1 {
        let row = grid.into_iter().next().unwrap();
        let columns = positional_columns(row.len());
        return CleanTable::new(columns, vec![row]);
    }

    let header = &grid[0];
    let non_empty = header.iter().filter(|c| !c.is_empty()).count();
    if non_empty >= std::cmp::max(1, header.len() / 2) {
        let columns: Vec<String> = header
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if h.is_empty() {
                    format!("col_{}", i + 1)
                } else {
                    h.clone()
                }
            })
            .collect();
        let columns = make_unique_columns(&columns);
        CleanTable::new(columns, grid[1..].to_vec())
    } else {
        let columns = positional_columns(header.len());
        CleanTable::new(columns, grid)
    }
}

fn positional_columns(width: usize) -> Vec<String> {
    (0..width).map(|i| format!("col_{}", i + 1)).collect()
}
