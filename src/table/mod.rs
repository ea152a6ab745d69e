//! Table cleaning pipeline: raw grid → rectangular grid → header-resolved
//! table → post-processed table.

mod normalize;
mod postprocess;

pub use normalize::{grid_to_table, make_unique_columns, normalize_grid};
pub use postprocess::postprocess_table;

use crate::model::{CleanTable, RawGrid};

/// Run the full cleaning pipeline over one raw grid.
///
/// Returns `None` when nothing meaningful survives normalization.
pub fn clean_grid(raw: &RawGrid) -> Option<CleanTable> {
    let grid = normalize_grid(raw);
    if grid.is_empty() {
        return None;
    }
    let mut table = grid_to_table(grid);
    postprocess_table(&mut table);
    if table.is_empty() {
        return None;
    }
    Some(table)
}
