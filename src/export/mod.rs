//! Export backends: JSON snapshot, per-table CSV, and ZIP packaging.

mod archive;
mod csv;
mod json;

pub use self::archive::tables_archive;
pub use self::csv::{csv_file_name, table_to_csv};
pub use self::json::{to_json, JsonFormat};
