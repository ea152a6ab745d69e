//! ZIP packaging of exported tables.

use super::csv::{csv_file_name, table_to_csv};
use crate::error::Result;
use crate::model::TablePack;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Name of the JSON snapshot inside the archive.
const TABLES_JSON: &str = "tables.json";

/// Package all table packs into a ZIP archive.
///
/// The archive holds `tables.json` (pretty JSON of every pack) plus one
/// CSV file per pack, named `NN_<safe-title>.csv` with a 1-based index.
pub fn tables_archive(tables: &[TablePack]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    writer.start_file(TABLES_JSON, options)?;
    writer.write_all(serde_json::to_string_pretty(tables)?.as_bytes())?;

    for (idx, pack) in tables.iter().enumerate() {
        let index = idx + 1;
        writer.start_file(csv_file_name(index, &pack.title), options)?;
        writer.write_all(&table_to_csv(pack)?)?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}
