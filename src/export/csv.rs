//! Per-table CSV serialization.
//!
//! One delimited file per [`TablePack`], UTF-8 with a byte-order marker so
//! spreadsheet applications pick the right encoding for CJK content.

use crate::error::Result;
use crate::model::TablePack;
use crate::parse::DIRECTION_COLUMN;
use crate::text::clean;

/// UTF-8 byte-order marker prepended to every CSV file.
const BOM: &[u8] = b"\xef\xbb\xbf";

/// Serialize one table pack to CSV bytes.
///
/// When the pack carries a non-empty direction and its columns do not
/// already include its direction column (the name is per-pack, so renamed
/// columns from injected rules are recognized), a leading direction column
/// with the pack-level value is inserted.
pub fn table_to_csv(pack: &TablePack) -> Result<Vec<u8>> {
    let direction = clean(&pack.direction);
    let column_name = if pack.direction_column.is_empty() {
        DIRECTION_COLUMN
    } else {
        pack.direction_column.as_str()
    };
    let prepend_direction =
        !direction.is_empty() && !pack.columns.iter().any(|c| c == column_name);

    let mut writer = csv::Writer::from_writer(Vec::new());

    if prepend_direction {
        let mut header = Vec::with_capacity(pack.columns.len() + 1);
        header.push(column_name.to_string());
        header.extend(pack.columns.iter().cloned());
        writer.write_record(&header)?;
        for row in &pack.rows {
            let mut record = Vec::with_capacity(row.len() + 1);
            record.push(direction.clone());
            record.extend(row.iter().cloned());
            writer.write_record(&record)?;
        }
    } else {
        writer.write_record(&pack.columns)?;
        for row in &pack.rows {
            writer.write_record(row)?;
        }
    }

    let body = writer
        .into_inner()
        .map_err(|e| crate::error::Error::Export(format!("CSV writer error: {}", e)))?;
    let mut out = Vec::with_capacity(BOM.len() + body.len());
    out.extend_from_slice(BOM);
    out.extend_from_slice(&body);
    Ok(out)
}

/// Build a filesystem-safe file name for a table.
///
/// Runs of characters outside letters, digits, CJK ideographs, `_` and `-`
/// collapse to `_`; the name is capped at 80 characters and prefixed with
/// a two-digit index. An empty residue falls back to `table_<idx>`.
pub fn csv_file_name(index: usize, title: &str) -> String {
    let title = clean(title);
    let mut safe = String::new();
    let mut in_run = false;
    for ch in title.chars() {
        let keep = ch.is_ascii_alphanumeric()
            || ('\u{4e00}'..='\u{9fff}').contains(&ch)
            || ch == '_'
            || ch == '-';
        if keep {
            in_run = false;
            safe.push(ch);
        } else if !in_run {
            in_run = true;
            safe.push('_');
        }
    }
    let safe: String = safe.chars().take(80).collect();
    let safe = safe.trim_matches('_');
    let safe = if safe.is_empty() {
        format!("table_{}", index)
    } else {
        safe.to_string()
    };
    format!("{:02}_{}.csv", index, safe)
}
