//! Table post-processing: blank-row purge and merged-cell fill-down.

use crate::model::CleanTable;
use crate::text::clean;

/// Column-name keywords that mark columns produced from merged cells.
///
/// Spanning cells in the source layout drop their repeated label on all but
/// the first row; a fill-down restores it.
const FILL_DOWN_KEYWORDS: &[&str] = &[
    "课程体系",
    "课程模块",
    "课程性质",
    "课程类别",
    "类别",
    "模块",
    "环节",
    "学期",
    "方向",
];

/// Post-process a normalized table in place.
///
/// Trims every cell, drops rows that are blank after trimming, then
/// fill-downs every column whose name contains a merged-cell keyword. The
/// blank rows must go first: a blank separator row would otherwise reset an
/// adjacent fill-down run.
pub fn postprocess_table(table: &mut CleanTable) {
    for row in &mut table.rows {
        for cell in row.iter_mut() {
            let cleaned = clean(cell);
            *cell = cleaned;
        }
    }
    table.rows.retain(|row| row.iter().any(|c| !c.is_empty()));

    for (j, name) in table.columns.iter().enumerate() {
        if !FILL_DOWN_KEYWORDS.iter().any(|k| name.contains(k)) {
            continue;
        }
        let mut last = String::new();
        for row in &mut table.rows {
            if let Some(cell) = row.get_mut(j) {
                if cell.is_empty() {
                    *cell = last.clone();
                } else {
                    last = cell.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str], rows: &[&[&str]]) -> CleanTable {
        CleanTable::new(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_blank_rows_removed() {
        let mut t = table(&["a", "b"], &[&["x", "y"], &["  ", ""], &["z", "w"]]);
        postprocess_table(&mut t);
        assert_eq!(t.rows, vec![vec!["x", "y"], vec!["z", "w"]]);
    }

    #[test]
    fn test_fill_down_on_keyword_column() {
        let mut t = table(
            &["课程类别", "课程名称"],
            &[&["必修", "数学"], &["", "物理"], &["选修", "美学"], &["", "音乐"]],
        );
        postprocess_table(&mut t);
        let col: Vec<&str> = t.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(col, vec!["必修", "必修", "选修", "选修"]);
    }

    #[test]
    fn test_no_fill_down_on_plain_column() {
        let mut t = table(&["课程名称", "学分"], &[&["数学", "4"], &["物理", ""]]);
        postprocess_table(&mut t);
        assert_eq!(t.rows[1][1], "");
    }

    #[test]
    fn test_leading_blank_stays_blank() {
        // Nothing above the first row to inherit from.
        let mut t = table(&["学期", "课程名称"], &[&["", "数学"], &["一", "物理"]]);
        postprocess_table(&mut t);
        assert_eq!(t.rows[0][0], "");
        assert_eq!(t.rows[1][0], "一");
    }

    #[test]
    fn test_idempotent() {
        let mut t = table(
            &["模块", "课程名称"],
            &[&["基础", "数学"], &["", "物理"], &["", ""]],
        );
        postprocess_table(&mut t);
        let once = t.clone();
        postprocess_table(&mut t);
        assert_eq!(t, once);
    }

    #[test]
    fn test_blank_row_removed_before_fill_down() {
        // The blank separator must not break the fill-down run.
        let mut t = table(
            &["方向", "课程名称"],
            &[&["焊接", "工艺"], &["", ""], &["", "检测"]],
        );
        postprocess_table(&mut t);
        assert_eq!(t.rows, vec![vec!["焊接", "工艺"], vec!["焊接", "检测"]]);
    }
}
