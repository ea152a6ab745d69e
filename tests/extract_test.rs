//! End-to-end extraction scenarios.

use unplan::{
    extract_pages, extract_pages_with_options, AppendixPageMap, ExtractOptions, PageRecord,
    RawGrid,
};

fn grid(rows: &[&[&str]]) -> RawGrid {
    rows.iter()
        .map(|r| r.iter().map(|c| Some(c.to_string())).collect())
        .collect()
}

#[test]
fn two_page_document_end_to_end() {
    let pages = vec![
        PageRecord::new(1, "一、培养目标\n1.了解专业基础"),
        PageRecord::with_tables(
            2,
            "",
            vec![grid(&[&["课程名称", "学分"], &["数学", "4"], &["", ""]])],
        ),
    ];
    let result = extract_pages(pages, b"doc");

    assert_eq!(result.page_count, 2);
    assert_eq!(result.sections.get("一、培养目标"), Some("1.了解专业基础"));

    assert_eq!(result.objectives.count, 1);
    assert_eq!(result.objectives.items, vec!["了解专业基础"]);

    assert_eq!(result.tables.len(), 1);
    let pack = &result.tables[0];
    assert_eq!(pack.page, 2);
    assert_eq!(pack.columns, vec!["课程名称", "学分"]);
    assert_eq!(pack.rows, vec![vec!["数学", "4"]]);
}

#[test]
fn twelve_requirements_with_subitems() {
    let mut text = String::from("二、毕业要求\n");
    for i in 1..=12 {
        text.push_str(&format!("{}. 条目{}：描述\n{}.1 分项\n{}.2 分项\n", i, i, i, i));
    }
    let result = extract_pages(vec![PageRecord::new(1, text)], b"doc");

    assert_eq!(result.requirements.count, 12);
    for (idx, item) in result.requirements.items.iter().enumerate() {
        assert_eq!(item.no as usize, idx + 1);
        assert_eq!(item.subitems.len(), 2);
        assert_eq!(item.subitems[0].no, format!("{}.1", item.no));
        assert_eq!(item.subitems[1].no, format!("{}.2", item.no));
    }
}

#[test]
fn section_bodies_cover_all_non_heading_lines() {
    let text = "封面文字\n一、培养目标\n目标正文甲\n目标正文乙\n二、毕业要求\n要求正文";
    let result = extract_pages(vec![PageRecord::new(1, text)], b"doc");

    let mut recovered: Vec<String> = Vec::new();
    for section in result.sections.iter() {
        recovered.extend(
            section
                .body
                .lines()
                .filter(|l| !l.trim().is_empty())
                .map(String::from),
        );
    }
    assert_eq!(
        recovered,
        vec!["封面文字", "目标正文甲", "目标正文乙", "要求正文"]
    );
}

#[test]
fn direction_headers_partition_table_rows() {
    let pages = vec![PageRecord::with_tables(
        1,
        "焊接与无损检测课程",
        vec![grid(&[
            &["课程名称"],
            &["焊接方向"],
            &["x"],
            &["无损检测方向"],
            &["y"],
        ])],
    )];
    let result = extract_pages(pages, b"doc");

    let pack = &result.tables[0];
    assert_eq!(pack.direction, "混合（焊接+无损检测）");
    assert_eq!(pack.columns, vec!["专业方向", "课程名称"]);
    let dirs: Vec<&str> = pack.rows.iter().map(|r| r[0].as_str()).collect();
    // The first data row is itself the welding header row; each header
    // switches the carried direction from that row downward.
    assert_eq!(dirs, vec!["焊接", "焊接", "无损检测", "无损检测"]);
}

#[test]
fn repeated_runs_are_stable() {
    let pages = vec![
        PageRecord::new(1, "一、培养目标\n1. 条目\n二、毕业要求\n1. 要求：正文\n1.1 分项"),
        PageRecord::with_tables(
            10,
            "附表1：课程设置表",
            vec![grid(&[&["课程类别", "课程名称"], &["必修", "数学"], &["", "物理"]])],
        ),
    ];

    let a = extract_pages(pages.clone(), b"doc");
    let b = extract_pages(pages, b"doc");

    assert_eq!(a.file_sha256, b.file_sha256);
    assert_eq!(a.objectives.items, b.objectives.items);
    assert_eq!(a.requirements.count, b.requirements.count);
    assert_eq!(a.tables.len(), b.tables.len());
    assert_eq!(a.tables[0].columns, b.tables[0].columns);
    assert_eq!(a.tables[0].rows, b.tables[0].rows);
}

#[test]
fn fill_down_restores_merged_category_labels() {
    let pages = vec![PageRecord::with_tables(
        10,
        "附表1：课程设置表",
        vec![grid(&[
            &["课程类别", "课程名称"],
            &["必修", "数学"],
            &["", "物理"],
            &["选修", "美学"],
        ])],
    )];
    let result = extract_pages(pages, b"doc");

    let col: Vec<&str> = result.tables[0]
        .rows
        .iter()
        .map(|r| r[0].as_str())
        .collect();
    assert_eq!(col, vec!["必修", "必修", "选修"]);
}

#[test]
fn custom_appendix_layout_is_honored() {
    let options = ExtractOptions::new()
        .with_appendix_pages(AppendixPageMap::from_pairs([(2, "附表1")]));
    let pages = vec![
        PageRecord::new(1, "附表1：课程设置及学分分配表"),
        PageRecord::with_tables(2, "", vec![grid(&[&["a", "b"], &["1", "2"]])]),
    ];
    let result = extract_pages_with_options(pages, b"doc", options);

    assert_eq!(result.tables[0].appendix, "附表1");
    assert_eq!(result.tables[0].title, "课程设置及学分分配表（附表1）");
}

#[test]
fn garbled_pages_do_not_block_others() {
    // A page whose table extraction produced garbage grids still passes
    // through; empty grids are skipped, other pages unaffected.
    let pages = vec![
        PageRecord::with_tables(1, "", vec![vec![vec![None, None]], Vec::new()]),
        PageRecord::with_tables(2, "", vec![grid(&[&["a", "b"], &["1", "2"]])]),
    ];
    let result = extract_pages(pages, b"doc");

    assert_eq!(result.page_count, 2);
    assert_eq!(result.tables.len(), 1);
    assert_eq!(result.tables[0].page, 2);
}
