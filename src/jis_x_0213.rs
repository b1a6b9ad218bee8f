use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

// 第 3 第 4 水準の外字
// https://kanji.jitenon.jp/
#[derive(Deserialize)]
struct JisEntry {
    level: usize, // 水準
    plane: usize, // 面
    row: usize,   // 区
    cell: usize,  // 点
    char: String,
}

pub static JIS_X_0213: Lazy<HashMap<usize, String>> = Lazy::new(|| {
    let json = include_str!("jis_x_0213.json");
    let entries: Vec<JisEntry> = serde_json::from_str(json).unwrap();
    entries
        .into_iter()
        .map(|e| (jis_code(e.level, e.plane, e.row, e.cell), e.char))
        .collect()
});

// 水準・面・区・点を並べた 6 桁の値
pub fn jis_code(level: usize, plane: usize, row: usize, cell: usize) -> usize {
    level * 100000 + plane * 10000 + row * 100 + cell
}
