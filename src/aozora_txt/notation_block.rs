use anyhow::{Context, Result};

// 冒頭の "【テキスト中に現れる記号について】" は 55 個のハイフンの行で囲まれている
fn delimiter() -> String {
    format!("\n{}\n", "-".repeat(55))
}

// 区切りで分けた 1 つ目と 3 つ目のブロックを繋ぐ
// 間のブロックと 4 つ目以降のブロックは捨てる
pub fn remove_notation_block(txt: &str) -> Result<String> {
    let delimiter = delimiter();

    let blocks: Vec<&str> = txt.split(&delimiter).collect();
    let body = blocks
        .get(2)
        .context("Explanatory block delimited by 55 hyphens is not found")?;

    Ok(format!("{}{}", blocks[0], body))
}
