use anyhow::{bail, Result};

// 全角数字も受け付ける
pub fn parse_number(s: &str) -> Result<usize> {
    if s.is_empty() {
        bail!("Failed to parse empty string");
    }

    let mut ret = 0;
    for c in s.chars() {
        let zero = match c {
            '0'..='9' => '0',
            '０'..='９' => '０',
            _ => bail!("Failed to parse {:?}", s),
        } as usize;

        let d = (c as usize) - zero;

        ret *= 10;
        ret += d;
    }
    Ok(ret)
}

// 行頭・行末の全角空白
pub fn trim_zenkaku_space(s: &str) -> &str {
    s.trim_matches('　')
}
