use anyhow::{Context, Result};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{
    jis_x_0213::{jis_code, JIS_X_0213},
    utility::str::parse_number,
};

// ※［＃「（字形の説明）」、第3水準1-14-76］
pub fn replace_gaiji(line: &str) -> String {
    static REGEX_GAIJI: Lazy<Regex> = Lazy::new(|| Regex::new(r"※［＃([^］]+)］").unwrap());

    REGEX_GAIJI
        .replace_all(line, |caps: &Captures| {
            let annotation = &caps[0];
            match resolve_gaiji(&caps[1]) {
                Ok(Some(char)) => char,
                Ok(None) => {
                    debug!("gaiji is not resolvable: {}", annotation);
                    annotation.to_owned()
                }
                Err(e) => {
                    warn!("{:#}: {}", e, annotation);
                    annotation.to_owned()
                }
            }
        })
        .into_owned()
}

// 注記ごとに水準・面区点を読む（同じ行の別の注記を見ない）
fn resolve_gaiji(description: &str) -> Result<Option<String>> {
    // 外字（第 3 第 4 水準）
    static REGEX_JIS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"第(?P<level>[0-9０-９])水準(?P<plane>[0-9０-９])[-−](?P<row>[0-9０-９]{1,2})[-−](?P<cell>[0-9０-９]{1,2})",
        )
        .unwrap()
    });
    if let Some(caps) = REGEX_JIS.captures(description) {
        let level = parse_number(&caps["level"]).context("Invalid level")?;
        let plane = parse_number(&caps["plane"]).context("Invalid plane")?;
        let row = parse_number(&caps["row"]).context("Invalid row")?;
        let cell = parse_number(&caps["cell"]).context("Invalid cell")?;

        let code = jis_code(level, plane, row, cell);
        let char = JIS_X_0213
            .get(&code)
            .with_context(|| format!("jis code not implemented: {}", code))?;

        return Ok(Some(char.clone()));
    }

    // 外字（JIS X 0213 にないが Unicode にある）
    static REGEX_UNICODE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"U\+(?P<unicode>[0-9A-Fa-f]{4,6})").unwrap());
    if let Some(caps) = REGEX_UNICODE.captures(description) {
        let unicode = u32::from_str_radix(&caps["unicode"], 16).context("Invalid unicode")?;
        let char = char::from_u32(unicode).context("Invalid unicode")?;

        return Ok(Some(char.to_string()));
    }

    Ok(None)
}
