use once_cell::sync::Lazy;
use regex::Regex;

use crate::output_format::FormatTemplates;

// 漢字として扱う文字
// 仝々〆〇ヶ は漢字扱い (https://www.aozora.gr.jp/annotation/etc.html#ruby)
const KANJI: &str = concat!(
    r"\x{3400}-\x{4DBF}",   // CJK Unified Ideographs Extension A
    r"\x{4E00}-\x{9FFF}",   // CJK Unified Ideographs
    r"\x{F900}-\x{FAFF}",   // CJK Compatibility Ideographs
    r"\x{20000}-\x{2FA1F}", // CJK Unified Ideographs Extension B - F, Supplement
    "〆〻〇々ヶ仝",
);

// 漢字《かんじ》 ｜漢字《かんじ》 ｜カタカナ《かたかな》
// 置換は一致した文字列ごとに行全体へ適用する
pub fn replace_ruby(line: &str, templates: &FormatTemplates) -> String {
    static REGEX_RUBY: Lazy<Regex> = Lazy::new(|| {
        Regex::new(&format!(
            r"｜(?P<delimited>[^｜《》]+)《(?P<delimited_ruby>[^》]+)》|(?P<kanji>[{}]+)《(?P<kanji_ruby>[^》]+)》",
            KANJI
        ))
        .unwrap()
    });

    let replacements: Vec<(String, String)> = REGEX_RUBY
        .captures_iter(line)
        .filter_map(|caps| {
            let (value, ruby) = match (caps.name("delimited"), caps.name("kanji")) {
                (Some(value), _) => (value, caps.name("delimited_ruby")?),
                (None, Some(value)) => (value, caps.name("kanji_ruby")?),
                (None, None) => return None,
            };
            Some((
                caps[0].to_owned(),
                templates.ruby.render(&[value.as_str(), ruby.as_str()]),
            ))
        })
        .collect();

    let mut line = line.to_owned();
    for (from, to) in replacements {
        line = line.replace(&from, &to);
    }
    line
}

// 傍点 https://www.aozora.gr.jp/annotation/emphasis.html#boten_chuki
// 吾輩［＃「吾輩」に傍点］ の注記を含めた全体をルビとして出力する
pub fn replace_bouten(line: &str, templates: &FormatTemplates) -> String {
    static REGEX_BOUTEN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"［＃「([^」]+)」に傍点］").unwrap());

    let replacements: Vec<(String, String)> = REGEX_BOUTEN
        .captures_iter(line)
        .map(|caps| {
            let value = &caps[1];
            let bouten = "﹅".repeat(value.chars().count());
            (
                format!("{}{}", value, &caps[0]),
                templates.ruby.render(&[value, bouten.as_str()]),
            )
        })
        .collect();

    let mut line = line.to_owned();
    for (from, to) in replacements {
        line = line.replace(&from, &to);
    }
    line
}
