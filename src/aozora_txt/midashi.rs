use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::output_format::{FormatTemplates, Template};

// 見出しの大きさ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidashiLevel {
    Oh,   // 大見出し
    Naka, // 中見出し
    Ko,   // 小見出し
}

impl MidashiLevel {
    pub fn of(name: &str) -> Option<Self> {
        match name {
            "大" => Some(Self::Oh),
            "中" => Some(Self::Naka),
            "小" => Some(Self::Ko),
            _ => None,
        }
    }

    fn template<'a>(&self, templates: &'a FormatTemplates) -> &'a Template {
        match self {
            Self::Oh => &templates.hdr,
            Self::Naka => &templates.shdr,
            Self::Ko => &templates.sshdr,
        }
    }
}

// 行を空行で繋いだ文書に対して見出しを置換する
//
// ［＃５字下げ］一［＃「一」は中見出し］ のように前後を空行に挟まれた見出し注記があればそれに従う
// 見出し注記が 1 つもなければ，前後を空行に挟まれた行をすべて大見出しとみなす
pub fn replace_midashi(txt: &str, templates: &FormatTemplates) -> String {
    // 見出しの大きさは 1 文字なら何でも受け付ける
    // 大中小 以外は警告を出して見出しの文字列だけを残す
    // この場合も見出し注記ありとして扱い，空行に挟まれた行を見出しとみなさない
    static REGEX_MIDASHI: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\n\n［[^［]+［＃「(?P<value>[^」]+)」は(?P<level>.)見出し］\n\n\n").unwrap()
    });

    let replacements: Vec<(String, String)> = REGEX_MIDASHI
        .captures_iter(txt)
        .map(|caps| {
            let value = &caps["value"];
            let midashi = match MidashiLevel::of(&caps["level"]) {
                Some(level) => level.template(templates).render(&[value]),
                None => {
                    warn!("bad midashi: {:?}", &caps[0]);
                    value.to_owned()
                }
            };
            (caps[0].to_owned(), format!("{}\n", midashi))
        })
        .collect();

    if replacements.is_empty() {
        return replace_isolated_lines(txt, templates);
    }

    let mut txt = txt.to_owned();
    for (from, to) in replacements {
        txt = txt.replace(&from, &to);
    }
    txt
}

fn replace_isolated_lines(txt: &str, templates: &FormatTemplates) -> String {
    static REGEX_ISOLATED_LINE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\n\n\n([^\n]+)\n\n\n").unwrap());

    let replacements: Vec<(String, String)> = REGEX_ISOLATED_LINE
        .captures_iter(txt)
        .map(|caps| {
            (
                caps[0].to_owned(),
                format!("\n{}\n", templates.hdr.render(&[&caps[1]])),
            )
        })
        .collect();

    let mut txt = txt.to_owned();
    for (from, to) in replacements {
        txt = txt.replace(&from, &to);
    }
    txt
}

// 改ページ https://www.aozora.gr.jp/annotation/layout_1.html#kaipage
pub fn replace_kaipage(txt: &str, templates: &FormatTemplates) -> String {
    txt.replace("［＃改ページ］", &templates.kaipage.render(&[]))
}
