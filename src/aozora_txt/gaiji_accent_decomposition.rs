use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

// アクセント分解 https://www.aozora.gr.jp/accent_separation.html
static ACCENT_TABLE: &[(&str, char)] = &[
    ("A&", 'Å'),
    ("A'", 'Á'),
    ("A:", 'Ä'),
    ("AE&", 'Æ'),
    ("A^", 'Â'),
    ("A_", 'Ā'),
    ("A`", 'À'),
    ("A~", 'Ã'),
    ("C'", 'Ć'),
    ("C,", 'Ç'),
    ("C^", 'Ĉ'),
    ("D/", 'Đ'),
    ("E'", 'É'),
    ("E:", 'Ë'),
    ("E^", 'Ê'),
    ("E_", 'Ē'),
    ("E`", 'È'),
    ("E~", 'Ẽ'),
    ("G^", 'Ĝ'),
    ("H^", 'Ĥ'),
    ("I'", 'Í'),
    ("I:", 'Ï'),
    ("I^", 'Î'),
    ("I_", 'Ī'),
    ("I`", 'Ì'),
    ("I~", 'Ĩ'),
    ("J^", 'Ĵ'),
    ("L'", 'Ĺ'),
    ("L/", 'Ł'),
    ("M'", 'Ḿ'),
    ("N'", 'Ń'),
    ("N`", 'Ǹ'),
    ("N~", 'Ñ'),
    ("O'", 'Ó'),
    ("O/", 'Ø'),
    ("O:", 'Ö'),
    ("OE&", 'Œ'),
    ("O^", 'Ô'),
    ("O_", 'Ō'),
    ("O`", 'Ò'),
    ("O~", 'Õ'),
    ("R'", 'Ŕ'),
    ("S'", 'Ś'),
    ("S,", 'Ş'),
    ("S^", 'Ŝ'),
    ("T,", 'Ţ'),
    ("U&", 'Ů'),
    ("U'", 'Ú'),
    ("U:", 'Ü'),
    ("U^", 'Û'),
    ("U_", 'Ū'),
    ("U`", 'Ù'),
    ("U~", 'Ũ'),
    ("Y'", 'Ý'),
    ("Z'", 'Ź'),
    ("a&", 'å'),
    ("a'", 'á'),
    ("a:", 'ä'),
    ("a^", 'â'),
    ("a_", 'ā'),
    ("a`", 'à'),
    ("ae&", 'æ'),
    ("a~", 'ã'),
    ("c'", 'ć'),
    ("c,", 'ç'),
    ("c^", 'ĉ'),
    ("d/", 'đ'),
    ("e'", 'é'),
    ("e:", 'ë'),
    ("e^", 'ê'),
    ("e_", 'ē'),
    ("e`", 'è'),
    ("e~", 'ẽ'),
    ("g^", 'ĝ'),
    ("h/", 'ħ'),
    ("h^", 'ĥ'),
    ("i'", 'í'),
    ("i/", 'ɨ'),
    ("i:", 'ï'),
    ("i^", 'î'),
    ("i_", 'ī'),
    ("i`", 'ì'),
    ("i~", 'ĩ'),
    ("j^", 'ĵ'),
    ("l'", 'ĺ'),
    ("l/", 'ł'),
    ("m'", 'ḿ'),
    ("n'", 'ń'),
    ("n`", 'ǹ'),
    ("n~", 'ñ'),
    ("o'", 'ó'),
    ("o/", 'ø'),
    ("o:", 'ö'),
    ("o^", 'ô'),
    ("o_", 'ō'),
    ("o`", 'ò'),
    ("oe&", 'œ'),
    ("o~", 'õ'),
    ("r'", 'ŕ'),
    ("s&", 'ß'),
    ("s'", 'ś'),
    ("s,", 'ş'),
    ("s^", 'ŝ'),
    ("t,", 'ţ'),
    ("u&", 'ů'),
    ("u'", 'ú'),
    ("u:", 'ü'),
    ("u^", 'û'),
    ("u_", 'ū'),
    ("u`", 'ù'),
    ("u~", 'ũ'),
    ("y'", 'ý'),
    ("y:", 'ÿ'),
    ("z'", 'ź'),
];

static ACCENT_MAP: Lazy<HashMap<&'static str, char>> =
    Lazy::new(|| ACCENT_TABLE.iter().copied().collect());

// 〔e'tude〕 -> étude
// 置換は〔〕の内側に限る
pub fn replace_accent_decomposition(line: &str) -> String {
    static REGEX_ACCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"〔([^〕]+)〕").unwrap());

    REGEX_ACCENT
        .replace_all(line, |caps: &Captures| compose_accent(&caps[1]))
        .into_owned()
}

// 3 文字の記号 (ae& など) を 2 文字の記号より先に見る
fn compose_accent(s: &str) -> String {
    let mut ret = String::new();

    let s: Vec<_> = s.chars().collect();
    let mut i = 0;
    'outer: while i < s.len() {
        for len in [3, 2] {
            if s.len() < i + len {
                continue;
            }

            let token: String = s[i..(i + len)].iter().collect();
            if let Some(&c) = ACCENT_MAP.get(token.as_str()) {
                ret.push(c);
                i += len;
                continue 'outer;
            }
        }

        ret.push(s[i]);
        i += 1;
    }

    ret
}
