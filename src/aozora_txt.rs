// 青空文庫 注記一覧 https://www.aozora.gr.jp/annotation/ の一部を出力形式に変換する
//
// 書式の検証はしない：解釈できない注記はそのまま残す
// 1 行ごとの置換（外字・ルビ・傍点・アクセント分解）の後に行を空行で繋ぎ，
// 文書全体に対する置換（見出し・改ページ）と冒頭の注記説明の削除を行う

pub mod converter;
pub mod gaiji_accent_decomposition;
pub mod gaiji_annotation;
pub mod midashi;
pub mod notation_block;
pub mod ruby;
