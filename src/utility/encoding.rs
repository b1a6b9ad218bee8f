use log::warn;

// 青空文庫のテキストは Shift_JIS で配布されているが UTF-8 に変換されたものも受け付ける
pub fn decode_txt(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(txt) => {
            if let Some(stripped) = txt.strip_prefix('\u{feff}') {
                return stripped.to_owned();
            }
            txt
        }
        Err(e) => {
            let bytes = e.into_bytes();
            let (txt, _, had_errors) = encoding_rs::SHIFT_JIS.decode(&bytes);
            if had_errors {
                warn!("malformed Shift_JIS sequence is replaced");
            }
            txt.into_owned()
        }
    }
}
