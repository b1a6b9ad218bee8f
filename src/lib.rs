pub mod aozora_txt;
pub mod jis_x_0213;
pub mod output_format;
pub mod utility;
