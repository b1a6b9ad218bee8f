use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::debug;

use crate::{
    aozora_txt::{
        gaiji_accent_decomposition::replace_accent_decomposition,
        gaiji_annotation::replace_gaiji,
        midashi::{replace_kaipage, replace_midashi},
        notation_block::remove_notation_block,
        ruby::{replace_bouten, replace_ruby},
    },
    output_format::{FormatTemplates, OutputFormat},
    utility::{encoding::decode_txt, str::trim_zenkaku_space},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub format: OutputFormat,
    pub debug: bool, // 冒頭の注記説明を残す
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            debug: false,
        }
    }
}

pub fn convert_aozora_txt_file(path: &Path, options: &ConvertOptions) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let txt = decode_txt(bytes);

    convert_aozora_txt(&txt, options)
        .with_context(|| format!("Failed to convert {}", path.display()))
}

pub fn convert_aozora_txt(txt: &str, options: &ConvertOptions) -> Result<String> {
    let templates = options.format.templates();

    let lines: Vec<String> = txt
        .lines()
        .map(|line| convert_line(line, templates))
        .collect();
    debug!("{} lines converted", lines.len());

    // 見出しの判定は行が空行で区切られていることを前提とする
    let txt = lines.join("\n\n");
    let txt = replace_midashi(&txt, templates);
    let txt = replace_kaipage(&txt, templates);

    if options.debug {
        return Ok(txt);
    }

    remove_notation_block(&txt)
}

pub fn convert_line(line: &str, templates: &FormatTemplates) -> String {
    let line = trim_zenkaku_space(line);
    let line = replace_gaiji(line);
    let line = replace_ruby(&line, templates);
    let line = replace_bouten(&line, templates);
    replace_accent_decomposition(&line)
}
