use std::path::Path;

use anyhow::Result;

use aozora2fmt::{
    aozora_txt::converter::{convert_aozora_txt, convert_aozora_txt_file, ConvertOptions},
    output_format::OutputFormat,
};

static SAMPLE_PATH: &str = "./tests/wagahai.aozora.txt";

fn options(format: OutputFormat, debug: bool) -> ConvertOptions {
    ConvertOptions { format, debug }
}

fn hyphens() -> String {
    "-".repeat(55)
}

#[test]
fn test_sample_md() -> Result<()> {
    let converted =
        convert_aozora_txt_file(Path::new(SAMPLE_PATH), &options(OutputFormat::Md, false))?;

    let expected = [
        "吾輩は猫である",
        "夏目漱石",
        "\n\n## 一",
        "<ruby>吾輩<rp>《</rp><rt>わがはい</rt><rp>》</rp></ruby>は猫である。名前はまだ無い。",
        "どこで生れたかとんと<ruby>見当<rp>《</rp><rt>けんとう</rt><rp>》</rp></ruby>がつかぬ。匇卒としてPérezを思い出した。",
        "これが<ruby>人間<rp>《</rp><rt>﹅﹅</rt><rp>》</rp></ruby>というものの<ruby>見始<rp>《</rp><rt>みはじ</rt><rp>》</rp></ruby>めであろう。",
        "<div style='break-after:always'></div>",
        "## 二",
        "※［＃「糸＋昆」、第3水準1-90-12］の布を被っていた。",
        "",
        "",
        "",
        "底本：「吾輩は猫である」岩波文庫、岩波書店",
    ]
    .join("\n\n");

    assert_eq!(converted, expected);

    Ok(())
}

#[test]
fn test_sample_tex() -> Result<()> {
    let converted =
        convert_aozora_txt_file(Path::new(SAMPLE_PATH), &options(OutputFormat::Tex, false))?;

    assert!(converted.contains("\\section*{一}"));
    assert!(converted.contains("\\section*{二}"));
    assert!(converted.contains("\\ruby{吾輩}{わがはい}"));
    assert!(converted.contains("\\ruby{人間}{﹅﹅}"));
    assert!(converted.contains("\\newpage"));
    assert!(!converted.contains("【テキスト中に現れる記号について】"));
    assert!(!converted.contains("［＃改ページ］"));

    Ok(())
}

#[test]
fn test_sample_debug() -> Result<()> {
    let converted =
        convert_aozora_txt_file(Path::new(SAMPLE_PATH), &options(OutputFormat::Plain, true))?;

    assert!(converted.contains("【テキスト中に現れる記号について】"));
    assert_eq!(converted.matches(&hyphens()).count(), 2);
    assert!(converted.contains("[吾輩:わがはい]は猫である。"));

    Ok(())
}

#[test]
fn test_missing_file() {
    let result = convert_aozora_txt_file(
        Path::new("./tests/not_found.aozora.txt"),
        &ConvertOptions::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_isolated_lines_as_midashi() -> Result<()> {
    let txt = format!(
        "題\r\n{0}\r\n注記\r\n{0}\r\n\r\n第一章\r\n\r\n本文《ほんぶん》\r\n",
        hyphens()
    );
    let converted = convert_aozora_txt(&txt, &options(OutputFormat::Md, false))?;

    assert_eq!(
        converted,
        "題\n\n# 第一章\n\n<ruby>本文<rp>《</rp><rt>ほんぶん</rt><rp>》</rp></ruby>"
    );

    Ok(())
}

#[test]
fn test_accent() -> Result<()> {
    let txt = format!("題\n{0}\n注\n{0}\n〔o:〕", hyphens());
    for format in [OutputFormat::Tex, OutputFormat::Md, OutputFormat::Plain] {
        let converted = convert_aozora_txt(&txt, &options(format, false))?;
        assert_eq!(converted, "題\n\nö");
    }

    Ok(())
}
