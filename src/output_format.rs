use anyhow::{bail, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tex,
    Md,
    Plain,
}

impl OutputFormat {
    pub fn of(name: &str) -> Result<Self> {
        match name {
            "tex" => Ok(Self::Tex),
            "md" => Ok(Self::Md),
            "plain" => Ok(Self::Plain),
            name => bail!("Unknown output format: {}", name),
        }
    }

    pub fn templates(&self) -> &'static FormatTemplates {
        match self {
            Self::Tex => &TEX,
            Self::Md => &MD,
            Self::Plain => &PLAIN,
        }
    }
}

// "%s" を引数で順に置き換える
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template(&'static str);

impl Template {
    pub fn render(&self, args: &[&str]) -> String {
        let mut ret = String::new();
        let mut args = args.iter();
        let mut rest = self.0;
        while let Some(i) = rest.find("%s") {
            ret.push_str(&rest[..i]);
            ret.push_str(args.next().copied().unwrap_or(""));
            rest = &rest[(i + 2)..];
        }
        ret.push_str(rest);
        ret
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct FormatTemplates {
    pub ruby: Template,    // ルビ
    pub hdr: Template,     // 大見出し
    pub shdr: Template,    // 中見出し
    pub sshdr: Template,   // 小見出し
    pub kaipage: Template, // 改ページ
}

static TEX: FormatTemplates = FormatTemplates {
    ruby: Template("\\ruby{%s}{%s}"),
    hdr: Template("\\chapter{%s}"),
    shdr: Template("\\section*{%s}"),
    sshdr: Template("\\subsection*{%s}"),
    kaipage: Template("\\newpage"),
};

static MD: FormatTemplates = FormatTemplates {
    ruby: Template("<ruby>%s<rp>《</rp><rt>%s</rt><rp>》</rp></ruby>"),
    hdr: Template("# %s"),
    shdr: Template("## %s"),
    sshdr: Template("### %s"),
    kaipage: Template("<div style='break-after:always'></div>"),
};

static PLAIN: FormatTemplates = FormatTemplates {
    ruby: Template("[%s:%s]"),
    hdr: Template("%s"),
    shdr: Template("%s"),
    sshdr: Template("%s"),
    kaipage: Template(""),
};
