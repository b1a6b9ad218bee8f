use anyhow::{bail, ensure, Result};
use std::{env, io::Write, path::PathBuf, process};

use aozora2fmt::{
    aozora_txt::converter::{convert_aozora_txt_file, ConvertOptions},
    output_format::OutputFormat,
};

struct Args {
    path: PathBuf,
    options: ConvertOptions,
}

fn create_opts() -> getopts::Options {
    let mut opts = getopts::Options::new();
    opts.optflag("d", "", "debug mode");
    opts.optopt("f", "", "output format [plain|md|tex]", "format");
    opts.optflag("h", "", "print this help");
    opts
}

fn usage(program: &str, opts: &getopts::Options) -> String {
    let brief = format!("usage: {} [-d] [-f format] file", program);
    opts.usage(&brief)
}

// -h なら None
fn get_args(opts: &getopts::Options) -> Result<Option<Args>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        return Ok(None);
    }

    let format = matches.opt_str("f").unwrap_or_else(|| "plain".to_owned());
    let format = OutputFormat::of(&format)?;

    ensure!(
        matches.free.len() == 1,
        "exactly one file is required, given {}",
        matches.free.len()
    );
    let path = PathBuf::from(&matches.free[0]);

    Ok(Some(Args {
        path,
        options: ConvertOptions {
            format,
            debug: matches.opt_present("d"),
        },
    }))
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format(|buf, record| {
            let file = record
                .file()
                .and_then(|f| f.rsplit('/').next())
                .unwrap_or("?");
            writeln!(
                buf,
                "{}:{}: {}",
                file,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn main() -> Result<()> {
    init_logger();

    let program = env::args()
        .next()
        .unwrap_or_else(|| "aozora2fmt".to_owned());
    let opts = create_opts();

    let args = match get_args(&opts) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{}", usage(&program, &opts));
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}", e);
            eprint!("{}", usage(&program, &opts));
            process::exit(1);
        }
    };

    let converted = convert_aozora_txt_file(&args.path, &args.options)?;
    println!("{}", converted);

    Ok(())
}
