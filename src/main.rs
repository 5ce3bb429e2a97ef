use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use argh::FromArgs;
use zenoled::{
    ConvertRequest, Limits, LiteralOptions, OledError, Permissiveness, RowOrder, Unstoppable,
};

/// Page buffer cap when no panel size is given (16 MiB, ~134 Mpixels).
const DEFAULT_MAX_PAGE_BYTES: u64 = 1 << 24;

#[derive(FromArgs)]
/// Convert a 1-bit BMP into an SSD1306 page-layout C array
struct Args {
    /// input BMP path
    #[argh(positional)]
    input: PathBuf,

    /// array identifier
    #[argh(option, default = "String::from(\"meme_bitmap\")")]
    name: String,

    /// prefix of the width/height defines
    #[argh(option, default = "String::from(\"MEME\")")]
    prefix: String,

    /// hex values per line
    #[argh(option, default = "16")]
    per_line: usize,

    /// omit the PROGMEM annotation
    #[argh(switch)]
    no_progmem: bool,

    /// reject truncated rows, compression and bit depths other than 1
    #[argh(switch)]
    strict: bool,

    /// treat negative heights as top-down row order
    #[argh(switch)]
    honor_height_sign: bool,

    /// maximum image width (e.g. 128 for a 128x64 panel)
    #[argh(option)]
    max_width: Option<u32>,

    /// maximum image height (e.g. 64 for a 128x64 panel)
    #[argh(option)]
    max_height: Option<u32>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Convert { path: PathBuf, source: OledError },

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

fn run(args: &Args) -> Result<(), CliError> {
    let data = std::fs::read(&args.input).map_err(|source| CliError::Read {
        path: args.input.clone(),
        source,
    })?;
    log::info!("read {} bytes from {}", data.len(), args.input.display());

    let limits = match (args.max_width, args.max_height) {
        (Some(width), Some(height)) => Limits::for_panel(width, height),
        (width, height) => Limits {
            max_width: width.map(u64::from),
            max_height: height.map(u64::from),
            max_memory_bytes: Some(DEFAULT_MAX_PAGE_BYTES),
            ..Limits::default()
        },
    };
    let converted = ConvertRequest::new(&data)
        .with_limits(&limits)
        .with_permissiveness(if args.strict {
            Permissiveness::Strict
        } else {
            Permissiveness::Lenient
        })
        .with_row_order(if args.honor_height_sign {
            RowOrder::FromHeaderSign
        } else {
            RowOrder::AssumeBottomUp
        })
        .convert(Unstoppable)
        .map_err(|source| CliError::Convert {
            path: args.input.clone(),
            source,
        })?;

    let options = LiteralOptions::default()
        .with_name(args.name.as_str())
        .with_define_prefix(args.prefix.as_str())
        .with_values_per_line(args.per_line)
        .with_progmem(!args.no_progmem);
    // Render fully before writing so a failure never leaves partial output.
    let literal = converted.literal(&options);

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", converted.diagnostic())?;
    writeln!(out)?;
    out.write_all(literal.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args: Args = argh::from_env();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
