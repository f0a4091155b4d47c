//! Logic behind the `json-urlsafe-encode` and `json-urlsafe-decode` binaries.
//!
//! The tools work on unsigned framed strings; signing needs a secret and is
//! left to the embedding application.

use serde_json::Value;

use crate::codec::Codec;
use crate::options::CodecOptions;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Codec(#[from] crate::Error),
    #[error("invalid value for {flag}: {value}")]
    InvalidFlag { flag: &'static str, value: String },
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

/// Flags shared by both tools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub options: CodecOptions,
    /// Print decoded JSON on a single line.
    pub compact: bool,
}

/// Parses `--level N`, `--max-size N` and `--compact`.
pub fn parse_args<I>(args: I) -> Result<CliArgs, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--compact" => out.compact = true,
            "--level" => {
                let level = flag_value("--level", args.next())?;
                out.options = out.options.with_compression_level(level);
            }
            "--max-size" => {
                let limit = flag_value("--max-size", args.next())?;
                out.options = out.options.with_max_decompressed_size(limit);
            }
            _ => return Err(CliError::UnknownArgument(arg)),
        }
    }
    Ok(out)
}

fn flag_value<T: std::str::FromStr>(flag: &'static str, value: Option<String>) -> Result<T, CliError> {
    let value = value.unwrap_or_default();
    value.parse().map_err(|_| CliError::InvalidFlag { flag, value })
}

/// Encodes a JSON document into a framed string.
pub fn encode_json(json: &str, options: CodecOptions) -> Result<String, CliError> {
    let value: Value = serde_json::from_str(json)?;
    Ok(Codec::new(options).encode(&value)?)
}

/// Decodes a framed string and renders the JSON document.
pub fn decode_to_json(framed: &str, args: &CliArgs) -> Result<String, CliError> {
    let value = Codec::new(args.options).decode(framed.trim())?;
    let rendered = if args.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    Ok(rendered)
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
