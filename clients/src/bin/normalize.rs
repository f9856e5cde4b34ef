//! `streams-normalize`: decodes an Activity Streams document into a typed
//! entity and writes it back in compact form.
//!
//! **Usage:**
//! ```text
//! streams-normalize [FILE] [--config <toml>] [--kind <name>] [--max-depth <n>]
//!                   [--strict] [--context] [--compact] [-v...]
//! ```
//!
//! Reads standard input when `FILE` is absent or `-`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use streams_codec::{with_context, CodecConfig, FunctionalListPolicy, Transcoder, TypeRegistry};
use streams_vocab::model::iris;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

/// Normalize an Activity Streams document.
#[derive(Parser)]
#[command(name = "streams-normalize", about = "Decode and re-encode an Activity Streams document")]
struct Args {
    /// Input document; standard input when absent or `-`.
    input: Option<PathBuf>,

    /// Codec configuration file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Decode the root as this kind regardless of its `type`.
    #[arg(long)]
    kind: Option<String>,

    /// Deepest accepted nesting of embedded entities.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Reject lists on functional properties and unresolvable root types.
    #[arg(long)]
    strict: bool,

    /// Wrap the output in the Activity Streams `@context`.
    #[arg(long)]
    context: bool,

    /// Write single-line JSON instead of pretty-printing.
    #[arg(long)]
    compact: bool,

    /// Increase log verbosity (`-v` info, `-vv` debug, `-vvv` trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(&args)?;
    let transcoder = Transcoder::new(TypeRegistry::standard(), config);

    let text = read_input(args.input.as_deref())?;
    let document: Value = serde_json::from_str(&text).context("Input is not valid JSON")?;

    let entity = match &args.kind {
        Some(kind) => transcoder.decode_as(kind, &document),
        None => transcoder.decode(&document),
    }
    .context("Failed to decode document")?;
    info!(
        kind = entity.kind().name,
        unknown = entity.unknown().len(),
        "decoded document"
    );

    let mut output = transcoder.encode_map(&entity);
    if args.context {
        output = with_context(output, Value::String(iris::AS_CONTEXT.to_owned()));
    }
    let rendered = if args.compact {
        serde_json::to_string(&output)
    } else {
        serde_json::to_string_pretty(&output)
    }
    .context("Failed to serialize document")?;
    println!("{rendered}");
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

/// Builds the configuration: file first, then flags on top.
fn load_config(args: &Args) -> Result<CodecConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Invalid codec configuration in {}", path.display()))?
        }
        None => CodecConfig::default(),
    };
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }
    if args.strict {
        config.functional_lists = FunctionalListPolicy::Reject;
        config.fallback_kind = None;
    }
    Ok(config)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read standard input")?;
            Ok(text)
        }
    }
}
