//! `jsonfix` - recover a best-effort value tree from malformed JSON and
//! report every recovery taken.
//!
//! Reads a file (or stdin when no path is given), parses it with
//! [`jsonfix::parse_smart`], prints the recovered tree to stdout, and
//! prints every diagnostic to stderr. Exits non-zero when the parse was
//! not clean, or when `--strict` turned the first diagnostic fatal.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use jsonfix::options::Options;
use jsonfix::{reader, tree};

/// Parse malformed JSON and recover a best-effort value tree.
#[derive(Parser, Debug)]
#[command(name = "jsonfix")]
#[command(author = "jsonfix contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Recover a value tree from malformed JSON", long_about = None)]
struct Cli {
    /// File to read. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true, env = "JSONFIX_VERBOSE")]
    verbose: bool,

    /// Abort on the first diagnostic instead of recovering.
    #[arg(long)]
    strict: bool,

    /// Hard cap on nested container depth.
    #[arg(long, default_value_t = Options::default().max_depth)]
    max_depth: usize,

    /// Disable `//` and `/* */` comment skipping.
    #[arg(long)]
    no_comments: bool,

    /// Treat a trailing comma before a closer as a diagnostic.
    #[arg(long)]
    no_trailing_comma: bool,

    /// Don't accept `True`/`False`/`None` as `true`/`false`/`null`.
    #[arg(long)]
    no_python_tokens: bool,

    /// Don't accept `undefined` as `null`.
    #[arg(long)]
    no_undefined: bool,

    /// Emit single-line JSON instead of pretty-printed.
    #[arg(short, long)]
    compact: bool,

    /// Drop object entries whose value is `null` from the output.
    #[arg(long)]
    strip_nulls: bool,

    /// Recursively reorder object keys lexicographically before printing.
    #[arg(long)]
    sort_keys: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(clean) => {
            if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("jsonfix: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}

/// Returns `Ok(true)` when the parse was clean (`ok=true`).
fn run(cli: &Cli) -> Result<bool> {
    let input = match &cli.input {
        Some(path) => reader::read_file(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => reader::read_stdin().context("reading stdin")?,
    };

    let options = Options {
        strict: cli.strict,
        max_depth: cli.max_depth,
        allow_comments: !cli.no_comments,
        allow_trailing_comma: !cli.no_trailing_comma,
        convert_python_tokens: !cli.no_python_tokens,
        convert_undefined: !cli.no_undefined,
    };

    let outcome = jsonfix::parse_smart(&input, Some(options));

    if let Some(value) = outcome.results.first() {
        let value = if cli.strip_nulls {
            tree::strip_nulls(value)
        } else {
            value.clone()
        };
        let value = if cli.sort_keys {
            tree::sorted_keys(&value)
        } else {
            value
        };
        let rendered = if cli.compact {
            tree::to_compact_string(&value)
        } else {
            tree::to_pretty_string(&value)
        };
        println!("{rendered}");
    }

    for message in &outcome.errors {
        tracing::warn!("{message}");
        eprintln!("{message}");
    }

    Ok(outcome.ok)
}
