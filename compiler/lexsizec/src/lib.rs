//! lexsize command-line driver.
//!
//! Loads a source file, collects its tokens, and prints them one per line:
//!
//! ```text
//! Tokens:
//!   0 : 'int'
//!   1 : 'x'
//!   2 : '(null)'
//! ```
//!
//! `(null)` marks a lexeme the scanner could not recognise.

use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Once;

use clap::Parser;
use lexsize::{Classified, CollectError, Collector, GrowthPolicy, Lexeme, SourceBuffer, TokenSeq};

mod load;

pub use load::{load_source, LoadError};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "lexsize", version, about = "Print the tokens of a source file")]
pub struct Cli {
    /// Source file to scan
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Initial capacity of the token sequence
    #[arg(long, value_name = "N", default_value_t = GrowthPolicy::DEFAULT_INITIAL_CAPACITY)]
    pub initial_capacity: NonZeroUsize,

    /// Fail once the sequence would need more than N slots
    #[arg(long, value_name = "N")]
    pub max_capacity: Option<usize>,

    /// Print each token's kind before its text
    #[arg(long)]
    pub kinds: bool,
}

impl Cli {
    pub fn policy(&self) -> GrowthPolicy {
        let policy = GrowthPolicy::new(self.initial_capacity);
        match self.max_capacity {
            Some(max) => policy.with_max_capacity(max),
            None => policy,
        }
    }
}

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Does nothing unless `LEXSIZE_LOG` or `RUST_LOG` is set. With
/// `LEXSIZE_LOG_TREE` set, spans are rendered as an indented tree.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = match EnvFilter::try_from_env("LEXSIZE_LOG") {
            Ok(filter) => filter,
            Err(_) if std::env::var_os("RUST_LOG").is_some() => EnvFilter::from_default_env(),
            Err(_) => return,
        };
        let tree = std::env::var_os("LEXSIZE_LOG_TREE").is_some();

        tracing_subscriber::registry()
            .with(filter)
            .with(tree.then(|| tracing_tree::HierarchicalLayer::new(2).with_targets(true)))
            .with((!tree).then(|| {
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true)
            }))
            .init();
    });
}

/// Failure of one CLI run, reported as `error: ...`.
#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Collect(#[from] CollectError),
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

/// Run the CLI, writing tokens to `out` and diagnostics to `err`.
///
/// Returns the process exit status.
pub fn run(cli: &Cli, out: &mut dyn Write, err: &mut dyn Write) -> u8 {
    match try_run(cli, out, err) {
        Ok(()) => 0,
        Err(e) => {
            tracing::debug!(error = %e, "run failed");
            // Nothing left to report to if stderr is gone.
            let _ = writeln!(err, "error: {e}");
            1
        }
    }
}

fn try_run(cli: &Cli, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), RunError> {
    let buffer = load_source(&cli.file)?;
    report_encoding_issues(cli, &buffer, err)?;

    let collector = Collector::new(cli.policy());
    if cli.kinds {
        let seq = collector.collect(Classified::new(buffer))?;
        print_classified(&seq, out)?;
    } else {
        let seq = collector.collect(buffer)?;
        print_texts(&seq, out)?;
    }
    Ok(())
}

fn report_encoding_issues(cli: &Cli, buffer: &SourceBuffer, err: &mut dyn Write) -> io::Result<()> {
    for issue in buffer.encoding_issues() {
        writeln!(
            err,
            "warning: {}: {} at byte {}",
            cli.file.display(),
            issue.kind.describe(),
            issue.pos
        )?;
    }
    Ok(())
}

const NULL_TEXT: &str = "(null)";

fn print_texts(seq: &TokenSeq<Box<str>>, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Tokens:")?;
    for (i, text) in seq.iter().enumerate() {
        writeln!(out, "{i:>3} : '{}'", text.as_deref().unwrap_or(NULL_TEXT))?;
    }
    Ok(())
}

fn print_classified(seq: &TokenSeq<Lexeme>, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Tokens:")?;
    for (i, lexeme) in seq.iter().enumerate() {
        let (kind, text) = match lexeme {
            Some(Lexeme { kind, text }) => (kind.name(), text.as_deref()),
            None => ("UNKNOWN", None),
        };
        writeln!(out, "{i:>3} : {kind} '{}'", text.unwrap_or(NULL_TEXT))?;
    }
    Ok(())
}
