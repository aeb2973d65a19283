//! lexsize CLI
//!
//! Usage: `lexsize [OPTIONS] <FILE>`

use std::io;
use std::process::ExitCode;

use clap::Parser;
use lexsizec::{init_tracing, run, Cli};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // `--help` and `--version` are not failures.
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing();
    let code = run(&cli, &mut io::stdout().lock(), &mut io::stderr().lock());
    ExitCode::from(code)
}
