//! Entry point for the `getaway` command-line interface.
#![forbid(unsafe_code)]

use getaway_cli::{CliError, init_logging, run};

fn main() {
    init_logging();
    if let Err(err) = run() {
        if let CliError::ArgumentParsing(parse) = &err {
            parse.exit();
        }
        eprintln!("getaway: {err}");
        std::process::exit(1);
    }
}
