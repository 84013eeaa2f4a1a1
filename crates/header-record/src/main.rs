//! Build the sample header record and print it to stdout.
//!
//! # Examples
//!
//! ```sh
//! # Single-line debug rendering
//! header
//!
//! # One field per line, with diagnostics on stderr
//! header --format pretty -vv
//!
//! # JSON
//! header --format json
//! ```

use std::io;

use clap::Parser;
use header_record::config::RunConfig;
use header_record::logging;
use header_record::render::Format;

/// Build the sample header record and print it to stdout.
#[derive(Parser)]
#[command(name = "header")]
struct Cli {
    /// Rendering of the record.
    #[arg(long, value_enum, default_value_t = Format::Debug)]
    format: Format,

    /// Log diagnostics to stderr (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), String> {
    let cli = Cli::parse();

    let config = RunConfig {
        format: cli.format,
        verbosity: cli.verbose,
    };
    logging::init(config.log_level());

    config.run(&mut io::stdout().lock())
}
