use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use probchart::{ChartConfig, Encoding};

/// Read a file, print a preview of its data, and plot it in a window.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The path to the input file.
    filename: PathBuf,

    /// Defaults to UTF-16, the encoding of a Windows console redirect.
    #[arg(long, value_enum, default_value = "utf-16")]
    encoding: Encoding,

    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Rows to preview.
    #[arg(long, default_value_t = 5)]
    rows: usize,
}

fn run(args: Args) -> Result<()> {
    let cfg = ChartConfig {
        encoding: args.encoding,
        delimiter: args.delimiter,
        preview_rows: args.rows,
        ..ChartConfig::display()
    };
    probchart::run(&args.filename, &cfg)?;
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
