use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use probchart::{Artifact, ChartConfig, Encoding};

/// Read a file and save a plot of its data as `<outputname>.png`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The path to the input file.
    filename: PathBuf,

    /// The path to the output file (`.png` is appended).
    outputname: PathBuf,

    #[arg(long, value_enum, default_value = "utf-8")]
    encoding: Encoding,

    #[arg(long, default_value_t = ',')]
    delimiter: char,
}

fn run(args: Args) -> Result<()> {
    let cfg = ChartConfig {
        encoding: args.encoding,
        delimiter: args.delimiter,
        ..ChartConfig::save(args.outputname)
    };

    if let Artifact::Image(path) = probchart::run(&args.filename, &cfg)? {
        log::info!("saved {}", path.display());
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
