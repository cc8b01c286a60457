use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use probchart::{ChartConfig, Encoding, OutputMode};

/// Plot Cor, Miss, Fail and Ratio against Prob from a delimited table.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Input table.
    filename: PathBuf,

    /// JSON file with a chart config; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    encoding: Option<Encoding>,

    #[arg(long, value_enum)]
    output_mode: Option<OutputMode>,

    /// Output path stem; `.png` is appended.
    #[arg(long)]
    destination: Option<PathBuf>,

    #[arg(long)]
    delimiter: Option<char>,

    /// Print the first N rows before rendering.
    #[arg(long, value_name = "N")]
    preview: Option<usize>,
}

impl Cli {
    fn chart_config(&self) -> Result<ChartConfig> {
        let mut cfg = match &self.config {
            Some(path) => ChartConfig::from_json_file(path)?,
            None => ChartConfig::default(),
        };
        if let Some(encoding) = self.encoding {
            cfg.encoding = encoding;
        }
        if let Some(mode) = self.output_mode {
            cfg.output_mode = mode;
        }
        if let Some(dest) = &self.destination {
            cfg.destination = Some(dest.clone());
        }
        if let Some(delimiter) = self.delimiter {
            cfg.delimiter = delimiter;
        }
        if let Some(rows) = self.preview {
            cfg.preview_rows = rows;
        }
        Ok(cfg)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cfg = cli.chart_config()?;
    let artifact = probchart::run(&cli.filename, &cfg)
        .with_context(|| format!("charting {}", cli.filename.display()))?;
    log::info!("done: {artifact:?}");
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
