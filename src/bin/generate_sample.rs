use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use probchart::Encoding;

/// Write a synthetic recovery sweep in the experiment driver's format:
/// a `Prob,Cor,Miss,Fail,Ratio,` header and one row per probability step,
/// each line ending in a delimiter.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Output file.
    output: PathBuf,

    #[arg(long, value_enum, default_value = "utf-16")]
    encoding: Encoding,

    /// Probability increment between rows.
    #[arg(long, default_value_t = 0.01)]
    step: f64,
}

/// Recovery outcome at mutation probability `p`, as fractions of the
/// original path length plus the recovered-size ratio.
fn sweep_row(p: f64) -> [f64; 4] {
    let cor = (1.0 - p).powi(4);
    let miss = p * (1.0 - p).powi(2);
    let fail = (1.0 - cor - miss).max(0.0);
    let ratio = 1.0 + 2.0 * p + 0.5 * p * p;
    [cor, miss, fail, ratio]
}

fn sweep(step: f64) -> String {
    let mut out = String::from("Prob,Cor,Miss,Fail,Ratio,\n");
    let mut p = 0.0;
    // Accumulated like the driver does, so the last row lands on ~1.0.
    while p < 1.0 {
        p += step;
        let [cor, miss, fail, ratio] = sweep_row(p);
        out.push_str(&format!("{p},{cor},{miss},{fail},{ratio},\n"));
    }
    out
}

fn run(args: &Args) -> Result<()> {
    if !(args.step > 0.0 && args.step <= 1.0) {
        bail!("step must be in (0, 1], got {}", args.step);
    }

    let text = sweep(args.step);
    let rows = text.lines().count() - 1;
    std::fs::write(&args.output, args.encoding.encode(&text))
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "Wrote {rows} sweep rows ({}) to {}",
        args.encoding,
        args.output.display()
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
