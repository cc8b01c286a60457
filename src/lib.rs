//! Line charts of recovery-experiment sweeps.
//!
//! Reads a delimited table with `Prob`, `Cor`, `Miss`, `Fail` and `Ratio`
//! columns and plots the last four against `Prob`, either into a PNG file or
//! an interactive window.

pub mod app;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod ui;

use std::path::Path;

pub use chart::{render, Artifact, Chart, Output};
pub use config::{ChartConfig, OutputMode};
pub use data::encoding::Encoding;
pub use data::loader::{load_table, load_table_with, LoadOptions};
pub use data::model::Table;
pub use error::{ChartError, LoadError, RenderError};

/// Load `input`, optionally print a preview, and render the chart.
///
/// The config is validated before the input is touched, and the table is
/// validated before any output is created.
pub fn run(input: &Path, config: &ChartConfig) -> Result<Artifact, ChartError> {
    let output = config.output()?;
    let options = config.load_options()?;

    let table = load_table_with(input, &options)?;

    if config.preview_rows > 0 {
        println!("Data preview:");
        println!("{}", table.head(config.preview_rows));
    }

    let chart = Chart::from_table(&table)?;
    log::debug!(
        "chart has {} series of {} points",
        chart.series.len(),
        table.len()
    );

    Ok(render(&chart, &output)?)
}
