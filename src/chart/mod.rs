//! Chart layer: the figure model and its two outputs.
//!
//! `figure` turns a [`Table`](crate::data::model::Table) into a [`Chart`];
//! `png` rasterises it to a file, while the interactive window lives in
//! [`crate::app`].

pub mod figure;
pub mod png;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub use figure::{Chart, ProbRecord, Series, SeriesKind};

use crate::error::RenderError;

/// Where a rendered chart goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// PNG file at `<stem>.png`.
    File { stem: PathBuf },
    /// Interactive window; returns when it is closed.
    Display,
}

/// What a successful render produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    Image(PathBuf),
    Displayed,
}

/// `<stem>.png`, appended rather than substituted so `run.v2` becomes
/// `run.v2.png`.
pub fn png_path(stem: &Path) -> PathBuf {
    let mut name = OsString::from(stem.as_os_str());
    name.push(".png");
    PathBuf::from(name)
}

/// Emit `chart` to `output`.
pub fn render(chart: &Chart, output: &Output) -> Result<Artifact, RenderError> {
    match output {
        Output::File { stem } => {
            let path = png_path(stem);
            png::save_png(chart, &path)?;
            Ok(Artifact::Image(path))
        }
        Output::Display => {
            crate::app::show(chart.clone())?;
            Ok(Artifact::Displayed)
        }
    }
}
