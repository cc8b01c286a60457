use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::data::encoding::Encoding;

/// Failure to turn an input file into a [`Table`](crate::data::model::Table).
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("input file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} cannot be decoded as {encoding}: {detail}", .path.display())]
    Decode {
        path: PathBuf,
        encoding: Encoding,
        detail: String,
    },

    #[error("malformed delimited data in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("no columns to parse from {}", .path.display())]
    Empty { path: PathBuf },
}

/// Failure to build or emit a chart from a loaded table.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("required column(s) missing from table: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("column '{column}', row {row}: '{value}' is not a number")]
    NotNumeric {
        column: String,
        row: usize,
        value: String,
    },

    #[error("failed to draw chart: {0}")]
    Draw(String),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to open chart window: {0}")]
    Viewer(String),
}

/// Everything that can end a single [`run`](crate::run).
#[derive(Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
