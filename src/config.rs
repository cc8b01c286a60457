use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chart::Output;
use crate::data::encoding::Encoding;
use crate::data::loader::LoadOptions;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("output mode 'file' needs a destination")]
    MissingDestination,

    #[error("delimiter must be a single ASCII character, got {0:?}")]
    Delimiter(char),
}

/// Whether the chart is written to disk or shown in a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    File,
    Display,
}

// ---------------------------------------------------------------------------
// ChartConfig – one run, fully described
// ---------------------------------------------------------------------------

/// Settings for a single load-and-render pass.
///
/// Can be read from JSON; every field is optional there:
///
/// ```json
/// { "encoding": "utf-16", "output_mode": "file", "destination": "out/sweep" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub encoding: Encoding,
    pub output_mode: OutputMode,
    /// Output path stem; `.png` is appended. Required in file mode.
    pub destination: Option<PathBuf>,
    pub delimiter: char,
    /// Rows of the table to print before rendering; 0 prints nothing.
    pub preview_rows: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            encoding: Encoding::default(),
            output_mode: OutputMode::default(),
            destination: None,
            delimiter: ',',
            preview_rows: 0,
        }
    }
}

impl ChartConfig {
    /// Write the chart to `<stem>.png`.
    pub fn save(stem: impl Into<PathBuf>) -> Self {
        Self {
            destination: Some(stem.into()),
            ..Self::default()
        }
    }

    /// Show the chart in a window.
    pub fn display() -> Self {
        Self {
            output_mode: OutputMode::Display,
            ..Self::default()
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_options(&self) -> Result<LoadOptions, ConfigError> {
        if !self.delimiter.is_ascii() {
            return Err(ConfigError::Delimiter(self.delimiter));
        }
        Ok(LoadOptions {
            encoding: self.encoding,
            delimiter: self.delimiter as u8,
        })
    }

    pub fn output(&self) -> Result<Output, ConfigError> {
        match self.output_mode {
            OutputMode::File => self
                .destination
                .clone()
                .map(|stem| Output::File { stem })
                .ok_or(ConfigError::MissingDestination),
            OutputMode::Display => Ok(Output::Display),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_defaults_for_absent_fields() {
        let cfg: ChartConfig =
            serde_json::from_str(r#"{ "encoding": "utf-16", "destination": "out" }"#).unwrap();
        assert_eq!(cfg.encoding, Encoding::Utf16);
        assert_eq!(cfg.output_mode, OutputMode::File);
        assert_eq!(cfg.delimiter, ',');
        assert_eq!(
            cfg.output().unwrap(),
            Output::File {
                stem: PathBuf::from("out")
            }
        );
    }

    #[test]
    fn display_mode_ignores_destination() {
        let cfg: ChartConfig =
            serde_json::from_str(r#"{ "output_mode": "display", "destination": "x" }"#).unwrap();
        assert_eq!(cfg.output().unwrap(), Output::Display);
    }

    #[test]
    fn file_mode_needs_destination() {
        assert!(matches!(
            ChartConfig::default().output(),
            Err(ConfigError::MissingDestination)
        ));
    }

    #[test]
    fn unknown_encoding_is_rejected() {
        assert!(serde_json::from_str::<ChartConfig>(r#"{ "encoding": "latin-1" }"#).is_err());
    }

    #[test]
    fn delimiter_must_be_ascii() {
        let cfg = ChartConfig {
            delimiter: '§',
            ..ChartConfig::default()
        };
        assert!(matches!(cfg.load_options(), Err(ConfigError::Delimiter('§'))));

        let cfg = ChartConfig {
            delimiter: ';',
            ..ChartConfig::save("out")
        };
        assert_eq!(cfg.load_options().unwrap().delimiter, b';');
    }
}
