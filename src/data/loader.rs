use std::io::ErrorKind;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use super::encoding::Encoding;
use super::model::{Table, Value};
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// How to read a delimited text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub encoding: Encoding,
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            encoding: Encoding::default(),
            delimiter: b',',
        }
    }
}

/// Load a comma-separated table in the given encoding.
pub fn load_table(path: &Path, encoding: Encoding) -> Result<Table, LoadError> {
    load_table_with(
        path,
        &LoadOptions {
            encoding,
            ..LoadOptions::default()
        },
    )
}

/// Load a delimited table.
///
/// The whole file is read and closed before parsing starts. Leading
/// whitespace after a delimiter is insignificant, including before a quoted
/// field; every row must have as many fields as the header. A file without
/// a header row is [`LoadError::Empty`].
pub fn load_table_with(path: &Path, options: &LoadOptions) -> Result<Table, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());

    let text = options
        .encoding
        .decode(&bytes)
        .map_err(|detail| LoadError::Decode {
            path: path.to_path_buf(),
            encoding: options.encoding,
            detail,
        })?;

    let table = parse_delimited(&text, options.delimiter).map_err(|source| {
        LoadError::Malformed {
            path: path.to_path_buf(),
            source,
        }
    })?;
    if table.columns.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    log::info!(
        "loaded {} rows x {} columns from {} ({})",
        table.len(),
        table.columns.len(),
        path.display(),
        options.encoding
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// Delimited text parser
// ---------------------------------------------------------------------------

/// Parse decoded text into a [`Table`]. The first record is the header.
fn parse_delimited(text: &str, delimiter: u8) -> Result<Table, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(text.as_bytes());

    let header: Vec<String> = reader
        .headers()?
        .iter()
        .map(|name| unquote(name.trim_start()))
        .collect();
    let header_refs: Vec<&str> = header.iter().map(String::as_str).collect();

    let rows = reader
        .records()
        .map(|record| record.map(|r| parse_row(&r)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Table::new(&header_refs, rows))
}

fn parse_row(record: &StringRecord) -> Vec<Value> {
    record
        .iter()
        .map(|field| Value::parse(&unquote(field.trim_start())))
        .collect()
}

/// Strip the quotes from a field the csv reader left quoted because a space
/// preceded the opening quote. A delimiter inside such a field has already
/// split it.
fn unquote(field: &str) -> String {
    match field
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => inner.replace("\"\"", "\""),
        None => field.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_initial_space_after_delimiter() {
        let table = parse_delimited("Prob, Cor\n0.1, 0.9\n", b',').unwrap();
        assert_eq!(table.columns, ["Prob", "Cor"]);
        assert_eq!(table.rows[0], [Value::Number(0.1), Value::Number(0.9)]);
    }

    #[test]
    fn quotes_after_initial_space_are_stripped() {
        let text = "Prob, \"Cor\"\n0.1, \"0.9\"\n0.2, \"say \"\"hi\"\"\"\n";
        let table = parse_delimited(text, b',').unwrap();
        assert_eq!(table.columns, ["Prob", "Cor"]);
        assert_eq!(table.rows[0][1], Value::Number(0.9));
        assert_eq!(table.rows[1][1], Value::Text("say \"hi\"".into()));
    }

    #[test]
    fn lone_quote_is_kept() {
        assert_eq!(unquote("\""), "\"");
        assert_eq!(unquote("\"x"), "\"x");
    }

    #[test]
    fn trailing_delimiter_adds_unnamed_column() {
        let table = parse_delimited("Prob,Cor,\n0.01,0.5,\n", b',').unwrap();
        assert_eq!(table.columns, ["Prob", "Cor", "Unnamed: 2"]);
        assert_eq!(table.rows[0][2], Value::Missing);
    }

    #[test]
    fn ragged_rows_are_malformed() {
        assert!(parse_delimited("Prob,Cor\n0.1,0.9,7\n", b',').is_err());
    }

    #[test]
    fn custom_delimiter() {
        let table = parse_delimited("Prob;Cor\n0.1;0.9\n", b';').unwrap();
        assert_eq!(table.column_index("Cor"), Some(1));
    }

    #[test]
    fn header_only_gives_empty_table() {
        let table = parse_delimited("Prob,Cor,Miss,Fail,Ratio\n", b',').unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns.len(), 5);
    }
}
