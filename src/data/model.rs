use std::fmt;

// ---------------------------------------------------------------------------
// Value – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, mirroring how a data-frame loader types CSV text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    /// Empty cell.
    Missing,
}

/// Cell texts that mean "no value", as data-frame loaders read them.
pub const MISSING_MARKERS: [&str; 19] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null", "",
];

static MISSING: Value = Value::Missing;

impl Value {
    /// Classify a raw field. Surrounding whitespace never makes a number
    /// non-numeric; empty cells and [`MISSING_MARKERS`] are `Missing`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if MISSING_MARKERS.contains(&trimmed) {
            return Value::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(v) => Value::Number(v),
            Err(_) => Value::Text(raw.to_string()),
        }
    }

    /// Numeric view of the cell. Missing cells read as NaN so they become gaps
    /// in a plotted line; text has no numeric view.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            Value::Missing => Some(f64::NAN),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{v}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Missing => write!(f, "NaN"),
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded file
// ---------------------------------------------------------------------------

/// Row-oriented contents of a delimited text file.
///
/// The loader rejects ragged input. Tables built by hand may have short
/// rows; absent cells read as [`Value::Missing`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Column names in file order, already normalised (see [`Table::new`]).
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Build a table from raw header cells and typed rows.
    ///
    /// Header names lose leading whitespace, blank names become
    /// `Unnamed: <index>` and repeated names get a `.1`, `.2`, ... suffix.
    pub fn new(header: &[&str], rows: Vec<Vec<Value>>) -> Self {
        let mut columns: Vec<String> = Vec::with_capacity(header.len());
        for (idx, raw) in header.iter().enumerate() {
            let name = raw.trim_start();
            let base = if name.is_empty() {
                format!("Unnamed: {idx}")
            } else {
                name.to_string()
            };

            let mut candidate = base.clone();
            let mut dup = 0;
            while columns.contains(&candidate) {
                dup += 1;
                candidate = format!("{base}.{dup}");
            }
            columns.push(candidate);
        }
        Table { columns, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All cells of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Value> + '_> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row.get(idx).unwrap_or(&MISSING)))
    }

    /// Printable preview of the first `n` rows.
    pub fn head(&self, n: usize) -> Preview<'_> {
        Preview {
            table: self,
            rows: n.min(self.rows.len()),
        }
    }
}

// ---------------------------------------------------------------------------
// Preview – data-frame style text rendering of the first rows
// ---------------------------------------------------------------------------

/// Right-aligned text grid with a leading row index column.
///
/// ```text
///    Prob  Cor  Miss  Fail  Ratio
/// 0   0.1  0.9  0.05  0.05     18
/// 1   0.2  0.8   0.1   0.1      8
/// ```
pub struct Preview<'a> {
    table: &'a Table,
    rows: usize,
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n_cols = self.table.columns.len();
        let cells: Vec<Vec<String>> = self.table.rows[..self.rows]
            .iter()
            .map(|row| {
                (0..n_cols)
                    .map(|c| row.get(c).unwrap_or(&MISSING).to_string())
                    .collect()
            })
            .collect();

        let index_width = self.rows.saturating_sub(1).to_string().len();
        let widths: Vec<usize> = self
            .table
            .columns
            .iter()
            .enumerate()
            .map(|(c, name)| {
                cells
                    .iter()
                    .map(|row| row[c].chars().count())
                    .fold(name.chars().count(), usize::max)
            })
            .collect();

        write!(f, "{:index_width$}", "")?;
        for (name, width) in self.table.columns.iter().zip(&widths) {
            write!(f, "  {name:>width$}")?;
        }

        for (i, row) in cells.iter().enumerate() {
            write!(f, "\n{i:<index_width$}")?;
            for (cell, width) in row.iter().zip(&widths) {
                write!(f, "  {cell:>width$}")?;
            }
        }
        Ok(())
    }
}
