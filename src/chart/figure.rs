use crate::data::model::Table;
use crate::error::RenderError;

/// Independent axis column.
pub const PROB: &str = "Prob";

/// Every column a chart needs, in file order.
pub const REQUIRED_COLUMNS: [&str; 5] = [PROB, "Cor", "Miss", "Fail", "Ratio"];

pub const TITLE: &str = "Graph of Cor, Miss, Fail, and Ratio against Prob";
pub const X_LABEL: &str = "Prob";
pub const Y_LABEL: &str = "Values";

// ---------------------------------------------------------------------------
// ProbRecord – one validated row
// ---------------------------------------------------------------------------

/// One sweep step. Missing cells are NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbRecord {
    pub prob: f64,
    pub cor: f64,
    pub miss: f64,
    pub fail: f64,
    pub ratio: f64,
}

impl ProbRecord {
    /// Extract the required columns from every row.
    ///
    /// All absent columns are reported together, before any cell is read.
    pub fn from_table(table: &Table) -> Result<Vec<Self>, RenderError> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| table.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(RenderError::MissingColumns(missing));
        }

        let [prob, cor, miss, fail, ratio] =
            REQUIRED_COLUMNS.map(|name| numeric_column(table, name));
        let (prob, cor, miss, fail, ratio) = (prob?, cor?, miss?, fail?, ratio?);

        Ok((0..table.len())
            .map(|i| ProbRecord {
                prob: prob[i],
                cor: cor[i],
                miss: miss[i],
                fail: fail[i],
                ratio: ratio[i],
            })
            .collect())
    }

    fn get(&self, kind: SeriesKind) -> f64 {
        match kind {
            SeriesKind::Cor => self.cor,
            SeriesKind::Miss => self.miss,
            SeriesKind::Fail => self.fail,
            SeriesKind::Ratio => self.ratio,
        }
    }
}

/// One column as numbers, one per row. Missing cells are NaN.
fn numeric_column(table: &Table, name: &str) -> Result<Vec<f64>, RenderError> {
    let cells = table
        .column(name)
        .ok_or_else(|| RenderError::MissingColumns(vec![name.to_string()]))?;
    cells
        .enumerate()
        .map(|(row, cell)| {
            cell.as_f64().ok_or_else(|| RenderError::NotNumeric {
                column: name.to_string(),
                row,
                value: cell.to_string(),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

/// The dependent columns, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Cor,
    Miss,
    Fail,
    Ratio,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 4] = [
        SeriesKind::Cor,
        SeriesKind::Miss,
        SeriesKind::Fail,
        SeriesKind::Ratio,
    ];

    /// Column name, also used as the legend label.
    pub fn name(self) -> &'static str {
        match self {
            SeriesKind::Cor => "Cor",
            SeriesKind::Miss => "Miss",
            SeriesKind::Fail => "Fail",
            SeriesKind::Ratio => "Ratio",
        }
    }
}

/// One line of the chart: `(prob, value)` pairs in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub kind: SeriesKind,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    /// Contiguous runs of finite points. A NaN or infinite coordinate breaks
    /// the line.
    pub fn segments(&self) -> impl Iterator<Item = &[(f64, f64)]> {
        self.points
            .split(|(x, y)| !x.is_finite() || !y.is_finite())
            .filter(|run| !run.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Chart – the figure model shared by the PNG and window outputs
// ---------------------------------------------------------------------------

/// Figure size in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    pub width: f32,
    pub height: f32,
}

impl FigureSize {
    pub const DPI: f32 = 100.0;

    /// Size in pixels at [`DPI`](Self::DPI).
    pub fn pixels(self) -> (u32, u32) {
        (
            (self.width * Self::DPI).round() as u32,
            (self.height * Self::DPI).round() as u32,
        )
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 6.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub size: FigureSize,
    /// Always one entry per [`SeriesKind::ALL`], in that order.
    pub series: Vec<Series>,
    pub legend: bool,
    pub grid: bool,
}

impl Chart {
    pub fn from_table(table: &Table) -> Result<Self, RenderError> {
        let records = ProbRecord::from_table(table)?;
        Ok(Self::from_records(&records))
    }

    pub fn from_records(records: &[ProbRecord]) -> Self {
        let series = SeriesKind::ALL
            .iter()
            .map(|&kind| Series {
                kind,
                points: records.iter().map(|r| (r.prob, r.get(kind))).collect(),
            })
            .collect();

        Chart {
            title: TITLE.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            size: FigureSize::default(),
            series,
            legend: true,
            grid: true,
        }
    }

    /// Data bounds `(x_min..x_max, y_min..y_max)` over all finite points,
    /// padded by 5% on each side. Degenerate or empty extents are widened so
    /// both ranges are non-empty.
    pub fn bounds(&self) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
        let finite = self
            .series
            .iter()
            .flat_map(|s| s.segments())
            .flatten()
            .copied();

        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        for (px, py) in finite {
            x = (x.0.min(px), x.1.max(px));
            y = (y.0.min(py), y.1.max(py));
        }
        (padded(x), padded(y))
    }
}

fn padded((lo, hi): (f64, f64)) -> std::ops::Range<f64> {
    if lo > hi {
        return 0.0..1.0;
    }
    if lo == hi {
        let half = if lo == 0.0 { 0.5 } else { lo.abs() * 0.05 };
        return (lo - half)..(hi + half);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad)..(hi + pad)
}
