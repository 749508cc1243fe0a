//! Values as the calling environment hands them over.

use serde::Serialize;
use tp_core::{PropsError, PropsResult};

/// One argument cell: a scalar, or a rectangular range of scalars.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
    /// Row-major range.
    Grid(Vec<Vec<CellValue>>),
}

impl CellValue {
    /// A 1×n range.
    pub fn row(values: impl IntoIterator<Item = f64>) -> Self {
        CellValue::Grid(vec![values.into_iter().map(CellValue::Number).collect()])
    }

    /// An n×1 range.
    pub fn column(values: impl IntoIterator<Item = f64>) -> Self {
        CellValue::Grid(
            values
                .into_iter()
                .map(|v| vec![CellValue::Number(v)])
                .collect(),
        )
    }

    /// Display text of a scalar cell; `None` for empty cells and ranges.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Number(x) => Some(x.to_string()),
            CellValue::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
            CellValue::Empty | CellValue::Grid(_) => None,
        }
    }

    /// Flatten a single-row or single-column range; a scalar is a list of one.
    pub fn cells(&self) -> PropsResult<(Vec<&CellValue>, Orientation)> {
        let CellValue::Grid(rows) = self else {
            return Ok((vec![self], Orientation::Column));
        };
        let width = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || width == 0 || rows.iter().any(|r| r.len() != width) {
            return Err(not_a_line());
        }
        if rows.len() == 1 && width > 1 {
            Ok((rows[0].iter().collect(), Orientation::Row))
        } else if width == 1 {
            Ok((rows.iter().map(|r| &r[0]).collect(), Orientation::Column))
        } else {
            Err(not_a_line())
        }
    }
}

fn not_a_line() -> PropsError {
    PropsError::TypeMismatch {
        what: "Array must be a single row or single column.".to_string(),
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

/// Layout of a one-dimensional range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Row,
    Column,
}

/// A numeric argument ready for broadcasting.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Scalar(f64),
    Sequence {
        values: Vec<f64>,
        orientation: Orientation,
    },
}

impl Arg {
    /// Validate a cell as a scalar or a one-dimensional numeric range.
    ///
    /// `label` names the argument in errors, e.g. "First property value".
    pub fn from_cell(label: &'static str, cell: &CellValue) -> PropsResult<Self> {
        match cell {
            CellValue::Grid(_) => {
                let (cells, orientation) = cell.cells()?;
                let values = cells
                    .into_iter()
                    .enumerate()
                    .map(|(i, c)| match c {
                        CellValue::Number(x) => Ok(*x),
                        _ => Err(PropsError::TypeMismatch {
                            what: format!("Element at position {i} is not a number."),
                        }),
                    })
                    .collect::<PropsResult<Vec<f64>>>()?;
                Ok(Arg::Sequence {
                    values,
                    orientation,
                })
            }
            other => scalar(label, other).map(Arg::Scalar),
        }
    }

    /// Sequence length, `None` for a scalar.
    pub fn sequence_len(&self) -> Option<usize> {
        match self {
            Arg::Scalar(_) => None,
            Arg::Sequence { values, .. } => Some(values.len()),
        }
    }

    /// Value at output index `i`; a scalar repeats.
    pub fn at(&self, i: usize) -> f64 {
        match self {
            Arg::Scalar(x) => *x,
            Arg::Sequence { values, .. } => values[i],
        }
    }

    pub fn orientation(&self) -> Option<Orientation> {
        match self {
            Arg::Scalar(_) => None,
            Arg::Sequence { orientation, .. } => Some(*orientation),
        }
    }

    /// Apply `f` to every element, keeping the shape.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        match self {
            Arg::Scalar(x) => Arg::Scalar(f(x)),
            Arg::Sequence {
                values,
                orientation,
            } => Arg::Sequence {
                values: values.into_iter().map(f).collect(),
                orientation,
            },
        }
    }
}

/// Validate a cell that must hold a single number.
pub fn scalar(label: &'static str, cell: &CellValue) -> PropsResult<f64> {
    match cell {
        CellValue::Number(x) => Ok(*x),
        CellValue::Empty => Err(PropsError::MissingArgument { what: label }),
        _ => Err(PropsError::TypeMismatch {
            what: format!("{label} is not a number."),
        }),
    }
}

/// Result handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", content = "values", rename_all = "lowercase")]
pub enum Evaluated {
    Scalar(f64),
    Row(Vec<f64>),
    Column(Vec<f64>),
}

impl Evaluated {
    pub fn sequence(values: Vec<f64>, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Row => Evaluated::Row(values),
            Orientation::Column => Evaluated::Column(values),
        }
    }

    pub fn values(&self) -> &[f64] {
        match self {
            Evaluated::Scalar(x) => std::slice::from_ref(x),
            Evaluated::Row(v) | Evaluated::Column(v) => v,
        }
    }

    /// Back to a cell: a number, a 1×n range or an n×1 range.
    pub fn into_cell(self) -> CellValue {
        match self {
            Evaluated::Scalar(x) => CellValue::Number(x),
            Evaluated::Row(v) => CellValue::row(v),
            Evaluated::Column(v) => CellValue::column(v),
        }
    }
}
