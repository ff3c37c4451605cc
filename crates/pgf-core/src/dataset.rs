// File: crates/pgf-core/src/dataset.rs
// Summary: Rectangular numeric dataset (rows = variables, columns = samples) and its delimited serialization.

use std::io;

use crate::error::{FigureError, FigureResult};

/// Two-dimensional numeric array. Row 0 is the independent variable, rows
/// 1..N-1 are dependent series, columns are samples.
/// Contract: all rows have the same length (checked at construction; there is
/// no mutation API, so the shape cannot degrade afterwards).
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    rows: Vec<Vec<f64>>,
}

impl Dataset {
    /// Build a dataset from variable rows. Rejects ragged input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> FigureResult<Self> {
        if let Some(first) = rows.first() {
            let want = first.len();
            for (i, row) in rows.iter().enumerate() {
                if row.len() != want {
                    return Err(FigureError::InvalidData(format!(
                        "row {} has {} samples, expected {}",
                        i,
                        row.len(),
                        want
                    )));
                }
            }
        }
        Ok(Self { rows })
    }

    /// Build a dataset from one independent vector plus its dependent series.
    pub fn from_series(x: Vec<f64>, series: Vec<Vec<f64>>) -> FigureResult<Self> {
        let mut rows = Vec::with_capacity(series.len() + 1);
        rows.push(x);
        rows.extend(series);
        Self::from_rows(rows)
    }

    pub fn row_count(&self) -> usize { self.rows.len() }

    /// Samples per row (0 for an empty dataset).
    pub fn sample_count(&self) -> usize { self.rows.first().map_or(0, Vec::len) }

    pub fn rows(&self) -> &[Vec<f64>] { &self.rows }

    /// Derived column labels: `x` for row 0, then `y1`, `y2`, ... One entry
    /// per row.
    pub fn headers(&self) -> Vec<String> {
        (0..self.rows.len())
            .map(|i| if i == 0 { "x".to_string() } else { format!("y{i}") })
            .collect()
    }

    /// Write the header row plus one record per sample (the transposed
    /// dataset) to `sink`. The field separator is a semicolon so it never
    /// collides with the decimal point.
    /// Record lengths are not enforced: `headers` may be stale after a data
    /// swap (see `Figure::set_data`).
    pub fn write_delimited<W: io::Write>(&self, headers: &[String], sink: W) -> FigureResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .flexible(true)
            .from_writer(sink);
        writer.write_record(headers)?;
        for col in 0..self.sample_count() {
            let record: Vec<String> = self.rows.iter().map(|row| row[col].to_string()).collect();
            writer.write_record(&record)?;
        }
        writer.flush()?;
        Ok(())
    }
}
