use crate::models::Statistic;
use crate::utils::constants::{CELL_WIDTH, NOT_AVAILABLE};
use std::io::{self, Write};

/// One zip code's row: a cell per time bucket, `None` where there were no readings.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossTableRow {
    pub zip_code: String,
    pub cells: Vec<Option<f64>>,
}

/// Zip codes down the side, time buckets across the top.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossTable {
    pub statistic: Statistic,
    pub time_buckets: Vec<String>,
    pub rows: Vec<CrossTableRow>,
}

impl CrossTable {
    pub fn zip_codes(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.zip_code.as_str())
    }

    pub fn cell(&self, zip_code: &str, time_bucket: &str) -> Option<f64> {
        let column = self.time_buckets.iter().position(|t| t == time_bucket)?;
        self.rows
            .iter()
            .find(|row| row.zip_code == zip_code)
            .and_then(|row| row.cells.get(column).copied().flatten())
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{:width$}", "", width = CELL_WIDTH)?;
        for time_bucket in &self.time_buckets {
            write!(out, "{:>width$}", time_bucket, width = CELL_WIDTH)?;
        }
        writeln!(out)?;

        for row in &self.rows {
            write!(out, "{:<width$}", row.zip_code, width = CELL_WIDTH)?;
            for cell in &row.cells {
                match cell {
                    Some(value) => write!(out, "{:>width$.2}", value, width = CELL_WIDTH)?,
                    None => write!(out, "{:>width$}", NOT_AVAILABLE, width = CELL_WIDTH)?,
                }
            }
            writeln!(out)?;
        }

        Ok(())
    }
}
