use crate::error::{AirQualityError, Result};
use crate::models::{ConcentrationStats, MenuHeader, Reading, Statistic};
use crate::processors::cross_table::{CrossTable, CrossTableRow};
use crate::processors::zip_filter::{FilterState, ZipFilter};
use crate::readers::ReadingReader;
use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Outcome of a load: how many rows came in and how many survived deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub rows_read: usize,
    pub unique_records: usize,
}

/// The in-memory reading store behind the menu.
///
/// `records` is `None` until the first load, which keeps "never loaded"
/// distinct from "loaded an empty file". Every load replaces the records,
/// the zip filter and the time buckets together.
#[derive(Debug, Default)]
pub struct Dataset {
    records: Option<IndexSet<Reading>>,
    zip_filter: ZipFilter,
    time_buckets: Vec<String>,
    header: MenuHeader,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> &MenuHeader {
        &self.header
    }

    /// Replace the header. An over-long header is rejected and the old one kept.
    pub fn set_header(&mut self, text: &str) -> Result<()> {
        self.header = MenuHeader::new(text)?;
        debug!(header = %self.header, "header set");
        Ok(())
    }

    pub fn has_data(&self) -> bool {
        self.records.is_some()
    }

    pub fn record_count(&self) -> usize {
        self.records.as_ref().map_or(0, IndexSet::len)
    }

    pub fn records(&self) -> impl Iterator<Item = &Reading> {
        self.records.iter().flatten()
    }

    pub fn time_buckets(&self) -> &[String] {
        &self.time_buckets
    }

    /// Replace the dataset contents. Duplicate readings collapse to one.
    pub fn load<I>(&mut self, readings: I) -> LoadSummary
    where
        I: IntoIterator<Item = Reading>,
    {
        let mut rows_read = 0;
        let records: IndexSet<Reading> = readings
            .into_iter()
            .inspect(|_| rows_read += 1)
            .collect();

        self.zip_filter = ZipFilter::from_zip_codes(records.iter().map(|r| r.zip_code.as_str()));

        let buckets: BTreeSet<&str> = records.iter().map(|r| r.time_bucket.as_str()).collect();
        self.time_buckets = buckets.into_iter().rev().map(str::to_string).collect();

        let summary = LoadSummary {
            rows_read,
            unique_records: records.len(),
        };
        self.records = Some(records);

        info!(
            rows_read = summary.rows_read,
            unique_records = summary.unique_records,
            zip_codes = self.zip_filter.len(),
            time_buckets = self.time_buckets.len(),
            "dataset loaded"
        );

        summary
    }

    /// Load readings from a file. On error the current contents are left alone.
    pub fn load_file(&mut self, path: &Path) -> Result<LoadSummary> {
        let readings = ReadingReader::new().read_readings(path)?;
        Ok(self.load(readings))
    }

    /// Load the small built-in sample set.
    pub fn load_default_data(&mut self) -> LoadSummary {
        self.load(default_readings())
    }

    pub fn toggle(&mut self, zip_code: &str) -> Result<FilterState> {
        let state = self.zip_filter.toggle(zip_code)?;
        debug!(zip_code, %state, "zip filter toggled");
        Ok(state)
    }

    pub fn list_filters(&self) -> IndexMap<String, FilterState> {
        self.zip_filter.snapshot()
    }

    /// Min, mean and max concentration for one zip code and time bucket.
    pub fn aggregate(&self, zip_code: &str, time_bucket: &str) -> Result<ConcentrationStats> {
        let records = self
            .records
            .as_ref()
            .filter(|records| !records.is_empty())
            .ok_or(AirQualityError::EmptyDataSet)?;

        let concentrations = records
            .iter()
            .filter(|r| r.matches(zip_code, time_bucket))
            .map(|r| r.concentration);

        ConcentrationStats::from_concentrations(concentrations).ok_or_else(|| {
            AirQualityError::NoMatchingItems {
                zip_code: zip_code.to_string(),
                time_bucket: time_bucket.to_string(),
            }
        })
    }

    /// Build the cross table for the active zip codes.
    pub fn cross_table(&self, statistic: Statistic) -> Result<CrossTable> {
        if self.record_count() == 0 {
            return Err(AirQualityError::EmptyDataSet);
        }

        let mut rows = Vec::new();
        for zip_code in self.zip_filter.active_zip_codes() {
            let mut cells = Vec::with_capacity(self.time_buckets.len());
            for time_bucket in &self.time_buckets {
                match self.aggregate(zip_code, time_bucket) {
                    Ok(stats) => cells.push(Some(stats.get(statistic))),
                    Err(AirQualityError::NoMatchingItems { .. }) => cells.push(None),
                    Err(e) => return Err(e),
                }
            }
            rows.push(CrossTableRow {
                zip_code: zip_code.to_string(),
                cells,
            });
        }

        Ok(CrossTable {
            statistic,
            time_buckets: self.time_buckets.clone(),
            rows,
        })
    }

    /// Print the cross table, or a reminder to load data when there is none.
    pub fn render_cross_table<W: Write>(&self, statistic: Statistic, out: &mut W) -> Result<()> {
        match self.cross_table(statistic) {
            Ok(table) => {
                debug!(
                    statistic = table.statistic.label(),
                    rows = table.rows.len(),
                    "rendering cross table"
                );
                table.render(out)?
            }
            Err(AirQualityError::EmptyDataSet) => writeln!(out, "Please load some data.")?,
            Err(e) => return Err(e),
        }
        Ok(())
    }
}

fn default_readings() -> Vec<Reading> {
    vec![
        Reading::new("12345", "Morning", 1.1),
        Reading::new("94022", "Morning", 2.2),
        Reading::new("94040", "Morning", 3.0),
        Reading::new("94022", "Midday", 1.0),
        Reading::new("94040", "Morning", 1.0),
        Reading::new("94022", "Evening", 3.2),
    ]
}
