use crate::error::{AirQualityError, Result};
use crate::models::Reading;
use crate::utils::constants::{
    CONCENTRATION_COLUMN, DEFAULT_BUFFER_SIZE, TIME_BUCKET_COLUMN, ZIP_CODE_COLUMN,
};
use csv::StringRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Reads particulate readings from a comma-separated export.
///
/// Only three columns are used, picked by position: zip code, time bucket
/// and concentration. Every other column is ignored.
pub struct ReadingReader {
    has_headers: bool,
}

impl ReadingReader {
    pub fn new() -> Self {
        Self { has_headers: true }
    }

    pub fn with_headers(has_headers: bool) -> Self {
        Self { has_headers }
    }

    /// Read all readings from a file. The file is closed before this returns.
    pub fn read_readings(&self, path: &Path) -> Result<Vec<Reading>> {
        let file = File::open(path)?;
        let readings = self.read_from(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file))?;
        debug!(path = %path.display(), rows = readings.len(), "read readings file");
        Ok(readings)
    }

    /// Read all readings from any byte source.
    pub fn read_from<R: Read>(&self, source: R) -> Result<Vec<Reading>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .flexible(true)
            .from_reader(source);

        let mut readings = Vec::new();
        for result in reader.records() {
            let record = result?;
            readings.push(self.parse_record(&record)?);
        }

        Ok(readings)
    }

    /// Parse a single row into a reading
    fn parse_record(&self, record: &StringRecord) -> Result<Reading> {
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let zip_code = field(record, ZIP_CODE_COLUMN, line)?;
        let time_bucket = field(record, TIME_BUCKET_COLUMN, line)?;
        let raw_concentration = field(record, CONCENTRATION_COLUMN, line)?;

        let concentration = raw_concentration.trim().parse::<f64>().map_err(|_| {
            AirQualityError::InvalidConcentration {
                line,
                value: raw_concentration.to_string(),
            }
        })?;

        Ok(Reading::new(zip_code, time_bucket, concentration))
    }
}

fn field(record: &StringRecord, column: usize, line: u64) -> Result<&str> {
    record
        .get(column)
        .ok_or(AirQualityError::MissingColumn { line, column })
}

impl Default for ReadingReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "sensor,zip,lat,lon,time,pm25";

    #[test]
    fn test_read_readings_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{}", HEADER)?;
        writeln!(temp_file, "a1,94022,37.3,-122.1,Morning,2.2")?;
        writeln!(temp_file, "a2,94040,37.4,-122.0,Midday,3.0,extra,columns")?;

        let reader = ReadingReader::new();
        let readings = reader.read_readings(temp_file.path())?;

        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0], Reading::new("94022", "Morning", 2.2));
        assert_eq!(readings[1], Reading::new("94040", "Midday", 3.0));

        Ok(())
    }

    #[test]
    fn test_duplicate_rows_are_kept_by_reader() -> Result<()> {
        let data = format!("{HEADER}\nx,12345,0,0,Night,1.5\nx,12345,0,0,Night,1.5\n");
        let readings = ReadingReader::new().read_from(data.as_bytes())?;
        assert_eq!(readings.len(), 2);
        Ok(())
    }

    #[test]
    fn test_without_headers() -> Result<()> {
        let data = "x,12345,0,0,Night,1.5\n";
        let readings = ReadingReader::with_headers(false).read_from(data.as_bytes())?;
        assert_eq!(readings, vec![Reading::new("12345", "Night", 1.5)]);
        Ok(())
    }

    #[test]
    fn test_short_row_is_rejected() {
        let data = format!("{HEADER}\nx,12345,0,0,Night\n");
        let result = ReadingReader::new().read_from(data.as_bytes());
        assert!(matches!(
            result,
            Err(AirQualityError::MissingColumn {
                line: 2,
                column: CONCENTRATION_COLUMN
            })
        ));
    }

    #[test]
    fn test_non_numeric_concentration_is_rejected() {
        let data = format!("{HEADER}\nx,12345,0,0,Night,high\n");
        match ReadingReader::new().read_from(data.as_bytes()) {
            Err(AirQualityError::InvalidConcentration { line, value }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "high");
            }
            other => panic!("expected InvalidConcentration, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let reader = ReadingReader::new();
        let result = reader.read_readings(Path::new("does/not/exist.csv"));
        assert!(matches!(result, Err(AirQualityError::Io(_))));
    }
}
