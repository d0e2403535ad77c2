use thiserror::Error;

pub type Result<T> = std::result::Result<T, AirQualityError>;

#[derive(Error, Debug)]
pub enum AirQualityError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("The dataset is empty; load some data first")]
    EmptyDataSet,

    #[error("No readings for zip code {zip_code} at {time_bucket}")]
    NoMatchingItems {
        zip_code: String,
        time_bucket: String,
    },

    #[error("Zip code {0} is not in the dataset")]
    UnknownZipCode(String),

    #[error("Line {line}: missing column {column}")]
    MissingColumn { line: u64, column: usize },

    #[error("Line {line}: invalid concentration '{value}'")]
    InvalidConcentration { line: u64, value: String },
}
