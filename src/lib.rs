pub mod cli;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;

pub use error::{AirQualityError, Result};
pub use models::{ConcentrationStats, Reading, Statistic};
pub use processors::{CrossTable, Dataset, FilterState};
