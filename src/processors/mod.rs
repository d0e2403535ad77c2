pub mod cross_table;
pub mod dataset;
pub mod zip_filter;

pub use cross_table::{CrossTable, CrossTableRow};
pub use dataset::{Dataset, LoadSummary};
pub use zip_filter::{FilterState, ZipFilter};
