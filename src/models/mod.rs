pub mod header;
pub mod reading;
pub mod statistic;

pub use header::MenuHeader;
pub use reading::Reading;
pub use statistic::{ConcentrationStats, Statistic};
