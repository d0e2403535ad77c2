pub mod constants;
pub mod logging;
pub mod progress;

pub use constants::*;
pub use logging::setup_logging;
pub use progress::ProgressReporter;
