/// File names
pub const DEFAULT_DATA_FILE: &str = "purple_air.csv";

/// Input column positions (0-based)
pub const ZIP_CODE_COLUMN: usize = 1;
pub const TIME_BUCKET_COLUMN: usize = 4;
pub const CONCENTRATION_COLUMN: usize = 5;

/// Header constraints
pub const MAX_HEADER_LEN: usize = 30;

/// Cross table layout
pub const CELL_WIDTH: usize = 10;
pub const NOT_AVAILABLE: &str = "N/A";

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
