use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;

/// Title line printed above the main menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MenuHeader {
    // Keep in sync with utils::constants::MAX_HEADER_LEN
    #[validate(length(max = 30))]
    text: String,
}

impl MenuHeader {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let header = Self { text: text.into() };
        header.validate()?;
        Ok(header)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for MenuHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
