use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A single particulate reading: where, when in the day, and how much.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    pub zip_code: String,
    pub time_bucket: String,
    pub concentration: f64,
}

impl Reading {
    pub fn new(
        zip_code: impl Into<String>,
        time_bucket: impl Into<String>,
        concentration: f64,
    ) -> Self {
        Self {
            zip_code: zip_code.into(),
            time_bucket: time_bucket.into(),
            concentration,
        }
    }

    pub fn matches(&self, zip_code: &str, time_bucket: &str) -> bool {
        self.zip_code == zip_code && self.time_bucket == time_bucket
    }
}

// Concentrations compare bitwise so readings can live in a hash set.
impl PartialEq for Reading {
    fn eq(&self, other: &Self) -> bool {
        self.zip_code == other.zip_code
            && self.time_bucket == other.time_bucket
            && self.concentration.to_bits() == other.concentration.to_bits()
    }
}

impl Eq for Reading {}

impl Hash for Reading {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.zip_code.hash(state);
        self.time_bucket.hash(state);
        self.concentration.to_bits().hash(state);
    }
}
