use crate::error::{AirQualityError, Result};
use indexmap::IndexMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    Active,
    Inactive,
}

impl FilterState {
    pub fn toggled(self) -> Self {
        match self {
            FilterState::Active => FilterState::Inactive,
            FilterState::Inactive => FilterState::Active,
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, FilterState::Active)
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterState::Active => f.write_str("Active"),
            FilterState::Inactive => f.write_str("Inactive"),
        }
    }
}

/// Per-zip-code visibility, kept in the order zip codes first appeared.
///
/// Toggling never moves an entry, so a zip code that is switched off and
/// back on returns to its original row in the cross table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZipFilter {
    states: IndexMap<String, FilterState>,
}

impl ZipFilter {
    /// Build a filter with every zip code active. Repeats are ignored.
    pub fn from_zip_codes<'a, I>(zip_codes: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut states = IndexMap::new();
        for zip_code in zip_codes {
            states
                .entry(zip_code.to_string())
                .or_insert(FilterState::Active);
        }
        Self { states }
    }

    pub fn toggle(&mut self, zip_code: &str) -> Result<FilterState> {
        let state = self
            .states
            .get_mut(zip_code)
            .ok_or_else(|| AirQualityError::UnknownZipCode(zip_code.to_string()))?;
        *state = state.toggled();
        Ok(*state)
    }

    pub fn state(&self, zip_code: &str) -> Option<FilterState> {
        self.states.get(zip_code).copied()
    }

    pub fn active_zip_codes(&self) -> impl Iterator<Item = &str> {
        self.states
            .iter()
            .filter(|(_, state)| state.is_active())
            .map(|(zip_code, _)| zip_code.as_str())
    }

    pub fn snapshot(&self) -> IndexMap<String, FilterState> {
        self.states.clone()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_active_in_first_seen_order() {
        let filter = ZipFilter::from_zip_codes(["94022", "12345", "94022", "94040"]);

        assert_eq!(filter.len(), 3);
        assert!(!filter.is_empty());
        let zips: Vec<&str> = filter.active_zip_codes().collect();
        assert_eq!(zips, vec!["94022", "12345", "94040"]);
    }

    #[test]
    fn test_empty_filter() {
        let filter = ZipFilter::from_zip_codes(std::iter::empty());
        assert!(filter.is_empty());
        assert_eq!(filter.active_zip_codes().count(), 0);
    }

    #[test]
    fn test_toggle_twice_restores_state() -> Result<()> {
        let mut filter = ZipFilter::from_zip_codes(["12345", "94022"]);

        assert_eq!(filter.toggle("12345")?, FilterState::Inactive);
        assert_eq!(filter.state("12345"), Some(FilterState::Inactive));
        assert_eq!(filter.state("94022"), Some(FilterState::Active));

        assert_eq!(filter.toggle("12345")?, FilterState::Active);
        assert_eq!(filter.state("12345"), Some(FilterState::Active));
        Ok(())
    }

    #[test]
    fn test_inactive_zip_keeps_position() -> Result<()> {
        let mut filter = ZipFilter::from_zip_codes(["12345", "94022", "94040"]);

        filter.toggle("12345")?;
        let zips: Vec<&str> = filter.active_zip_codes().collect();
        assert_eq!(zips, vec!["94022", "94040"]);

        filter.toggle("12345")?;
        let keys: Vec<String> = filter.snapshot().into_keys().collect();
        assert_eq!(keys, vec!["12345", "94022", "94040"]);
        Ok(())
    }

    #[test]
    fn test_toggle_unknown_zip() {
        let mut filter = ZipFilter::from_zip_codes(["12345"]);
        assert!(matches!(
            filter.toggle("00000"),
            Err(AirQualityError::UnknownZipCode(zip)) if zip == "00000"
        ));
    }

    #[test]
    fn test_state_display() {
        assert_eq!(FilterState::Active.to_string(), "Active");
        assert_eq!(FilterState::Inactive.to_string(), "Inactive");
    }
}
