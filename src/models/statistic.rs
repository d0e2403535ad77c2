use serde::{Deserialize, Serialize};

/// Which aggregate a cross table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statistic {
    Min,
    Average,
    Max,
}

impl Statistic {
    pub fn label(&self) -> &'static str {
        match self {
            Statistic::Min => "Minimum",
            Statistic::Average => "Average",
            Statistic::Max => "Maximum",
        }
    }
}

/// Min, mean and max concentration over a group of readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationStats {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl ConcentrationStats {
    /// Returns `None` for an empty sequence.
    pub fn from_concentrations<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut count = 0usize;

        for value in values {
            min = min.min(value);
            max = max.max(value);
            sum += value;
            count += 1;
        }

        if count == 0 {
            return None;
        }

        Some(Self {
            min,
            mean: sum / count as f64,
            max,
        })
    }

    pub fn get(&self, statistic: Statistic) -> f64 {
        match statistic {
            Statistic::Min => self.min,
            Statistic::Average => self.mean,
            Statistic::Max => self.max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_over_three_values() {
        let stats = ConcentrationStats::from_concentrations([1.0, 2.0, 3.0]).unwrap();

        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.mean, 2.0);
        assert_eq!(stats.max, 3.0);
        assert_eq!(stats.get(Statistic::Min), 1.0);
        assert_eq!(stats.get(Statistic::Average), 2.0);
        assert_eq!(stats.get(Statistic::Max), 3.0);
    }

    #[test]
    fn test_stats_empty() {
        assert!(ConcentrationStats::from_concentrations(Vec::new()).is_none());
    }

    #[test]
    fn test_single_value() {
        let stats = ConcentrationStats::from_concentrations([4.5]).unwrap();
        assert_eq!(stats.min, 4.5);
        assert_eq!(stats.mean, 4.5);
        assert_eq!(stats.max, 4.5);
    }
}
