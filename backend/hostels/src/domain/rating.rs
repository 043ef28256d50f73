use serde::{Deserialize, Serialize};

pub const MIN_STARS: u8 = 1;
pub const MAX_STARS: u8 = 5;

/// Star ratings a student gives in one review, each in 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingBreakdown {
    pub overall: u8,
    pub food: u8,
    pub cleanliness: u8,
    pub safety: u8,
}

impl RatingBreakdown {
    pub fn is_valid(&self) -> bool {
        [self.overall, self.food, self.cleanliness, self.safety]
            .iter()
            .all(|stars| (MIN_STARS..=MAX_STARS).contains(stars))
    }
}

/// Per-category means over a set of reviews. Zero when there are no reviews.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RatingSummary {
    pub overall: f64,
    pub food: f64,
    pub cleanliness: f64,
    pub safety: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_bounds() {
        let valid = RatingBreakdown { overall: 1, food: 5, cleanliness: 3, safety: 4 };
        assert!(valid.is_valid());

        let zero = RatingBreakdown { overall: 0, ..valid };
        assert!(!zero.is_valid());

        let six = RatingBreakdown { safety: 6, ..valid };
        assert!(!six.is_valid());
    }

    #[test]
    fn test_summary_default_is_zero() {
        let summary = RatingSummary::default();
        assert_eq!(summary.overall, 0.0);
        assert_eq!(summary.safety, 0.0);
    }
}
