use crate::domain::rating::RatingSummary;
use crate::domain::review::Review;

/// Mean of each rating category across `reviews`, or all zeros for none.
pub fn aggregate(reviews: &[Review]) -> RatingSummary {
    if reviews.is_empty() {
        return RatingSummary::default();
    }

    let count = reviews.len() as f64;
    let mean = |stars: fn(&Review) -> u8| {
        reviews.iter().map(|r| f64::from(stars(r))).sum::<f64>() / count
    };

    RatingSummary {
        overall: mean(|r| r.rating.overall),
        food: mean(|r| r.rating.food),
        cleanliness: mean(|r| r.rating.cleanliness),
        safety: mean(|r| r.rating.safety),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rating::RatingBreakdown;
    use uuid::Uuid;

    fn review(overall: u8, food: u8, cleanliness: u8, safety: u8) -> Review {
        Review::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Student".to_string(),
            "SNIST".to_string(),
            RatingBreakdown { overall, food, cleanliness, safety },
            String::new(),
        )
    }

    #[test]
    fn test_empty_reviews_yield_zero() {
        let summary = aggregate(&[]);

        assert_eq!(summary, RatingSummary { overall: 0.0, food: 0.0, cleanliness: 0.0, safety: 0.0 });
        assert!(!summary.overall.is_nan());
    }

    #[test]
    fn test_mean_per_category() {
        let reviews = vec![review(4, 4, 4, 5), review(5, 5, 4, 5), review(4, 3, 1, 2)];

        let summary = aggregate(&reviews);

        assert!((summary.overall - 13.0 / 3.0).abs() < 1e-9);
        assert!((summary.food - 4.0).abs() < 1e-9);
        assert!((summary.cleanliness - 3.0).abs() < 1e-9);
        assert!((summary.safety - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_review_is_its_own_mean() {
        let summary = aggregate(&[review(2, 3, 4, 5)]);

        assert_eq!(summary.overall, 2.0);
        assert_eq!(summary.food, 3.0);
        assert_eq!(summary.cleanliness, 4.0);
        assert_eq!(summary.safety, 5.0);
    }
}
