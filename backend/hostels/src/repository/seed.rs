use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{
    college::College, geo::GeoError, hostel::Hostel, review::Review, user::User,
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{record} has invalid coordinates: {source}")]
    InvalidCoordinates { record: String, source: GeoError },
    #[error("review {0} has a rating outside 1..=5")]
    InvalidRating(Uuid),
}

/// Reference data the service starts with.
#[derive(Debug, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub colleges: Vec<College>,
    #[serde(default)]
    pub hostels: Vec<Hostel>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Seed {
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let seed = Self::parse(&raw)?;

        tracing::info!(
            colleges = seed.colleges.len(),
            hostels = seed.hostels.len(),
            reviews = seed.reviews.len(),
            users = seed.users.len(),
            "seed loaded"
        );
        Ok(seed)
    }

    pub fn parse(raw: &str) -> Result<Self, SeedError> {
        let seed: Seed = serde_json::from_str(raw)?;
        seed.validate()?;
        Ok(seed)
    }

    fn validate(&self) -> Result<(), SeedError> {
        for college in &self.colleges {
            college
                .coordinates
                .validate()
                .map_err(|source| SeedError::InvalidCoordinates {
                    record: format!("college {}", college.id),
                    source,
                })?;
        }
        for hostel in &self.hostels {
            hostel
                .coordinates
                .validate()
                .map_err(|source| SeedError::InvalidCoordinates {
                    record: format!("hostel {}", hostel.id),
                    source,
                })?;
        }
        if let Some(review) = self.reviews.iter().find(|r| !r.rating.is_valid()) {
            return Err(SeedError::InvalidRating(review.id));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) const FIXTURES: &str = include_str!("../../seed/fixtures.json");
