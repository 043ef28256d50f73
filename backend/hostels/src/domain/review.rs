use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::rating::RatingBreakdown;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub hostel_id: Uuid,
    pub student_id: Uuid,
    pub student_name: String,
    pub college_name: String,
    pub rating: RatingBreakdown,
    pub comment: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(
        hostel_id: Uuid,
        student_id: Uuid,
        student_name: String,
        college_name: String,
        rating: RatingBreakdown,
        comment: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            hostel_id,
            student_id,
            student_name,
            college_name,
            rating,
            comment,
            verified: true,
            created_at: Utc::now(),
        }
    }
}
