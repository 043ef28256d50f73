use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::delivery::http::v1::middleware::AuthenticatedUser;
use crate::domain::rating::{RatingBreakdown, RatingSummary};
use crate::domain::review::Review;
use crate::usecase::error::UsecaseError;
use crate::AppState;

#[derive(Deserialize, Validate)]
pub struct RatingRequest {
    #[validate(range(min = 1, max = 5))]
    pub overall: u8,
    #[validate(range(min = 1, max = 5))]
    pub food: u8,
    #[validate(range(min = 1, max = 5))]
    pub cleanliness: u8,
    #[validate(range(min = 1, max = 5))]
    pub safety: u8,
}

#[derive(Deserialize, Validate)]
pub struct SubmitReviewRequest {
    #[validate(nested)]
    pub rating: RatingRequest,
    #[validate(length(max = 2000))]
    pub comment: String,
}

#[derive(Serialize)]
pub struct HostelReviewsResponse {
    pub summary: RatingSummary,
    pub count: usize,
    pub reviews: Vec<Review>,
}

#[tracing::instrument(skip(state), fields(hostel_id = %hostel_id))]
pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
    Path(hostel_id): Path<Uuid>,
) -> Result<impl IntoResponse, UsecaseError> {
    tracing::debug!("handling list reviews request");

    let result = state.reviews_usecase.hostel_reviews(hostel_id).await?;

    Ok((
        StatusCode::OK,
        Json(HostelReviewsResponse {
            summary: result.summary,
            count: result.reviews.len(),
            reviews: result.reviews,
        }),
    ))
}

#[tracing::instrument(skip(state, payload), fields(user_id = %user.user_id, hostel_id = %hostel_id))]
pub async fn submit_review(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(hostel_id): Path<Uuid>,
    Json(payload): Json<SubmitReviewRequest>,
) -> Result<impl IntoResponse, UsecaseError> {
    tracing::debug!("handling submit review request");

    if let Err(validation_errors) = payload.validate() {
        tracing::warn!(user_id = %user.user_id, ?validation_errors, "validation failed");
        return Err(UsecaseError::Validation(format!("{:?}", validation_errors)));
    }

    let rating = RatingBreakdown {
        overall: payload.rating.overall,
        food: payload.rating.food,
        cleanliness: payload.rating.cleanliness,
        safety: payload.rating.safety,
    };

    let review = state
        .reviews_usecase
        .submit_review(&user.actor(), hostel_id, rating, payload.comment)
        .await?;

    metrics::counter!("reviews_submitted_total").increment(1);
    Ok((StatusCode::CREATED, Json(review)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_out_of_range_fails_validation() {
        let request: SubmitReviewRequest = serde_json::from_str(
            r#"{ "rating": { "overall": 6, "food": 5, "cleanliness": 5, "safety": 5 }, "comment": "" }"#,
        )
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_valid_review_request() {
        let request: SubmitReviewRequest = serde_json::from_str(
            r#"{ "rating": { "overall": 4, "food": 3, "cleanliness": 5, "safety": 1 }, "comment": "Decent" }"#,
        )
        .unwrap();

        assert!(request.validate().is_ok());
    }
}
