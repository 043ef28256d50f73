use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::delivery::http::v1::middleware::AuthenticatedUser;
use crate::usecase::bookings::CheckoutDetails;
use crate::usecase::error::UsecaseError;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CheckoutRequest {
    #[validate(length(max = 200))]
    pub student_name: Option<String>,
    #[validate(length(max = 20))]
    pub student_phone: Option<String>,
    #[validate(length(max = 200))]
    pub college_name: Option<String>,
}

#[tracing::instrument(skip(state, payload), fields(user_id = %user.user_id, hostel_id = %hostel_id))]
pub async fn checkout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(hostel_id): Path<Uuid>,
    Json(payload): Json<CheckoutRequest>,
) -> Result<impl IntoResponse, UsecaseError> {
    tracing::debug!("handling checkout request");

    if let Err(validation_errors) = payload.validate() {
        tracing::warn!(user_id = %user.user_id, ?validation_errors, "validation failed");
        return Err(UsecaseError::Validation(format!("{:?}", validation_errors)));
    }

    let details = CheckoutDetails {
        student_name: payload.student_name,
        student_phone: payload.student_phone,
        college_name: payload.college_name,
    };

    let booking = state
        .bookings_usecase
        .checkout(&user.actor(), hostel_id, details)
        .await?;

    metrics::counter!("bookings_total").increment(1);
    metrics::counter!("token_amount_collected_total").increment(u64::from(booking.token_amount));

    tracing::debug!(booking_id = %booking.id, "checkout handled");
    Ok((StatusCode::CREATED, Json(booking)))
}

#[tracing::instrument(skip(state), fields(user_id = %user.user_id))]
pub async fn my_bookings(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<impl IntoResponse, UsecaseError> {
    let bookings = state.bookings_usecase.my_bookings(&user.actor()).await?;
    Ok((StatusCode::OK, Json(bookings)))
}
