use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use serde::Serialize;

use crate::delivery::http::v1::middleware::AuthenticatedUser;
use crate::domain::booking::Booking;
use crate::domain::hostel::Hostel;
use crate::usecase::error::UsecaseError;
use crate::AppState;

#[derive(Serialize)]
pub struct OwnerDashboardResponse {
    pub total_hostels: usize,
    pub total_bookings: usize,
    pub average_rating: f64,
    pub hostels: Vec<Hostel>,
    pub bookings: Vec<Booking>,
}

#[derive(Serialize)]
pub struct AdminDashboardResponse {
    pub total_hostels: usize,
    pub verified_hostels: usize,
    pub pending_hostels: usize,
    pub total_reviews: usize,
    pub verified_reviews: usize,
    pub pending_reviews: usize,
    pub total_colleges: usize,
}

#[tracing::instrument(skip(state), fields(user_id = %user.user_id))]
pub async fn owner_dashboard(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<impl IntoResponse, UsecaseError> {
    let dashboard = state.dashboards_usecase.owner_dashboard(&user.actor()).await?;

    Ok((
        StatusCode::OK,
        Json(OwnerDashboardResponse {
            total_hostels: dashboard.hostels.len(),
            total_bookings: dashboard.bookings.len(),
            average_rating: dashboard.average_rating,
            hostels: dashboard.hostels,
            bookings: dashboard.bookings,
        }),
    ))
}

#[tracing::instrument(skip(state), fields(user_id = %user.user_id))]
pub async fn admin_dashboard(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<impl IntoResponse, UsecaseError> {
    let stats = state.dashboards_usecase.platform_stats(&user.actor()).await?;

    Ok((
        StatusCode::OK,
        Json(AdminDashboardResponse {
            total_hostels: stats.total_hostels,
            verified_hostels: stats.verified_hostels,
            pending_hostels: stats.total_hostels - stats.verified_hostels,
            total_reviews: stats.total_reviews,
            verified_reviews: stats.verified_reviews,
            pending_reviews: stats.total_reviews - stats.verified_reviews,
            total_colleges: stats.total_colleges,
        }),
    ))
}
