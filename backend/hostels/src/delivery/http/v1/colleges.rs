use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::usecase::error::UsecaseError;
use crate::AppState;

#[tracing::instrument(skip(state))]
pub async fn list_colleges(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, UsecaseError> {
    let colleges = state.hostels_usecase.list_colleges().await?;

    tracing::debug!(count = colleges.len(), "colleges listed");
    Ok((StatusCode::OK, Json(colleges)))
}

#[tracing::instrument(skip(state))]
pub async fn get_college(
    State(state): State<Arc<AppState>>,
    Path(college_id): Path<String>,
) -> Result<impl IntoResponse, UsecaseError> {
    let college = state.hostels_usecase.get_college(&college_id).await?;
    Ok((StatusCode::OK, Json(college)))
}

/// Nearby hostels with their distances, before any user refinement.
#[tracing::instrument(skip(state))]
pub async fn list_nearby_hostels(
    State(state): State<Arc<AppState>>,
    Path(college_id): Path<String>,
) -> Result<impl IntoResponse, UsecaseError> {
    let nearby = state.hostels_usecase.hostels_near(&college_id).await?;

    tracing::debug!(count = nearby.len(), "nearby hostels listed");
    Ok((StatusCode::OK, Json(nearby)))
}
