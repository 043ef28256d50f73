use std::collections::BTreeSet;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::delivery::http::v1::middleware::AuthenticatedUser;
use crate::domain::college::College;
use crate::domain::geo::Coordinates;
use crate::domain::hostel::{HostelListing, HostelType, NearbyHostel};
use crate::usecase::error::UsecaseError;
use crate::usecase::search::{
    HostelTypeFilter, SearchConstraints, SortBy, DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN,
};
use crate::AppState;

/// Where a listing is placed when the owner does not pin it (the SNIST campus).
const DEFAULT_LISTING_COORDINATES: Coordinates = Coordinates { lat: 17.5449, lng: 78.6898 };

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub college: Option<String>,
    pub price_min: Option<u32>,
    pub price_max: Option<u32>,
    #[serde(default)]
    pub hostel_type: HostelTypeFilter,
    /// Comma-separated amenity labels, all of which must be present.
    pub amenities: Option<String>,
    #[serde(default)]
    pub sort_by: SortBy,
}

impl SearchQuery {
    fn constraints(&self) -> SearchConstraints {
        let required_amenities: BTreeSet<String> = self
            .amenities
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect();

        SearchConstraints {
            price_min: self.price_min.unwrap_or(DEFAULT_PRICE_MIN),
            price_max: self.price_max.unwrap_or(DEFAULT_PRICE_MAX),
            hostel_type: self.hostel_type,
            required_amenities,
            sort_by: self.sort_by,
        }
    }
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub college: Option<College>,
    pub count: usize,
    pub hostels: Vec<NearbyHostel>,
}

#[derive(Deserialize, Validate)]
pub struct CreateHostelRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 500))]
    pub address: String,
    pub coordinates: Option<Coordinates>,
    #[validate(range(min = 1))]
    pub price_per_month: u32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    #[validate(length(max = 5000))]
    pub description: String,
    pub total_beds: u32,
    pub available_beds: u32,
    pub hostel_type: HostelType,
}

impl From<CreateHostelRequest> for HostelListing {
    fn from(r: CreateHostelRequest) -> Self {
        HostelListing {
            name: r.name,
            address: r.address,
            coordinates: r.coordinates.unwrap_or(DEFAULT_LISTING_COORDINATES),
            price_per_month: r.price_per_month,
            images: r.images,
            amenities: r.amenities,
            description: r.description,
            total_beds: r.total_beds,
            available_beds: r.available_beds,
            hostel_type: r.hostel_type,
        }
    }
}

#[tracing::instrument(skip(state, query), fields(college = ?query.college))]
pub async fn search_hostels(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, UsecaseError> {
    tracing::debug!("handling search request");

    let Some(college_id) = query.college.as_deref() else {
        return Ok((
            StatusCode::OK,
            Json(SearchResponse {
                college: None,
                count: 0,
                hostels: Vec::new(),
            }),
        ));
    };

    let constraints = query.constraints();
    let result = state.hostels_usecase.search(college_id, &constraints).await?;

    metrics::counter!("hostel_searches_total", "college" => result.college.id.clone()).increment(1);
    metrics::histogram!("hostel_search_results").record(result.hostels.len() as f64);

    tracing::debug!(count = result.hostels.len(), "search handled");
    Ok((
        StatusCode::OK,
        Json(SearchResponse {
            count: result.hostels.len(),
            college: Some(result.college),
            hostels: result.hostels,
        }),
    ))
}

#[tracing::instrument(skip(state), fields(hostel_id = %hostel_id))]
pub async fn get_hostel(
    State(state): State<Arc<AppState>>,
    Path(hostel_id): Path<Uuid>,
) -> Result<impl IntoResponse, UsecaseError> {
    let hostel = state.hostels_usecase.get_hostel(hostel_id).await?;
    Ok((StatusCode::OK, Json(hostel)))
}

#[tracing::instrument(skip(state, payload), fields(user_id = %user.user_id))]
pub async fn create_hostel(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(payload): Json<CreateHostelRequest>,
) -> Result<impl IntoResponse, UsecaseError> {
    tracing::debug!("handling create hostel request");

    if let Err(validation_errors) = payload.validate() {
        tracing::warn!(user_id = %user.user_id, ?validation_errors, "validation failed");
        return Err(UsecaseError::Validation(format!("{:?}", validation_errors)));
    }

    let hostel = state
        .hostels_usecase
        .create_hostel(&user.actor(), payload.into())
        .await?;

    tracing::debug!(hostel_id = %hostel.id, "hostel created successfully");
    Ok((StatusCode::CREATED, Json(hostel)))
}
