use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::delivery::http::v1::middleware::AuthenticatedUser;
use crate::domain::user::{ProfileUpdate, Role, User};
use crate::usecase::accounts::{Registration, Session};
use crate::usecase::error::UsecaseError;
use crate::AppState;

#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub phone: String,
    #[serde(default = "default_role")]
    pub role: Role,
    pub college: Option<String>,
    pub college_id: Option<String>,
}

fn default_role() -> Role {
    Role::Student
}

#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    pub college: Option<String>,
    pub college_id: Option<String>,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            access_token: session.access_token,
            token_type: "Bearer".to_string(),
            user: session.user,
        }
    }
}

#[tracing::instrument(skip(state, payload))]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, UsecaseError> {
    if let Err(validation_errors) = payload.validate() {
        tracing::warn!(?validation_errors, "validation failed");
        return Err(UsecaseError::Validation(format!("{:?}", validation_errors)));
    }

    let session = state
        .accounts_usecase
        .register(Registration {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            role: payload.role,
            college: payload.college,
            college_id: payload.college_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(SessionResponse::from(session))))
}

#[tracing::instrument(skip(state, payload))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, UsecaseError> {
    if let Err(validation_errors) = payload.validate() {
        tracing::warn!(?validation_errors, "validation failed");
        return Err(UsecaseError::Validation(format!("{:?}", validation_errors)));
    }

    let session = state.accounts_usecase.login(&payload.email).await?;
    Ok((StatusCode::OK, Json(SessionResponse::from(session))))
}

#[tracing::instrument(skip(state), fields(user_id = %user.user_id))]
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<impl IntoResponse, UsecaseError> {
    let profile = state.accounts_usecase.profile(user.user_id).await?;
    Ok((StatusCode::OK, Json(profile)))
}

#[tracing::instrument(skip(state, payload), fields(user_id = %user.user_id))]
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, UsecaseError> {
    if let Err(validation_errors) = payload.validate() {
        tracing::warn!(user_id = %user.user_id, ?validation_errors, "validation failed");
        return Err(UsecaseError::Validation(format!("{:?}", validation_errors)));
    }

    let profile = state
        .accounts_usecase
        .update_profile(
            user.user_id,
            ProfileUpdate {
                name: payload.name,
                phone: payload.phone,
                college: payload.college,
                college_id: payload.college_id,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}
