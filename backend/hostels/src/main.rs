mod config;
mod delivery;
mod domain;
mod repository;
mod telemetry;
mod usecase;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::delivery::http::v1::accounts::{get_profile, login, register, update_profile};
use crate::delivery::http::v1::bookings::{checkout, my_bookings};
use crate::delivery::http::v1::colleges::{get_college, list_colleges, list_nearby_hostels};
use crate::delivery::http::v1::dashboards::{admin_dashboard, owner_dashboard};
use crate::delivery::http::v1::hostels::{create_hostel, get_hostel, search_hostels};
use crate::delivery::http::v1::middleware::auth_middleware;
use crate::delivery::http::v1::reviews::{list_reviews, submit_review};
use crate::repository::memory::MemoryRepository;
use crate::repository::seed::Seed;
use crate::usecase::accounts::AccountsUseCase;
use crate::usecase::bookings::BookingsUseCase;
use crate::usecase::dashboards::DashboardsUseCase;
use crate::usecase::hostels::HostelsUseCase;
use crate::usecase::jwt::JwtService;
use crate::usecase::reviews::ReviewsUseCase;

pub struct AppState {
    pub hostels_usecase: HostelsUseCase<MemoryRepository, MemoryRepository>,
    pub reviews_usecase: ReviewsUseCase<MemoryRepository, MemoryRepository, MemoryRepository>,
    pub bookings_usecase: BookingsUseCase<MemoryRepository, MemoryRepository, MemoryRepository>,
    pub accounts_usecase: AccountsUseCase<MemoryRepository>,
    pub dashboards_usecase:
        DashboardsUseCase<MemoryRepository, MemoryRepository, MemoryRepository, MemoryRepository>,
    pub jwt_service: JwtService,
    pub metrics_handle: PrometheusHandle,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::AppConfig::from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let tracer_provider = if config.telemetry_enabled {
        let telemetry_config = telemetry::TelemetryConfig::from(&config);
        let provider = telemetry::init_telemetry_with_subscriber(&telemetry_config, env_filter)
            .map_err(|e| anyhow::anyhow!("failed to initialize telemetry: {e}"))?;
        Some(provider)
    } else {
        telemetry::init_subscriber_without_telemetry(env_filter);
        None
    };

    tracing::info!("starting the hostels service");

    let metrics_handle = PrometheusBuilder::new().install_recorder()?;
    metrics_process::Collector::default().describe();
    tracing::info!("prometheus metrics initialized");

    tracing::info!("config loaded, telemetry_enabled={}", config.telemetry_enabled);

    let seed = Seed::load(&config.seed_path)?;

    let repository = MemoryRepository::new(seed);
    let jwt_service = JwtService::new(config.jwt_secret.clone(), config.jwt_access_token_minutes);

    let hostels_usecase = HostelsUseCase::new(repository.clone(), repository.clone());
    let reviews_usecase =
        ReviewsUseCase::new(repository.clone(), repository.clone(), repository.clone());
    let bookings_usecase = BookingsUseCase::new(
        repository.clone(),
        repository.clone(),
        repository.clone(),
        Duration::from_millis(config.payment_delay_ms),
    );
    let accounts_usecase = AccountsUseCase::new(repository.clone(), jwt_service.clone());
    let dashboards_usecase = DashboardsUseCase::new(
        repository.clone(),
        repository.clone(),
        repository.clone(),
        repository,
    );

    let shared_state = Arc::new(AppState {
        hostels_usecase,
        reviews_usecase,
        bookings_usecase,
        accounts_usecase,
        dashboards_usecase,
        jwt_service,
        metrics_handle,
    });

    let public_api = Router::new()
        .route("/api/v1/colleges", get(list_colleges))
        .route("/api/v1/colleges/{id}", get(get_college))
        .route("/api/v1/colleges/{id}/hostels", get(list_nearby_hostels))
        .route("/api/v1/search", get(search_hostels))
        .route("/api/v1/hostels/{id}", get(get_hostel))
        .route("/api/v1/hostels/{id}/reviews", get(list_reviews))
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login));

    let protected_api = Router::new()
        .route("/api/v1/hostels", post(create_hostel))
        .route("/api/v1/hostels/{id}/reviews", post(submit_review))
        .route("/api/v1/hostels/{id}/bookings", post(checkout))
        .route("/api/v1/bookings/mine", get(my_bookings))
        .route("/api/v1/auth/me", get(get_profile).put(update_profile))
        .route("/api/v1/dashboard/owner", get(owner_dashboard))
        .route("/api/v1/dashboard/admin", get(admin_dashboard))
        .layer(middleware::from_fn_with_state(
            shared_state.clone(),
            auth_middleware,
        ));

    let router = Router::new()
        .route("/healthz", get(healthz))
        .route("/metrics", get(metrics))
        .merge(public_api)
        .merge(protected_api)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("hostels service running on {}", config.listen_addr);
    axum::serve(listener, router).await?;

    if let Some(provider) = tracer_provider {
        telemetry::shutdown_telemetry(provider);
    }

    Ok(())
}

async fn metrics(State(state): State<Arc<AppState>>) -> String {
    metrics_process::Collector::default().collect();
    state.metrics_handle.render()
}

#[tracing::instrument]
async fn healthz() -> &'static str {
    "OK"
}
