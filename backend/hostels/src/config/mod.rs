use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub jwt_secret: String,
    pub jwt_access_token_minutes: i64,
    pub listen_addr: String,
    pub seed_path: String,
    pub payment_delay_ms: u64,
    #[serde(default)]
    pub telemetry_enabled: bool,
    #[serde(default = "default_telemetry_service_name")]
    pub telemetry_service_name: String,
    #[serde(default = "default_telemetry_service_version")]
    pub telemetry_service_version: String,
    #[serde(default = "default_telemetry_environment")]
    pub telemetry_environment: String,
    #[serde(default = "default_telemetry_otlp_endpoint")]
    pub telemetry_otlp_endpoint: String,
}

fn default_telemetry_service_name() -> String {
    "hostel-connect".to_string()
}

fn default_telemetry_service_version() -> String {
    "1.0.0".to_string()
}

fn default_telemetry_environment() -> String {
    "production".to_string()
}

fn default_telemetry_otlp_endpoint() -> String {
    "http://otel-collector.observability.svc.cluster.local:4317".to_string()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(Environment::default())
    }

    fn from_source(source: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("jwt_access_token_minutes", 60)?
            .set_default("listen_addr", "0.0.0.0:8080")?
            .set_default("seed_path", "seed/fixtures.json")?
            .set_default("payment_delay_ms", 2000)?
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}
