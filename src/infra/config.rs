//! Centralized configuration (environment variables + defaults).
//!
//! Values are read once at startup and injected into the HTTP layer;
//! handlers never call `std::env` themselves.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Loads `.env` from the working directory if one exists.
pub fn load_dotenv() {
    dotenv::dotenv().ok();
}

/// Service metadata reported by the info endpoint. Unset values serialize as `null`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct ServiceInfo {
    pub service_name: Option<String>,
    pub service_type: Option<String>,
    pub service_scope: Option<String>,
    pub service_version: Option<String>,
}

impl ServiceInfo {
    pub fn from_env() -> Self {
        Self {
            service_name: optional_var("SERVICE_NAME"),
            service_type: optional_var("SERVICE_TYPE"),
            service_scope: optional_var("SERVICE_SCOPE"),
            service_version: optional_var("SERVICE_VERSION"),
        }
    }
}

/// Address the API server binds to (`LISTEN_ADDR`, default `0.0.0.0:3000`).
pub fn listen_addr() -> String {
    optional_var("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
}

/// Whether generic 500 envelopes hide the raw error text (`REDACT_INTERNAL_ERRORS`).
pub fn redact_internal_errors() -> bool {
    optional_var("REDACT_INTERNAL_ERRORS")
        .map(|v| parse_flag(&v))
        .unwrap_or(false)
}

fn optional_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
