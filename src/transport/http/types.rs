use crate::app::responder::{ErrorResponder, ServiceError};
use crate::domain::envelope::{Envelope, EnvelopeBuilder};
use crate::domain::errors::CoreResult;
use crate::domain::pagination::Paginator;
use crate::infra::config::ServiceInfo;
use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_PER_PAGE: u64 = 15;

/// A dependency check run by `/healthz` (cache, database, upstream API, ...).
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Returns `Err` with a human-readable reason when the dependency is unusable.
    async fn check(&self) -> anyhow::Result<()>;
}

#[derive(Clone)]
pub struct AppState {
    pub service_info: Arc<ServiceInfo>,
    pub builder: EnvelopeBuilder,
    pub responder: ErrorResponder,
    pub health_probes: Vec<Arc<dyn HealthProbe>>,
    /// Filled by `create_router` with every route it mounts.
    pub endpoints: Arc<Vec<Endpoint>>,
}

impl AppState {
    pub fn new(service_info: ServiceInfo) -> Self {
        let builder = EnvelopeBuilder::new();
        Self {
            service_info: Arc::new(service_info),
            builder,
            responder: ErrorResponder::new(builder),
            health_probes: Vec::new(),
            endpoints: Arc::new(Vec::new()),
        }
    }

    pub fn with_responder(mut self, responder: ErrorResponder) -> Self {
        self.responder = responder;
        self
    }

    pub fn with_probe<P: HealthProbe + 'static>(mut self, probe: P) -> Self {
        self.health_probes.push(Arc::new(probe));
        self
    }
}

/// `?page=&per_page=` query parameters for list endpoints.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-indexed page number (default 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default 15).
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

impl PageQuery {
    /// Paginator over `total` items for this page; zero `page`/`per_page` is rejected.
    pub fn paginator(&self, total: u64) -> CoreResult<Paginator> {
        Paginator::new(total, self.per_page, self.page)
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

fn default_page() -> u64 {
    DEFAULT_PAGE
}

fn default_per_page() -> u64 {
    DEFAULT_PER_PAGE
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Endpoint {
    pub uri: String,
    pub method: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct InfoResponse {
    #[serde(flatten)]
    pub service: ServiceInfo,
    pub endpoints: Vec<Endpoint>,
}

/// HTTP status an envelope is sent with; codes outside the valid range go out as 500.
pub fn http_status(envelope: &Envelope) -> StatusCode {
    StatusCode::from_u16(envelope.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (http_status(&self), Json(self)).into_response()
    }
}

/// The error behind a response produced by `ServiceError::into_response`.
///
/// The router's error layer takes it out of the response extensions and
/// renders it again with the application's own responder.
#[derive(Clone, Debug)]
pub struct ErrorReport(pub Arc<ServiceError>);

/// Renders with a redacting responder so that generic messages never leak when
/// no router layer is present; `create_router` replaces the body using
/// `AppState::responder`.
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let envelope = ErrorResponder::default()
            .with_redaction(true)
            .envelope_for(&self);
        let mut response = envelope.into_response();
        response.extensions_mut().insert(ErrorReport(Arc::new(self)));
        response
    }
}
