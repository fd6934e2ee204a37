use crate::app::responder::ServiceError;
use crate::domain::envelope::Envelope;
use crate::domain::pagination::PaginationProjection;
use crate::infra::config::ServiceInfo;
use crate::transport::http::handlers::{health, info};
use crate::transport::http::types::{AppState, Endpoint, ErrorReport, InfoResponse, PageQuery};
use axum::extract::State;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, MethodRouter};
use axum::Router;
use std::sync::Arc;
use utoipa::OpenApi;

/// Routes every service exposes, as `(method, uri)`.
pub const BASE_ROUTES: &[(&str, &str)] = &[("GET", "/"), ("GET", "/healthz")];

#[derive(OpenApi)]
#[openapi(
    paths(info::info_handler, health::healthcheck_handler),
    components(schemas(
        Envelope,
        PaginationProjection,
        PageQuery,
        ServiceInfo,
        Endpoint,
        InfoResponse
    ))
)]
pub struct ApiDoc;

/// A service's own routes, recorded alongside the methods they answer so that
/// `GET /` can list them.
pub struct ServiceRoutes {
    router: Router<AppState>,
    endpoints: Vec<Endpoint>,
}

impl ServiceRoutes {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            endpoints: Vec::new(),
        }
    }

    /// Mounts `method_router` at `path`. `methods` names the HTTP methods it
    /// handles (e.g. `&["GET", "POST"]`), in the order they should be listed.
    pub fn route(
        mut self,
        path: &str,
        methods: &[&str],
        method_router: MethodRouter<AppState>,
    ) -> Self {
        self.router = self.router.route(path, method_router);
        self.endpoints.extend(methods.iter().map(|method| Endpoint {
            uri: path.to_string(),
            method: method.to_ascii_uppercase(),
        }));
        self
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }
}

impl Default for ServiceRoutes {
    fn default() -> Self {
        Self::new()
    }
}

pub fn base_endpoints() -> Vec<Endpoint> {
    BASE_ROUTES
        .iter()
        .map(|(method, uri)| Endpoint {
            uri: uri.to_string(),
            method: method.to_string(),
        })
        .collect()
}

/// Base routes plus the service's own, sharing one fallback and error layer.
pub fn create_router(mut app_state: AppState, routes: ServiceRoutes) -> Router {
    let mut endpoints = base_endpoints();
    endpoints.extend(routes.endpoints);
    app_state.endpoints = Arc::new(endpoints);

    Router::new()
        .route("/", get(info::info_handler))
        .route("/healthz", get(health::healthcheck_handler))
        .merge(routes.router)
        .fallback(not_found_fallback)
        .layer(middleware::map_response_with_state(
            app_state.clone(),
            render_service_errors,
        ))
        .with_state(app_state)
}

async fn not_found_fallback() -> ServiceError {
    ServiceError::http(404)
}

/// Re-renders `ServiceError` responses with the application's responder, so
/// redaction and logging follow its configuration.
async fn render_service_errors(State(state): State<AppState>, mut response: Response) -> Response {
    match response.extensions_mut().remove::<ErrorReport>() {
        Some(ErrorReport(error)) => state.responder.respond_to(&error).into_response(),
        None => response,
    }
}
