pub mod router;
pub mod types;
pub mod handlers {
    pub mod common;
    pub mod health;
    pub mod info;
}

pub use router::{base_endpoints, create_router, ApiDoc, ServiceRoutes, BASE_ROUTES};
pub use types::{http_status, AppState, ErrorReport, HealthProbe, PageQuery};
