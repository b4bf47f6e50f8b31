pub mod extract;
pub mod routes;

use std::sync::Arc;

use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::database::Store;
use crate::web::routes::{health, safety, sos, users};

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub service_name: Arc<str>,
}

impl AppState {
    pub fn new(store: Store, service_name: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            service_name: service_name.into(),
        }
    }
}

impl FromRef<AppState> for Store {
    fn from_ref(state: &AppState) -> Store {
        state.store.clone()
    }
}

/// Any origin, method and header, with credentials. A literal `*` cannot be
/// combined with credentials, so the request values are echoed back.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route(
            "/api/emergency-contacts",
            get(safety::emergency_contacts_handler),
        )
        .route("/api/risk-zones", get(safety::risk_zones_handler))
        .route("/api/safe-spots", get(safety::safe_spots_handler))
        .route("/api/users", post(users::create_user_handler))
        .route(
            "/api/users/:user_id",
            get(users::get_user_handler).put(users::update_user_handler),
        )
        .route("/api/sos", post(sos::trigger_sos_handler))
        .route(
            "/api/sos/deactivate/:alert_id",
            post(sos::deactivate_sos_handler),
        )
        .route("/api/sos/active", get(sos::active_sos_handler))
        // Layers
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .with_state(state)
}
