/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. User routes (public)
 * 2. Blog routes (behind the authentication gate)
 * 3. Fallback handler (404)
 * 4. Request tracing layer
 */

use axum::{http::StatusCode, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::{configure_blog_routes, configure_user_routes};
use crate::backend::server::state::AppState;

/// Fallback handler for 404
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 Not Found")
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Store, token settings and password cost
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_user_routes(Router::new());
    let router = configure_blog_routes(router, &app_state);

    let router = router.fallback(not_found);

    let router = router.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    router.with_state(app_state)
}
