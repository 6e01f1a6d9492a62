/**
 * Server Initialization
 *
 * Builds the Axum application from configuration.
 *
 * # Initialization Process
 *
 * 1. Open the store (PostgreSQL or in-memory)
 * 2. Build token settings from the signing secret
 * 3. Assemble the router over the resulting `AppState`
 */

use axum::Router;

use crate::backend::auth::tokens::TokenSettings;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_store, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Error Handling
///
/// Store problems do not stop startup; see `load_store`.
pub async fn create_app(config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing blog backend");

    let store = load_store(config).await;

    let tokens = TokenSettings::new(config.jwt_secret.clone()).with_ttl(config.token_ttl);
    match tokens.ttl() {
        Some(ttl) => tracing::info!("Issued tokens expire after {}s", ttl.as_secs()),
        None => tracing::info!("Issued tokens do not expire"),
    }

    let app_state = AppState::new(store, tokens, config.bcrypt_cost);

    let app = create_router(app_state);
    tracing::info!("Router configured");

    app
}
