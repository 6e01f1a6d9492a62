/**
 * Application State Management
 *
 * `AppState` is the state container handed to the router. The `FromRef`
 * implementations let handlers extract only the part they need.
 *
 * # Thread Safety
 *
 * Everything in here is immutable after startup and cheap to clone: the
 * store sits behind an `Arc` and the token settings share their secret.
 * Requests never coordinate with each other through this state.
 */

use axum::extract::FromRef;

use crate::backend::auth::tokens::TokenSettings;
use crate::backend::store::SharedStore;

/// Application state shared by every request handler
#[derive(Clone)]
pub struct AppState {
    /// User and post persistence
    pub store: SharedStore,

    /// Signing secret and expiry policy for issued tokens
    pub tokens: TokenSettings,

    /// bcrypt cost used when hashing new passwords
    pub password_cost: u32,
}

impl AppState {
    pub fn new(store: SharedStore, tokens: TokenSettings, password_cost: u32) -> Self {
        Self {
            store,
            tokens,
            password_cost,
        }
    }
}

/// Implement FromRef for SharedStore
///
/// Lets handlers take `State(store): State<SharedStore>`.
impl FromRef<AppState> for SharedStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

/// Implement FromRef for TokenSettings
impl FromRef<AppState> for TokenSettings {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
