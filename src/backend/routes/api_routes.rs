/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## User
 * - `POST /api/v1/user/signup` - Create an account
 * - `POST /api/v1/user/signin` - Sign in
 *
 * ## Blog (authentication required)
 * - `POST /api/v1/blog` - Create a post
 * - `PUT /api/v1/blog` - Update a post
 * - `GET /api/v1/blog/bulk` - List posts
 * - `GET /api/v1/blog/{id}` - Fetch a post
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{signin, signup};
use crate::backend::blog::{create_post, get_post, list_posts, update_post};
use crate::backend::middleware::auth_middleware;
use crate::backend::routes::router::not_found;
use crate::backend::server::state::AppState;

/// Configure the public user routes
pub fn configure_user_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/v1/user/signup", post(signup))
        .route("/api/v1/user/signin", post(signin))
}

/// Configure the blog routes
///
/// # Authentication
///
/// The blog router is nested under `/api/v1/blog` with `auth_middleware` as
/// a layer, so the gate runs before route matching. Every request under the
/// prefix, including unknown paths, is rejected with 403 without a valid
/// token.
pub fn configure_blog_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let blog = Router::new()
        .route("/", post(create_post).put(update_post))
        .route("/bulk", get(list_posts))
        .route("/{id}", get(get_post))
        .fallback(not_found)
        .layer(from_fn_with_state(app_state.tokens.clone(), auth_middleware));

    router.nest("/api/v1/blog", blog)
}
