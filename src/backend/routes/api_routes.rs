/**
 * API Route Configuration
 *
 * # Routes
 *
 * ## Authentication
 * - `GET /api/users/login` - Login (query parameters)
 * - `POST /api/users/login` - Login (JSON body)
 * - `GET /api/users/validate` - Credential check without a token
 *
 * ## Accounts
 * - `GET /api/users` - List users (requires authentication)
 * - `POST /api/users` - Create user
 * - `PATCH /api/users` - Update user (requires authentication)
 * - `DELETE /api/users` - Delete user (requires authentication)
 * - `GET /api/users/{id}` - Get user
 * - `GET /api/users/{id}/posts` - Posts authored by the user
 * - `GET /api/users/{id}/edited-posts` - Posts last edited by the user
 * - `GET /api/users/exists` - Whether a user id exists
 * - `GET /api/users/id-by-username` - Resolve a username to its id
 * - `GET /api/users/email-exists` - Whether an email is registered
 */

use axum::{
    middleware::from_fn_with_state,
    routing::get,
    Router,
};

use crate::backend::auth::{login, login_json, validate};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::users::handlers::{
    add_user, delete_user, email_exists, get_all_users, get_edited_posts, get_posts,
    get_user, get_user_id_by_username, update_user, user_exists,
};

/// Configure API routes
///
/// Static segments (`login`, `exists`, ...) take precedence over the
/// `{id}` capture, so they never reach `get_user`.
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let require_auth = from_fn_with_state(state.clone(), auth_middleware);

    router
        .route("/api/users/login", get(login).post(login_json))
        .route("/api/users/validate", get(validate))
        .route(
            "/api/users",
            get(get_all_users)
                .patch(update_user)
                .delete(delete_user)
                .route_layer(require_auth)
                .post(add_user),
        )
        .route("/api/users/exists", get(user_exists))
        .route("/api/users/id-by-username", get(get_user_id_by_username))
        .route("/api/users/email-exists", get(email_exists))
        .route("/api/users/{id}", get(get_user))
        .route("/api/users/{id}/posts", get(get_posts))
        .route("/api/users/{id}/edited-posts", get(get_edited_posts))
}
