use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
    cors,
    handlers::{
        favorites::{get_favorites, update_favorites},
        root::{hello, not_found},
        themes::get_theme,
        users::{create_user, get_user, list_users, update_user},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(hello))
        .route("/theme/{id}", get(get_theme))
        .route("/user", get(list_users).post(create_user))
        .route("/user/{username}", get(get_user).put(update_user))
        .route("/favorites/{id}", get(get_favorites).put(update_favorites))
        .fallback(not_found);

    cors::apply(routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
