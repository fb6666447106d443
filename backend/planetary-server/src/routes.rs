use crate::{
    AppState, add_planet, hello, list_planets, login, not_found, params, planet_details, register,
    remove_planet, request_log, retrieve_password, update_planet, url_variables,
};

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Greetings
        .route("/", get(hello))
        .route("/not_found", get(not_found))
        .route("/params", get(params))
        .route("/url_variables/{name}/{age}", get(url_variables))
        // Planets
        .route("/planets", get(list_planets))
        .route("/planet_details/{planet_id}", get(planet_details))
        .route("/add_planet", post(add_planet))
        .route("/update_planet", put(update_planet))
        .route("/remove_planet/{planet_id}", delete(remove_planet))
        // Users
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/retrieve_password/{email}", get(retrieve_password))
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(request_log::log_requests))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
