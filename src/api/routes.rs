use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::health::health;
use super::profile::render_profile;
use super::template::{
    create_template, delete_template, get_template, list_templates, render_template,
    update_template,
};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health
        .route("/health", get(health))
        .nest(
            "/api/v1",
            Router::new()
                // Templates
                .route("/templates", post(create_template).get(list_templates))
                .route(
                    "/templates/{id}",
                    get(get_template)
                        .put(update_template)
                        .delete(delete_template),
                )
                .route("/templates/{id}/render", post(render_template))
                // Profiles
                .route("/profiles/render", post(render_profile)),
        )
}
