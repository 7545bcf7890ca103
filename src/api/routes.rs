use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::health::health;
use super::metrics::prometheus_metrics;
use super::notifications::{notify_accepted, notify_rejected};
use super::template::{
    create_template, delete_template, get_template, list_templates, update_template,
};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health & Metrics
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        // Template CRUD
        .route("/templates", get(list_templates).post(create_template))
        .route(
            "/templates/{key}",
            get(get_template)
                .put(update_template)
                .delete(delete_template),
        )
        // Notification entry points
        .route("/notifications/accepted", post(notify_accepted))
        .route("/notifications/rejected", post(notify_rejected))
}
