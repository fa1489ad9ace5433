pub mod config;
pub mod error;
pub mod state;
pub mod accounts;
pub mod auth;
pub mod db;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::accounts::AccountService;
use crate::config::Config;
use crate::db::users::PgUserStore;
use crate::state::{AppState, SharedState};

pub fn build_app(pool: PgPool, config: Config) -> Router {
    let accounts = AccountService::new(PgUserStore::new(pool), config.hashing.clone());

    let state: SharedState = Arc::new(AppState { accounts, config });

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
