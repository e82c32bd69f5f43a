//! # Board Backend
//!
//! Contains all server-side logic for the board API.
//!
//! The backend follows a layered architecture:
//! ```text
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (PostService, models)
//!     ↓
//! Storage Layer (SQLite repository)
//! ```
//!
//! Each layer only talks to the one directly below it. The service depends on
//! the storage traits rather than on SQLite, and every service operation runs
//! inside its own unit of work.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::domain::PostService;
use crate::storage::DbConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub post_service: PostService<DbConnection>,
}

impl AppState {
    pub fn new(db_conn: DbConnection) -> Self {
        Self {
            post_service: PostService::new(db_conn),
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &Config) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db_conn = DbConnection::init(config).await?;

    info!("Setting up application state");
    Ok(AppState::new(db_conn))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/posts", get(io::read_all_posts).post(io::create_post))
        .route(
            "/posts/:post_id",
            get(io::read_post).put(io::update_post).delete(io::delete_post),
        );

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
