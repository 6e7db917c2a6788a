/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskboard_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = taskboard_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// The pool hands out one scoped connection per statement, so handlers
/// never hold a long-lived database session of their own.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                       # Health check
/// ├── /user/                        # User CRUD
/// │   ├── GET    /                  # List users
/// │   ├── GET    /:user_id          # Get user by id
/// │   ├── POST   /create            # Create user
/// │   ├── PUT    /update/:user_id   # Update user
/// │   └── DELETE /delete/:user_id   # Delete user
/// └── /task/                        # Task CRUD
///     ├── GET    /                  # List tasks
///     ├── GET    /:task_id          # Get task by id
///     ├── POST   /create?user_id=N  # Create task for a user
///     ├── PUT    /update/:task_id   # Update task
///     └── DELETE /delete/:task_id   # Delete task
/// ```
///
/// # Middleware Stack
///
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer, permissive)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    let user_routes = Router::new()
        .route("/", get(routes::users::all_users))
        .route("/:user_id", get(routes::users::user_by_id))
        .route("/create", post(routes::users::create_user))
        .route("/update/:user_id", put(routes::users::update_user))
        .route("/delete/:user_id", delete(routes::users::delete_user));

    let task_routes = Router::new()
        .route("/", get(routes::tasks::all_tasks))
        .route("/:task_id", get(routes::tasks::task_by_id))
        .route("/create", post(routes::tasks::create_task))
        .route("/update/:task_id", put(routes::tasks::update_task))
        .route("/delete/:task_id", delete(routes::tasks::delete_task));

    Router::new()
        .merge(health_routes)
        .nest("/user", user_routes)
        .nest("/task", task_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
