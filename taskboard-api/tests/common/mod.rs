/// Common test utilities for integration tests
///
/// Provides shared infrastructure for driving the real router against a
/// real database:
/// - Test context setup (pool, migrations, router)
/// - Request/response helpers
///
/// Tests are skipped (not failed) when `DATABASE_URL` is unset, so the
/// suite passes on machines without a provisioned database.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::PgPool;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use taskboard_api::app::{build_router, AppState};
use taskboard_api::config::{ApiConfig, Config, DatabaseConfig};
use tower::ServiceExt;

/// Test context containing the database pool and the router under test
pub struct TestContext {
    pub db: PgPool,
    pub app: Router,
}

impl TestContext {
    /// Creates a test context against the database named by `DATABASE_URL`
    ///
    /// Returns `None` when `DATABASE_URL` is unset so callers can skip.
    pub async fn new() -> anyhow::Result<Option<Self>> {
        let Ok(url) = std::env::var("DATABASE_URL") else {
            return Ok(None);
        };

        let db = PgPool::connect(&url).await?;

        // Path relative to the taskboard-api Cargo.toml
        sqlx::migrate!("../migrations").run(&db).await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig {
                url,
                max_connections: 5,
            },
        };

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(Some(TestContext { db, app }))
    }

    /// Sends a request with no body and returns (status, parsed body)
    pub async fn request(&self, method: &str, path: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();

        send(self.app.clone(), request).await
    }

    /// Sends a request with a JSON body and returns (status, parsed body)
    pub async fn request_json(&self, method: &str, path: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        send(self.app.clone(), request).await
    }

    /// Looks up the database-assigned id of a user by username
    ///
    /// Write endpoints return only the acknowledgment body, so tests
    /// recover ids from storage, using a username unique to the test.
    pub async fn user_id_by_username(&self, username: &str) -> anyhow::Result<Option<i64>> {
        let id: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.db)
            .await?;
        Ok(id.map(|(id,)| id))
    }

    /// Looks up the ids of all tasks owned by a user
    pub async fn task_ids_for_user(&self, user_id: i64) -> anyhow::Result<Vec<i64>> {
        let ids: Vec<(i64,)> =
            sqlx::query_as("SELECT id FROM tasks WHERE user_id = $1 ORDER BY id")
                .bind(user_id)
                .fetch_all(&self.db)
                .await?;
        Ok(ids.into_iter().map(|(id,)| id).collect())
    }

    /// Removes a user and everything it owns (test cleanup)
    pub async fn remove_user(&self, user_id: i64) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM tasks WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.db)
            .await?;
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, body)
}

/// Returns a username/title suffix unique across tests and runs
///
/// Tests run in parallel against a shared database, so every test works
/// on rows it created under a unique marker rather than asserting on
/// whole-table contents.
pub fn unique_suffix() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}-{}", std::process::id(), nanos, n)
}

/// An id no BIGSERIAL sequence in a test database will have reached
pub const MISSING_ID: i64 = 9_999_999_999;
