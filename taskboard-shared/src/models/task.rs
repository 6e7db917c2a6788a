/// Task model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id          BIGSERIAL PRIMARY KEY,
///     title       VARCHAR(255) NOT NULL,
///     content     TEXT NOT NULL,
///     priority    INTEGER NOT NULL,
///     user_id     BIGINT NOT NULL REFERENCES users(id) ON DELETE RESTRICT
/// );
/// ```
///
/// `user_id` is set exactly once, at creation, and never updated. The
/// owning user's existence is checked by the create handler before the
/// insert; the RESTRICT foreign key keeps the reference valid afterwards.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Task model representing one row of the `tasks` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID, assigned by the database
    pub id: i64,

    /// Short task title
    pub title: String,

    /// Task body text
    pub content: String,

    /// Priority value (higher = more urgent; no range is enforced)
    pub priority: i32,

    /// ID of the owning user (immutable after creation)
    pub user_id: i64,
}

/// Input for creating a new task
///
/// The owning user is identified separately (a query parameter on the
/// create endpoint), not part of this payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub content: String,
    pub priority: i32,
}

/// Input for updating an existing task
///
/// A full overwrite of the mutable fields. `user_id` is not updatable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTask {
    pub title: String,
    pub content: String,
    pub priority: i32,
}

impl Task {
    /// Lists all tasks in insertion order
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, user_id
            FROM tasks
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Finds a task by ID
    ///
    /// Returns the task if found, None otherwise.
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, priority, user_id
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Creates a new task owned by `user_id`
    ///
    /// Returns the newly created row with its database-assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or `user_id`
    /// violates the foreign key (the caller checks existence first, but a
    /// concurrent user delete can still fail the insert).
    pub async fn create(
        pool: &PgPool,
        user_id: i64,
        data: CreateTask,
    ) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, content, priority, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, priority, user_id
            "#,
        )
        .bind(data.title)
        .bind(data.content)
        .bind(data.priority)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Overwrites the mutable fields of the task with the given id
    ///
    /// Returns `true` if a row matched, `false` if the id does not exist.
    /// `user_id` is left untouched.
    pub async fn update(pool: &PgPool, id: i64, data: UpdateTask) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = $1, content = $2, priority = $3
            WHERE id = $4
            "#,
        )
        .bind(data.title)
        .bind(data.content)
        .bind(data.priority)
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes the task with the given id
    ///
    /// Returns `true` if a row was deleted, `false` if the id does not
    /// exist.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
