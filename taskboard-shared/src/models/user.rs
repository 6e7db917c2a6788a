/// User model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id          BIGSERIAL PRIMARY KEY,
///     username    VARCHAR(255) NOT NULL,
///     firstname   VARCHAR(255) NOT NULL,
///     secondname  VARCHAR(255) NOT NULL,
///     age         INTEGER NOT NULL
/// );
/// ```
///
/// The id is assigned by the database on insert. `username` is immutable
/// after creation: `UpdateUser` carries no username field, so the update
/// statement never touches the column. No uniqueness is enforced on
/// `username`; duplicates are permitted.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// User model representing one row of the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned by the database
    pub id: i64,

    /// Login/display handle (immutable after creation)
    pub username: String,

    /// First name
    pub firstname: String,

    /// Second name
    pub secondname: String,

    /// Age in years
    pub age: i32,
}

/// Input for creating a new user
///
/// All fields are required; the id is assigned by the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub firstname: String,
    pub secondname: String,
    pub age: i32,
}

/// Input for updating an existing user
///
/// A full overwrite of the mutable fields. `username` is not updatable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    pub firstname: String,
    pub secondname: String,
    pub age: i32,
}

impl User {
    /// Lists all users in insertion order
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, firstname, secondname, age
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Finds a user by ID
    ///
    /// Returns the user if found, None otherwise.
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, firstname, secondname, age
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Creates a new user
    ///
    /// Returns the newly created row with its database-assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails.
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, firstname, secondname, age)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, firstname, secondname, age
            "#,
        )
        .bind(data.username)
        .bind(data.firstname)
        .bind(data.secondname)
        .bind(data.age)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Overwrites the mutable fields of the user with the given id
    ///
    /// Returns `true` if a row matched, `false` if the id does not exist.
    pub async fn update(pool: &PgPool, id: i64, data: UpdateUser) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET firstname = $1, secondname = $2, age = $3
            WHERE id = $4
            "#,
        )
        .bind(data.firstname)
        .bind(data.secondname)
        .bind(data.age)
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes the user with the given id
    ///
    /// Returns `true` if a row was deleted, `false` if the id does not
    /// exist. Fails with a foreign-key violation if the user still owns
    /// tasks (the FK is ON DELETE RESTRICT).
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_all_fields() {
        let user = User {
            id: 1,
            username: "al".to_string(),
            firstname: "A".to_string(),
            secondname: "L".to_string(),
            age: 30,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["username"], "al");
        assert_eq!(json["firstname"], "A");
        assert_eq!(json["secondname"], "L");
        assert_eq!(json["age"], 30);
    }

    #[test]
    fn test_create_user_requires_all_fields() {
        let err = serde_json::from_str::<CreateUser>(r#"{"username": "al"}"#);
        assert!(err.is_err());

        let ok: CreateUser = serde_json::from_str(
            r#"{"username": "al", "firstname": "A", "secondname": "L", "age": 30}"#,
        )
        .unwrap();
        assert_eq!(ok.age, 30);
    }

    #[test]
    fn test_update_user_rejects_wrong_types() {
        let err = serde_json::from_str::<UpdateUser>(
            r#"{"firstname": "A", "secondname": "L", "age": "thirty"}"#,
        );
        assert!(err.is_err());
    }
}
