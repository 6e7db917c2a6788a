/// Database models for Taskboard
///
/// This module contains the two persisted models and their CRUD operations.
///
/// # Models
///
/// - `user`: accounts that own tasks
/// - `task`: tasks belonging to a user
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::user::{CreateUser, User};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(
///     &pool,
///     CreateUser {
///         username: "al".to_string(),
///         firstname: "A".to_string(),
///         secondname: "L".to_string(),
///         age: 30,
///     },
/// )
/// .await?;
/// println!("Created user {}", user.id);
/// # Ok(())
/// # }
/// ```

pub mod task;
pub mod user;
