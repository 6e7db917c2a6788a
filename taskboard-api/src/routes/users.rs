/// User CRUD endpoints
///
/// Every handler is thin glue: one extractor, one model call, one status.
/// Payload shape and types are enforced by the `Json`/`Path` extractors
/// before a handler runs, so the only failure a handler produces itself is
/// NotFound when zero rows matched.
///
/// # Endpoints
///
/// - `GET    /user/` - List users
/// - `GET    /user/:user_id` - Get user by id
/// - `POST   /user/create` - Create user (201)
/// - `PUT    /user/update/:user_id` - Update user
/// - `DELETE /user/delete/:user_id` - Delete user

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::Ack,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use taskboard_shared::models::user::{CreateUser, UpdateUser, User};

/// Lists all users
///
/// Always succeeds; returns an empty list when there are no users.
pub async fn all_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::list(&state.db).await?;
    Ok(Json(users))
}

/// Gets a user by id
///
/// # Errors
///
/// - `404 Not Found`: No user with that id
pub async fn user_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<User>> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User was not found".to_string()))?;

    Ok(Json(user))
}

/// Creates a user
///
/// The id is assigned by the database and not returned; the response is
/// the fixed acknowledgment body. Duplicate usernames are permitted.
///
/// # Endpoint
///
/// ```text
/// POST /user/create
/// Content-Type: application/json
///
/// {"username": "al", "firstname": "A", "secondname": "L", "age": 30}
/// ```
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUser>,
) -> ApiResult<(StatusCode, Json<Ack>)> {
    let user = User::create(&state.db, payload).await?;
    tracing::debug!(user_id = user.id, "Created user");

    Ok((
        StatusCode::CREATED,
        Json(Ack::new(StatusCode::CREATED, "Successful")),
    ))
}

/// Updates a user
///
/// Full overwrite of firstname, secondname, and age; `username` is not
/// updatable.
///
/// # Errors
///
/// - `404 Not Found`: No user with that id
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(payload): Json<UpdateUser>,
) -> ApiResult<Json<Ack>> {
    let updated = User::update(&state.db, user_id, payload).await?;

    if !updated {
        return Err(ApiError::NotFound("User was not found".to_string()));
    }

    Ok(Json(Ack::new(
        StatusCode::OK,
        "User update is successful!",
    )))
}

/// Deletes a user
///
/// # Errors
///
/// - `404 Not Found`: No user with that id
/// - `409 Conflict`: The user still owns tasks (foreign key is RESTRICT)
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Ack>> {
    let deleted = User::delete(&state.db, user_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("User was not found".to_string()));
    }

    Ok(Json(Ack::new(StatusCode::OK, "User deleted successfully!")))
}
