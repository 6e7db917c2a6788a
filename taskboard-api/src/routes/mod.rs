/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: User CRUD endpoints
/// - `tasks`: Task CRUD endpoints

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

pub mod health;
pub mod tasks;
pub mod users;

/// Fixed acknowledgment body returned by successful write operations
///
/// ```json
/// {"status_code": 200, "transaction": "User update is successful!"}
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct Ack {
    /// HTTP status code of the response, repeated in the body
    pub status_code: u16,

    /// Short description of the committed transaction
    pub transaction: String,
}

impl Ack {
    /// Creates an acknowledgment for the given status and message
    pub fn new(status: StatusCode, transaction: &str) -> Self {
        Self {
            status_code: status.as_u16(),
            transaction: transaction.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_body_shape() {
        let ack = Ack::new(StatusCode::CREATED, "Successful");
        let json = serde_json::to_value(&ack).unwrap();
        assert_eq!(json["status_code"], 201);
        assert_eq!(json["transaction"], "Successful");
    }
}
