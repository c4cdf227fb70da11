//! Response envelope returned by service operations.

use http::StatusCode;
use serde::Serialize;

use crate::error::ServiceError;

/// A successful service result: the status to report plus the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response<T> {
    pub status: StatusCode,
    pub body: T,
}

impl<T> Response<T> {
    /// 200 OK with `body`.
    pub fn ok(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    /// 201 Created with `body`.
    pub fn created(body: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            body,
        }
    }
}

/// Body for operations that only report success, e.g. `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessMessage {
    pub message: String,
}

impl SuccessMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body for failures, e.g. `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMessage {
    pub error: String,
}

impl ErrorMessage {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl From<&ServiceError> for ErrorMessage {
    fn from(err: &ServiceError) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_bodies_serialize_to_single_key_objects() {
        assert_eq!(
            serde_json::to_value(SuccessMessage::new("Member 1 deleted")).unwrap(),
            serde_json::json!({ "message": "Member 1 deleted" })
        );
        assert_eq!(
            serde_json::to_value(ErrorMessage::from(&ServiceError::InvalidEmail)).unwrap(),
            serde_json::json!({ "error": "Invalid email" })
        );
    }

    #[test]
    fn constructors_set_status() {
        assert_eq!(Response::ok(()).status, StatusCode::OK);
        assert_eq!(Response::created(()).status, StatusCode::CREATED);
    }
}
