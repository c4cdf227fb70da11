//! API error types with HTTP response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::{ErrorMessage, ServiceError};

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be bound to the expected shape.
    InvalidRequest,
    /// The `:id` path segment is not an integer.
    InvalidMemberId,
    /// The service rejected or failed the operation.
    Service(ServiceError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest | ApiError::InvalidMemberId => StatusCode::BAD_REQUEST,
            ApiError::Service(err) => err.status_code(),
        }
    }

    fn body(&self) -> ErrorMessage {
        match self {
            ApiError::InvalidRequest => ErrorMessage::new("Invalid request"),
            ApiError::InvalidMemberId => ErrorMessage::new("Invalid member ID"),
            ApiError::Service(err) => ErrorMessage::from(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.body();

        if status.is_server_error() {
            tracing::error!(status = %status, error = ?self, "request failed");
        } else {
            tracing::debug!(status = %status, error = %body.error, "request rejected");
        }
        metrics::counter!("api_errors_total", "status" => status.as_str().to_string())
            .increment(1);

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError::Service(err)
    }
}

#[cfg(test)]
mod tests {
    use member_store::MemberId;

    use super::*;

    #[test]
    fn boundary_errors_are_bad_requests() {
        assert_eq!(ApiError::InvalidRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidRequest.body(),
            ErrorMessage::new("Invalid request")
        );
        assert_eq!(ApiError::InvalidMemberId.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidMemberId.body(),
            ErrorMessage::new("Invalid member ID")
        );
    }

    #[test]
    fn service_errors_keep_their_status() {
        let err = ApiError::from(ServiceError::MemberNotFound(MemberId::new(7)));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.body(), ErrorMessage::new("Member 7 not found"));
    }

    #[test]
    fn into_response_sets_status() {
        let response = ApiError::InvalidMemberId.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
