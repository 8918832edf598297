use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON error body: `{"error": "<message>"}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Application-level errors surfaced at the request boundary.
///
/// Every variant maps to an HTTP status and renders as a JSON body with a
/// single `error` field. Nothing here is fatal to the process.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or incomplete request input (400).
    Validation { message: String },
    /// Failed authentication (401). The message stays generic so an unknown
    /// username and a wrong password are indistinguishable.
    Unauthorized { message: String },
    /// Unexpected server-side failure (500).
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message),
            AppError::Internal { message } => {
                tracing::error!("internal error: {message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let res = AppError::bad_request("bad").into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = AppError::unauthorized("no").into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let res = AppError::internal("boom").into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
