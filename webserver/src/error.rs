//! WebServer-specific error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use portal::PortalError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("Record not found: {id}")]
    RecordNotFound { id: String },

    #[error(transparent)]
    Portal(#[from] PortalError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WebServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            WebServerError::RecordNotFound { .. } => StatusCode::NOT_FOUND,
            WebServerError::Portal(error) => match error {
                PortalError::IncompleteForm { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                PortalError::InvalidSelection { .. } | PortalError::NothingToPay => StatusCode::BAD_REQUEST,
                PortalError::UnknownPlayer { .. } => StatusCode::NOT_FOUND,
                PortalError::NotLoggedIn => StatusCode::UNAUTHORIZED,
                PortalError::Forbidden => StatusCode::FORBIDDEN,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut body = json!({
            "status": "error",
            "message": self.to_string(),
        });
        if let WebServerError::Portal(PortalError::IncompleteForm { missing }) = &self {
            body["missing"] = json!(missing);
        }

        if status.is_server_error() {
            shared::logging::log_error(shared::Component::WebServer, "Request", &self);
        }

        (status, Json(body)).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portal_errors_map_to_status_codes() {
        let cases = [
            (PortalError::incomplete(["name"]), StatusCode::UNPROCESSABLE_ENTITY),
            (PortalError::invalid_selection("hotel", "motel"), StatusCode::BAD_REQUEST),
            (PortalError::NothingToPay, StatusCode::BAD_REQUEST),
            (PortalError::NotLoggedIn, StatusCode::UNAUTHORIZED),
            (PortalError::Forbidden, StatusCode::FORBIDDEN),
            (
                PortalError::storage("write", "k", std::io::Error::from(std::io::ErrorKind::Other)),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(WebServerError::from(error).status_code(), expected);
        }
    }

    #[test]
    fn test_record_not_found_is_404() {
        let error = WebServerError::RecordNotFound { id: "reg_x".to_string() };
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }
}
