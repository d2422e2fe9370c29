//! Request and response bodies of the JSON API

use serde::{Deserialize, Serialize};

use shared::Session;

/// Envelope around every successful response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: "ok".to_string(),
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub authenticated: bool,
    pub is_admin: bool,
    pub session: Option<Session>,
}

impl From<Option<Session>> for SessionResponse {
    fn from(session: Option<Session>) -> Self {
        Self {
            authenticated: session.is_some(),
            is_admin: session.as_ref().is_some_and(|s| s.is_admin),
            session,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub id: String,
    pub updated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}
