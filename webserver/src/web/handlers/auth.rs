//! Login, logout and session endpoints

use axum::{extract::State, response::Json};

use portal::KeyValueStore;

use crate::error::WebServerResult;
use crate::state::WebServerState;
use crate::web::extract::JsonBody;
use crate::types::{ApiResponse, LoginRequest, SessionResponse};

/// POST /api/auth/login
pub async fn login<K: KeyValueStore + 'static>(
    State(state): State<WebServerState<K>>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> WebServerResult<Json<ApiResponse<SessionResponse>>> {
    let session = state.portal.login(&request.email, &request.password).await?;
    Ok(Json(ApiResponse::ok(SessionResponse::from(Some(session)))))
}

/// POST /api/auth/logout
pub async fn logout<K: KeyValueStore + 'static>(
    State(state): State<WebServerState<K>>,
) -> WebServerResult<Json<ApiResponse<SessionResponse>>> {
    state.portal.logout().await?;
    Ok(Json(ApiResponse::ok(SessionResponse::from(None))))
}

/// GET /api/auth/session
pub async fn get_session<K: KeyValueStore + 'static>(
    State(state): State<WebServerState<K>>,
) -> Json<ApiResponse<SessionResponse>> {
    let session = state.portal.current_session().await;
    Json(ApiResponse::ok(SessionResponse::from(session)))
}
