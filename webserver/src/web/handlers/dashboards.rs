//! Player and admin dashboards, plus admin status edits

use axum::{
    extract::{Path, State},
    response::Json,
};

use portal::{
    AdminDashboard, HotelBookingPatch, KeyValueStore, MealBookingPatch, PaymentPatch, PlayerDashboard,
    RegistrationPatch,
};
use shared::RecordId;

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::web::extract::JsonBody;
use crate::types::{ApiResponse, UpdateResponse};

/// GET /api/dashboard
pub async fn player_dashboard<K: KeyValueStore + 'static>(
    State(state): State<WebServerState<K>>,
) -> WebServerResult<Json<ApiResponse<PlayerDashboard>>> {
    Ok(Json(ApiResponse::ok(state.portal.player_dashboard().await?)))
}

/// GET /api/admin
pub async fn admin_dashboard<K: KeyValueStore + 'static>(
    State(state): State<WebServerState<K>>,
) -> WebServerResult<Json<ApiResponse<AdminDashboard>>> {
    Ok(Json(ApiResponse::ok(state.portal.admin_dashboard().await?)))
}

fn updated(id: RecordId, found: bool) -> WebServerResult<Json<ApiResponse<UpdateResponse>>> {
    if !found {
        return Err(WebServerError::RecordNotFound { id: id.to_string() });
    }
    Ok(Json(ApiResponse::ok(UpdateResponse {
        id: id.to_string(),
        updated: true,
    })))
}

/// PATCH /api/admin/registrations/:id
pub async fn update_registration<K: KeyValueStore + 'static>(
    State(state): State<WebServerState<K>>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<RegistrationPatch>,
) -> WebServerResult<Json<ApiResponse<UpdateResponse>>> {
    let id = RecordId::from(id);
    let found = state.portal.update_registration(&id, patch).await?;
    updated(id, found)
}

/// PATCH /api/admin/hotel-bookings/:id
pub async fn update_hotel_booking<K: KeyValueStore + 'static>(
    State(state): State<WebServerState<K>>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<HotelBookingPatch>,
) -> WebServerResult<Json<ApiResponse<UpdateResponse>>> {
    let id = RecordId::from(id);
    let found = state.portal.update_hotel_booking(&id, patch).await?;
    updated(id, found)
}

/// PATCH /api/admin/meal-bookings/:id
pub async fn update_meal_booking<K: KeyValueStore + 'static>(
    State(state): State<WebServerState<K>>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<MealBookingPatch>,
) -> WebServerResult<Json<ApiResponse<UpdateResponse>>> {
    let id = RecordId::from(id);
    let found = state.portal.update_meal_booking(&id, patch).await?;
    updated(id, found)
}

/// PATCH /api/admin/payments/:id
pub async fn update_payment<K: KeyValueStore + 'static>(
    State(state): State<WebServerState<K>>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<PaymentPatch>,
) -> WebServerResult<Json<ApiResponse<UpdateResponse>>> {
    let id = RecordId::from(id);
    let found = state.portal.update_payment(&id, patch).await?;
    updated(id, found)
}
