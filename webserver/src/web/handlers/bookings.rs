//! Registration, hotel, meal and checkout endpoints
//!
//! Every submission answers with the persisted record and `next_stage`.

use axum::{extract::State, response::Json};

use portal::{
    BookingOutcome, CheckoutSummary, HotelQuote, HotelSelection, KeyValueStore, MealQuote, MealSelection,
    PaymentDetails, RegistrationForm, RegistrationOutcome,
};
use shared::{HotelBooking, MealBooking, Payment};

use crate::error::WebServerResult;
use crate::state::WebServerState;
use crate::web::extract::JsonBody;
use crate::types::ApiResponse;

/// POST /api/register
pub async fn register<K: KeyValueStore + 'static>(
    State(state): State<WebServerState<K>>,
    JsonBody(form): JsonBody<RegistrationForm>,
) -> WebServerResult<Json<ApiResponse<RegistrationOutcome>>> {
    let outcome = state.portal.register(&form).await?;
    Ok(Json(ApiResponse::ok(outcome)))
}

/// POST /api/hotel/quote
pub async fn quote_hotel<K: KeyValueStore + 'static>(
    State(state): State<WebServerState<K>>,
    JsonBody(selection): JsonBody<HotelSelection>,
) -> WebServerResult<Json<ApiResponse<HotelQuote>>> {
    Ok(Json(ApiResponse::ok(state.portal.hotel_quote(&selection)?)))
}

/// POST /api/hotel/bookings
pub async fn book_hotel<K: KeyValueStore + 'static>(
    State(state): State<WebServerState<K>>,
    JsonBody(selection): JsonBody<HotelSelection>,
) -> WebServerResult<Json<ApiResponse<BookingOutcome<HotelBooking>>>> {
    let outcome = state.portal.book_hotel(&selection).await?;
    Ok(Json(ApiResponse::ok(outcome)))
}

/// POST /api/meals/quote
pub async fn quote_meals<K: KeyValueStore + 'static>(
    State(state): State<WebServerState<K>>,
    JsonBody(selection): JsonBody<MealSelection>,
) -> WebServerResult<Json<ApiResponse<MealQuote>>> {
    Ok(Json(ApiResponse::ok(state.portal.meal_quote(&selection)?)))
}

/// POST /api/meals/bookings
pub async fn book_meals<K: KeyValueStore + 'static>(
    State(state): State<WebServerState<K>>,
    JsonBody(selection): JsonBody<MealSelection>,
) -> WebServerResult<Json<ApiResponse<BookingOutcome<MealBooking>>>> {
    let outcome = state.portal.book_meals(&selection).await?;
    Ok(Json(ApiResponse::ok(outcome)))
}

/// GET /api/checkout
pub async fn checkout_summary<K: KeyValueStore + 'static>(
    State(state): State<WebServerState<K>>,
) -> WebServerResult<Json<ApiResponse<CheckoutSummary>>> {
    Ok(Json(ApiResponse::ok(state.portal.checkout_summary().await?)))
}

/// POST /api/checkout
///
/// Holds the request open while the processing phases run.
pub async fn checkout<K: KeyValueStore + 'static>(
    State(state): State<WebServerState<K>>,
    JsonBody(details): JsonBody<PaymentDetails>,
) -> WebServerResult<Json<ApiResponse<BookingOutcome<Payment>>>> {
    let outcome = state.portal.checkout(&details, None).await?;
    Ok(Json(ApiResponse::ok(outcome)))
}
