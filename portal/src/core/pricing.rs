//! Pricing and derivation rules
//!
//! Pure functions turning raw selections into quantities and amounts. No
//! rounding happens here; two-decimal formatting is a display concern.
//!
//! Hotel stays count nights (check-out day excluded) while meal plans count
//! days with both endpoints included. The two conventions differ on purpose
//! and must stay that way, unifying them changes every quoted total.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared::{HotelBooking, MealBooking, MealPlan, RecordId, Registration};

/// Processing fee charged on top of the checkout subtotal
pub const PROCESSING_FEE_RATE: f64 = 0.03;

/// Nights between check-in and check-out
///
/// Zero or negative when the range is empty or reversed. Callers treat that
/// as an incomplete selection, not an error.
pub fn nights(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

pub fn hotel_total(price_per_night: f64, nights: i64) -> f64 {
    price_per_night * nights as f64
}

/// Days covered by a meal plan, inclusive of both endpoints
pub fn days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

pub fn meals_per_day(plan: MealPlan) -> u32 {
    match plan {
        MealPlan::FullBoard => 3,
        _ => 1,
    }
}

pub fn meal_total(price_per_day: f64, days: i64) -> f64 {
    price_per_day * days as f64
}

pub fn processing_fee(subtotal: f64) -> f64 {
    subtotal * PROCESSING_FEE_RATE
}

pub fn grand_total(subtotal: f64) -> f64 {
    subtotal + processing_fee(subtotal)
}

/// Format an amount for display with two decimals
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Sum of one player's registration amounts, hotel totals and meal totals
pub fn checkout_subtotal(
    player_id: &RecordId,
    registrations: &[Registration],
    hotel_bookings: &[HotelBooking],
    meal_bookings: &[MealBooking],
) -> f64 {
    CheckoutTotals::for_player(player_id, registrations, hotel_bookings, meal_bookings).subtotal
}

/// Per-category breakdown of what a player owes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CheckoutTotals {
    pub registrations: f64,
    pub hotels: f64,
    pub meals: f64,
    pub subtotal: f64,
    pub processing_fee: f64,
    pub total: f64,
}

impl CheckoutTotals {
    pub fn for_player(
        player_id: &RecordId,
        registrations: &[Registration],
        hotel_bookings: &[HotelBooking],
        meal_bookings: &[MealBooking],
    ) -> Self {
        let registrations: f64 = registrations
            .iter()
            .filter(|r| &r.player_id == player_id)
            .map(|r| r.amount)
            .sum();
        let hotels: f64 = hotel_bookings
            .iter()
            .filter(|h| &h.player_id == player_id)
            .map(|h| h.total_amount)
            .sum();
        let meals: f64 = meal_bookings
            .iter()
            .filter(|m| &m.player_id == player_id)
            .map(|m| m.total_amount)
            .sum();

        Self::from_parts(registrations, hotels, meals)
    }

    pub fn from_parts(registrations: f64, hotels: f64, meals: f64) -> Self {
        let subtotal = registrations + hotels + meals;
        Self {
            registrations,
            hotels,
            meals,
            subtotal,
            processing_fee: processing_fee(subtotal),
            total: grand_total(subtotal),
        }
    }
}
