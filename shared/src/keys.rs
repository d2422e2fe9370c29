//! Key-value entry names for persisted state
//!
//! Each key holds one JSON document that is read whole and rewritten whole.

/// Current session record `{player, isAdmin}`
pub const SESSION: &str = "tournament_auth";
/// Player directory
pub const PLAYERS: &str = "tournament_players";
pub const REGISTRATIONS: &str = "tournament_registrations";
pub const HOTEL_BOOKINGS: &str = "tournament_hotel_bookings";
pub const MEAL_BOOKINGS: &str = "tournament_meal_bookings";
pub const PAYMENTS: &str = "tournament_payments";

