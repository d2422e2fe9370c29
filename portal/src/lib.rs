//! Tournament registration portal library
//!
//! Players sign up for a tournament, add hotel and meal bookings and pay
//! for everything through a simulated checkout; players and admins then
//! review the result on dashboards. All state lives in a key-value store
//! injected through the [`KeyValueStore`] trait, so the same logic runs
//! against files on disk or an in-memory map in tests.

pub mod auth;
pub mod config;
pub mod core;
pub mod error;
pub mod facade;
pub mod flows;
pub mod services;
pub mod store;
pub mod traits;

// Re-export commonly used types
pub use auth::Auth;
pub use config::PortalConfig;
pub use crate::core::{AdminDashboard, Catalog, CheckoutTotals, PlayerDashboard};
pub use error::{PortalError, PortalResult};
pub use flows::{
    BookingOutcome, CheckoutPhase, CheckoutSummary, HotelQuote, HotelSelection, MealQuote, MealSelection,
    NextStage, PaymentDetails, RegistrationForm, RegistrationOutcome,
};
pub use facade::Portal;
pub use services::{FileKeyValueStore, MemoryKeyValueStore};
pub use store::{AppState, AppStore, HotelBookingPatch, MealBookingPatch, PaymentPatch, RegistrationPatch};
pub use traits::KeyValueStore;
