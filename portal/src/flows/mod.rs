//! Booking flows
//!
//! Each flow walks `selection → detail entry → confirm`, persists one record
//! through the store and names the stage the player moves on to.

pub mod checkout;
pub mod hotel;
pub mod meals;
pub mod registration;

use serde::{Deserialize, Serialize};

pub use checkout::{CheckoutPhase, CheckoutSummary, PaymentDetails};
pub use hotel::{HotelQuote, HotelSelection};
pub use meals::{MealQuote, MealSelection};
pub use registration::{RegistrationForm, RegistrationOutcome, RegistrationStep, RegistrationWizard};

/// Where a player goes after a successful submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextStage {
    BookHotel,
    BookMeals,
    Checkout,
    Dashboard,
}

impl NextStage {
    /// Route of the stage in the browser-facing portal
    pub fn path(&self) -> &'static str {
        match self {
            NextStage::BookHotel => "/book-hotel",
            NextStage::BookMeals => "/book-meals",
            NextStage::Checkout => "/checkout",
            NextStage::Dashboard => "/dashboard",
        }
    }
}

/// A persisted record plus the stage to navigate to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingOutcome<T> {
    pub record: T,
    pub next_stage: NextStage,
}

/// Trimmed value, or `None` for blank optional text
pub(crate) fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
