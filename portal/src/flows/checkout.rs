//! Simulated checkout
//!
//! Sums everything the logged-in player has booked, adds the processing fee
//! and records a completed payment after walking the processing phases.
//! There is no gateway; the phases only pace the flow and report progress.

use std::time::Duration;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use super::{is_blank, BookingOutcome, NextStage};
use crate::core::catalog::CURRENCY;
use crate::core::pricing::CheckoutTotals;
use crate::error::{PortalError, PortalResult};
use crate::store::AppStore;
use crate::traits::KeyValueStore;
use shared::{
    component_debug, component_info, Component, HotelBooking, LineItem, LineItemKind, MealBooking,
    Payment, PaymentMethod, PaymentStatus, RecordId, RecordKind, Registration,
};

/// Processing phases, reported in this order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutPhase {
    Validating,
    Authorizing,
    Capturing,
    Finalizing,
}

impl CheckoutPhase {
    pub const ALL: [CheckoutPhase; 4] = [
        CheckoutPhase::Validating,
        CheckoutPhase::Authorizing,
        CheckoutPhase::Capturing,
        CheckoutPhase::Finalizing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CheckoutPhase::Validating => "Validating payment details",
            CheckoutPhase::Authorizing => "Authorizing payment",
            CheckoutPhase::Capturing => "Capturing funds",
            CheckoutPhase::Finalizing => "Finalizing order",
        }
    }
}

/// Payment form; card fields only matter for card payments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub method: PaymentMethod,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub card_expiry: String,
    #[serde(default)]
    pub card_cvv: String,
    #[serde(default)]
    pub card_name: String,
}

impl PaymentDetails {
    pub fn card(number: &str, expiry: &str, cvv: &str, name: &str) -> Self {
        Self {
            method: PaymentMethod::Card,
            card_number: number.to_string(),
            card_expiry: expiry.to_string(),
            card_cvv: cvv.to_string(),
            card_name: name.to_string(),
        }
    }

    pub fn method(method: PaymentMethod) -> Self {
        Self {
            method,
            card_number: String::new(),
            card_expiry: String::new(),
            card_cvv: String::new(),
            card_name: String::new(),
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        match self.method {
            PaymentMethod::Card => [
                ("card_number", is_blank(&self.card_number)),
                ("card_expiry", is_blank(&self.card_expiry)),
                ("card_cvv", is_blank(&self.card_cvv)),
                ("card_name", is_blank(&self.card_name)),
            ]
            .into_iter()
            .filter_map(|(field, missing)| missing.then_some(field))
            .collect(),
            PaymentMethod::BankTransfer | PaymentMethod::Cash => Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// What the logged-in player is about to pay for
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutSummary {
    pub registrations: Vec<Registration>,
    pub hotel_bookings: Vec<HotelBooking>,
    pub meal_bookings: Vec<MealBooking>,
    pub totals: CheckoutTotals,
}

impl CheckoutSummary {
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty() && self.hotel_bookings.is_empty() && self.meal_bookings.is_empty()
    }

    /// One line item per charged record, registrations first
    pub fn line_items(&self) -> Vec<LineItem> {
        let registrations = self.registrations.iter().map(|r| LineItem {
            kind: LineItemKind::Registration,
            id: r.id.clone(),
            description: format!("Tournament Registration - {}", r.tournament_category),
            amount: r.amount,
        });
        let hotels = self.hotel_bookings.iter().map(|h| LineItem {
            kind: LineItemKind::Hotel,
            id: h.id.clone(),
            description: format!("{} - {}", h.hotel_name, h.room_type),
            amount: h.total_amount,
        });
        let meals = self.meal_bookings.iter().map(|m| LineItem {
            kind: LineItemKind::Meals,
            id: m.id.clone(),
            description: format!("Meal Plan - {}", m.meal_plan),
            amount: m.total_amount,
        });

        registrations.chain(hotels).chain(meals).collect()
    }
}

/// Summary of the logged-in player's records
pub async fn summary<K: KeyValueStore>(store: &AppStore<K>) -> PortalResult<CheckoutSummary> {
    let player = store.require_player().await?;
    let state = store.snapshot().await;

    let registrations: Vec<Registration> = state
        .registrations
        .into_iter()
        .filter(|r| r.player_id == player.id)
        .collect();
    let hotel_bookings: Vec<HotelBooking> = state
        .hotel_bookings
        .into_iter()
        .filter(|h| h.player_id == player.id)
        .collect();
    let meal_bookings: Vec<MealBooking> = state
        .meal_bookings
        .into_iter()
        .filter(|m| m.player_id == player.id)
        .collect();

    let totals = CheckoutTotals::for_player(&player.id, &registrations, &hotel_bookings, &meal_bookings);

    Ok(CheckoutSummary {
        registrations,
        hotel_bookings,
        meal_bookings,
        totals,
    })
}

/// Run the processing phases and record a completed payment
///
/// Each phase is sent on `progress` (if any) before waiting `phase_delay`.
/// A dropped receiver does not interrupt the payment.
pub async fn pay<K: KeyValueStore>(
    store: &AppStore<K>,
    details: &PaymentDetails,
    phase_delay: Duration,
    progress: Option<mpsc::Sender<CheckoutPhase>>,
) -> PortalResult<BookingOutcome<Payment>> {
    let player = store.require_player().await?;

    let missing = details.missing_fields();
    if !missing.is_empty() {
        return Err(PortalError::incomplete(missing));
    }

    let summary = summary(store).await?;
    if summary.totals.subtotal <= 0.0 {
        return Err(PortalError::NothingToPay);
    }

    for phase in CheckoutPhase::ALL {
        component_debug!(Component::Checkout, "💳 {} for {}", phase.label(), player.id);
        if let Some(progress) = &progress {
            let _ = progress.send(phase).await;
        }
        if !phase_delay.is_zero() {
            tokio::time::sleep(phase_delay).await;
        }
    }

    let payment = Payment {
        id: RecordId::generate(RecordKind::Payment),
        player_id: player.id,
        amount: summary.totals.total,
        currency: CURRENCY.to_string(),
        method: details.method,
        status: PaymentStatus::Completed,
        transaction_id: Some(RecordId::generate(RecordKind::Transaction).to_string()),
        items: summary.line_items(),
        created_at: Utc::now(),
    };

    store.add_payment(payment.clone()).await?;
    component_info!(
        Component::Checkout,
        "✅ Payment {} of {:.2} {} by {}",
        payment.id,
        payment.amount,
        payment.currency,
        payment.method
    );

    Ok(BookingOutcome {
        record: payment,
        next_stage: NextStage::Dashboard,
    })
}
