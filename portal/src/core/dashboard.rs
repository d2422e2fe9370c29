//! Read-only dashboards over the store
//!
//! The player view filters every collection by the logged-in player; the
//! admin view shows everything and is only built for admin sessions.

use serde::Serialize;

use crate::error::PortalResult;
use crate::store::{AppState, AppStore};
use crate::traits::KeyValueStore;
use shared::{component_debug, Component, HotelBooking, MealBooking, Payment, PaymentStatus, Player, Registration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RecordCounts {
    pub registrations: usize,
    pub hotel_bookings: usize,
    pub meal_bookings: usize,
    pub payments: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerDashboard {
    pub player: Player,
    pub registrations: Vec<Registration>,
    pub hotel_bookings: Vec<HotelBooking>,
    pub meal_bookings: Vec<MealBooking>,
    pub payments: Vec<Payment>,
    pub counts: RecordCounts,
    /// Sum of the player's payment amounts
    pub total_spent: f64,
}

impl PlayerDashboard {
    pub fn build(state: &AppState, player: &Player) -> Self {
        let registrations: Vec<Registration> = state
            .registrations
            .iter()
            .filter(|r| r.player_id == player.id)
            .cloned()
            .collect();
        let hotel_bookings: Vec<HotelBooking> = state
            .hotel_bookings
            .iter()
            .filter(|h| h.player_id == player.id)
            .cloned()
            .collect();
        let meal_bookings: Vec<MealBooking> = state
            .meal_bookings
            .iter()
            .filter(|m| m.player_id == player.id)
            .cloned()
            .collect();
        let payments: Vec<Payment> = state
            .payments
            .iter()
            .filter(|p| p.player_id == player.id)
            .cloned()
            .collect();

        let counts = RecordCounts {
            registrations: registrations.len(),
            hotel_bookings: hotel_bookings.len(),
            meal_bookings: meal_bookings.len(),
            payments: payments.len(),
        };
        let total_spent = payments.iter().map(|p| p.amount).sum();

        Self {
            player: player.clone(),
            registrations,
            hotel_bookings,
            meal_bookings,
            payments,
            counts,
            total_spent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminDashboard {
    pub registrations: Vec<Registration>,
    pub hotel_bookings: Vec<HotelBooking>,
    pub meal_bookings: Vec<MealBooking>,
    pub payments: Vec<Payment>,
    pub counts: RecordCounts,
    /// Sum of every payment amount, whatever its status
    pub total_revenue: f64,
    pub completed_payments: usize,
}

impl AdminDashboard {
    pub fn build(state: &AppState) -> Self {
        let counts = RecordCounts {
            registrations: state.registrations.len(),
            hotel_bookings: state.hotel_bookings.len(),
            meal_bookings: state.meal_bookings.len(),
            payments: state.payments.len(),
        };

        Self {
            registrations: state.registrations.clone(),
            hotel_bookings: state.hotel_bookings.clone(),
            meal_bookings: state.meal_bookings.clone(),
            payments: state.payments.clone(),
            counts,
            total_revenue: state.payments.iter().map(|p| p.amount).sum(),
            completed_payments: state
                .payments
                .iter()
                .filter(|p| p.status == PaymentStatus::Completed)
                .count(),
        }
    }
}

/// Dashboard of the logged-in player
pub async fn player_dashboard<K: KeyValueStore>(store: &AppStore<K>) -> PortalResult<PlayerDashboard> {
    let player = store.require_player().await?;
    let dashboard = PlayerDashboard::build(&store.snapshot().await, &player);
    component_debug!(Component::Dashboard, "📊 Player dashboard for {}", player.id);
    Ok(dashboard)
}

pub async fn admin_dashboard<K: KeyValueStore>(store: &AppStore<K>) -> PortalResult<AdminDashboard> {
    store.require_admin().await?;
    let dashboard = AdminDashboard::build(&store.snapshot().await);
    component_debug!(
        Component::Dashboard,
        "📊 Admin dashboard: {} payments, revenue {:.2}",
        dashboard.counts.payments,
        dashboard.total_revenue
    );
    Ok(dashboard)
}
