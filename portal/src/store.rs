//! Shared state store
//!
//! Single holder of the four booking collections and the current session.
//! State is loaded once from the key-value store and every mutation is
//! written through before the call returns, rewriting the whole collection.

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::auth::Auth;
use crate::error::{PortalError, PortalResult};
use crate::services::collections::{read_collection, write_collection};
use crate::traits::KeyValueStore;
use shared::{
    component_debug, component_info, component_warn, keys, BookingStatus, Component, HotelBooking,
    MealBooking, Payment, PaymentStatus, Player, RecordId, Registration, Session, ShirtSize,
    SkillLevel,
};

/// In-memory mirror of everything persisted
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppState {
    pub session: Option<Session>,
    pub registrations: Vec<Registration>,
    pub hotel_bookings: Vec<HotelBooking>,
    pub meal_bookings: Vec<MealBooking>,
    pub payments: Vec<Payment>,
}

impl AppState {
    pub fn current_player(&self) -> Option<&Player> {
        self.session.as_ref().map(|s| &s.player)
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_admin)
    }
}

/// A record type stored as one persisted collection
trait CollectionRecord: Clone + Serialize + Send + Sync + 'static {
    const KEY: &'static str;

    fn id(&self) -> &RecordId;
    fn player_id(&self) -> &RecordId;
    fn collection(state: &mut AppState) -> &mut Vec<Self>;
}

macro_rules! collection_record {
    ($record:ty, $key:expr, $field:ident) => {
        impl CollectionRecord for $record {
            const KEY: &'static str = $key;

            fn id(&self) -> &RecordId {
                &self.id
            }

            fn player_id(&self) -> &RecordId {
                &self.player_id
            }

            fn collection(state: &mut AppState) -> &mut Vec<Self> {
                &mut state.$field
            }
        }
    };
}

collection_record!(Registration, keys::REGISTRATIONS, registrations);
collection_record!(HotelBooking, keys::HOTEL_BOOKINGS, hotel_bookings);
collection_record!(MealBooking, keys::MEAL_BOOKINGS, meal_bookings);
collection_record!(Payment, keys::PAYMENTS, payments);

/// Partial update for a registration; unset fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationPatch {
    pub status: Option<BookingStatus>,
    pub tournament_category: Option<String>,
    pub skill_level: Option<SkillLevel>,
    pub shirt_size: Option<ShirtSize>,
    pub medical_conditions: Option<String>,
    pub dietary_restrictions: Option<String>,
}

impl RegistrationPatch {
    fn apply(self, registration: &mut Registration) {
        if let Some(status) = self.status {
            registration.status = status;
        }
        if let Some(category) = self.tournament_category {
            registration.tournament_category = category;
        }
        if let Some(skill_level) = self.skill_level {
            registration.skill_level = skill_level;
        }
        if let Some(shirt_size) = self.shirt_size {
            registration.shirt_size = shirt_size;
        }
        if self.medical_conditions.is_some() {
            registration.medical_conditions = self.medical_conditions;
        }
        if self.dietary_restrictions.is_some() {
            registration.dietary_restrictions = self.dietary_restrictions;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotelBookingPatch {
    pub status: Option<BookingStatus>,
    pub special_requests: Option<String>,
}

impl HotelBookingPatch {
    fn apply(self, booking: &mut HotelBooking) {
        if let Some(status) = self.status {
            booking.status = status;
        }
        if self.special_requests.is_some() {
            booking.special_requests = self.special_requests;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealBookingPatch {
    pub status: Option<BookingStatus>,
    pub dietary_preferences: Option<String>,
}

impl MealBookingPatch {
    fn apply(self, booking: &mut MealBooking) {
        if let Some(status) = self.status {
            booking.status = status;
        }
        if self.dietary_preferences.is_some() {
            booking.dietary_preferences = self.dietary_preferences;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentPatch {
    pub status: Option<PaymentStatus>,
}

impl PaymentPatch {
    fn apply(self, payment: &mut Payment) {
        if let Some(status) = self.status {
            payment.status = status;
        }
    }
}

/// Process-wide state store, injected into every consumer
pub struct AppStore<K: KeyValueStore> {
    storage: Arc<K>,
    auth: Auth<K>,
    state: RwLock<AppState>,
}

impl<K: KeyValueStore> AppStore<K> {
    /// Read the session and all collections; absent or corrupt entries are empty
    pub async fn load(storage: Arc<K>) -> Self {
        let auth = Auth::new(Arc::clone(&storage));
        let state = AppState {
            session: auth.current_session().await,
            registrations: read_collection(storage.as_ref(), keys::REGISTRATIONS).await,
            hotel_bookings: read_collection(storage.as_ref(), keys::HOTEL_BOOKINGS).await,
            meal_bookings: read_collection(storage.as_ref(), keys::MEAL_BOOKINGS).await,
            payments: read_collection(storage.as_ref(), keys::PAYMENTS).await,
        };

        component_info!(
            Component::Store,
            "📦 Loaded {} registrations, {} hotel bookings, {} meal bookings, {} payments",
            state.registrations.len(),
            state.hotel_bookings.len(),
            state.meal_bookings.len(),
            state.payments.len()
        );

        Self {
            storage,
            auth,
            state: RwLock::new(state),
        }
    }

    pub fn auth(&self) -> &Auth<K> {
        &self.auth
    }

    /// Re-read the session from storage so every consumer sees login/logout
    pub async fn refresh_session(&self) -> Option<Session> {
        let session = self.auth.current_session().await;
        self.state.write().await.session = session.clone();
        component_debug!(
            Component::Store,
            "🔄 Session refreshed: {}",
            session.as_ref().map_or("none".to_string(), |s| s.player.id.to_string())
        );
        session
    }

    pub async fn current_session(&self) -> Option<Session> {
        self.state.read().await.session.clone()
    }

    /// The logged-in player, or `NotLoggedIn`
    pub async fn require_player(&self) -> PortalResult<Player> {
        self.state
            .read()
            .await
            .current_player()
            .cloned()
            .ok_or(PortalError::NotLoggedIn)
    }

    /// The logged-in admin, `Forbidden` for ordinary players
    pub async fn require_admin(&self) -> PortalResult<Player> {
        let state = self.state.read().await;
        match &state.session {
            Some(session) if session.is_admin => Ok(session.player.clone()),
            Some(_) => Err(PortalError::Forbidden),
            None => Err(PortalError::NotLoggedIn),
        }
    }

    pub async fn snapshot(&self) -> AppState {
        self.state.read().await.clone()
    }

    pub async fn registrations(&self) -> Vec<Registration> {
        self.state.read().await.registrations.clone()
    }

    pub async fn hotel_bookings(&self) -> Vec<HotelBooking> {
        self.state.read().await.hotel_bookings.clone()
    }

    pub async fn meal_bookings(&self) -> Vec<MealBooking> {
        self.state.read().await.meal_bookings.clone()
    }

    pub async fn payments(&self) -> Vec<Payment> {
        self.state.read().await.payments.clone()
    }

    pub async fn add_registration(&self, registration: Registration) -> PortalResult<()> {
        self.append(registration).await
    }

    pub async fn add_hotel_booking(&self, booking: HotelBooking) -> PortalResult<()> {
        self.append(booking).await
    }

    pub async fn add_meal_booking(&self, booking: MealBooking) -> PortalResult<()> {
        self.append(booking).await
    }

    pub async fn add_payment(&self, payment: Payment) -> PortalResult<()> {
        self.append(payment).await
    }

    /// Returns whether a registration with that id existed
    pub async fn update_registration(&self, id: &RecordId, patch: RegistrationPatch) -> PortalResult<bool> {
        self.update::<Registration, _>(id, |r| patch.apply(r)).await
    }

    pub async fn update_hotel_booking(&self, id: &RecordId, patch: HotelBookingPatch) -> PortalResult<bool> {
        self.update::<HotelBooking, _>(id, |b| patch.apply(b)).await
    }

    pub async fn update_meal_booking(&self, id: &RecordId, patch: MealBookingPatch) -> PortalResult<bool> {
        self.update::<MealBooking, _>(id, |b| patch.apply(b)).await
    }

    pub async fn update_payment(&self, id: &RecordId, patch: PaymentPatch) -> PortalResult<bool> {
        self.update::<Payment, _>(id, |p| patch.apply(p)).await
    }

    /// Append then rewrite the collection; the append is undone if the write fails
    async fn append<R: CollectionRecord>(&self, record: R) -> PortalResult<()> {
        if !self.auth.player_exists(record.player_id()).await {
            component_warn!(
                Component::Store,
                "⚠️ Rejected {} for unknown player {}",
                record.id(),
                record.player_id()
            );
            return Err(PortalError::UnknownPlayer {
                player_id: record.player_id().to_string(),
            });
        }

        let mut state = self.state.write().await;
        let collection = R::collection(&mut state);
        let record_id = record.id().clone();
        collection.push(record);

        if let Err(e) = write_collection(self.storage.as_ref(), R::KEY, collection).await {
            collection.pop();
            return Err(e);
        }

        component_debug!(Component::Store, "➕ Added {} to '{}' ({} total)", record_id, R::KEY, collection.len());
        Ok(())
    }

    async fn update<R, F>(&self, id: &RecordId, apply: F) -> PortalResult<bool>
    where
        R: CollectionRecord,
        F: FnOnce(&mut R) + Send,
    {
        let mut state = self.state.write().await;
        let collection = R::collection(&mut state);

        let Some(position) = collection.iter().position(|r| r.id() == id) else {
            component_debug!(Component::Store, "🔍 No record {} in '{}', update skipped", id, R::KEY);
            return Ok(false);
        };

        let previous = collection[position].clone();
        apply(&mut collection[position]);

        if let Err(e) = write_collection(self.storage.as_ref(), R::KEY, collection).await {
            collection[position] = previous;
            return Err(e);
        }

        component_debug!(Component::Store, "✏️ Updated {} in '{}'", id, R::KEY);
        Ok(true)
    }
}
