//! Portal facade
//!
//! Bundles the state store, the catalog and the configuration behind one
//! handle so the web layer calls a single object per operation. Everything
//! here delegates to the flows and dashboards; the facade only keeps the
//! cached session in step with login and logout.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::config::PortalConfig;
use crate::core::catalog::Catalog;
use crate::core::dashboard::{self, AdminDashboard, PlayerDashboard};
use crate::error::PortalResult;
use crate::flows::{
    checkout, hotel, meals, registration, BookingOutcome, CheckoutPhase, CheckoutSummary, HotelQuote,
    HotelSelection, MealQuote, MealSelection, PaymentDetails, RegistrationForm, RegistrationOutcome,
};
use crate::services::FileKeyValueStore;
use crate::store::{AppStore, HotelBookingPatch, MealBookingPatch, PaymentPatch, RegistrationPatch};
use crate::traits::KeyValueStore;
use shared::{component_info, Component, HotelBooking, MealBooking, Payment, RecordId, Session};

pub struct Portal<K: KeyValueStore> {
    store: Arc<AppStore<K>>,
    catalog: Arc<Catalog>,
    config: PortalConfig,
}

impl<K: KeyValueStore> Clone for Portal<K> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            catalog: Arc::clone(&self.catalog),
            config: self.config.clone(),
        }
    }
}

impl Portal<FileKeyValueStore> {
    /// Portal persisted under the configured data directory
    pub async fn open(config: PortalConfig) -> PortalResult<Self> {
        let storage = FileKeyValueStore::open(config.data_dir.clone()).await?;
        Ok(Self::load(Arc::new(storage), config).await)
    }
}

impl<K: KeyValueStore> Portal<K> {
    pub async fn load(storage: Arc<K>, config: PortalConfig) -> Self {
        let store = AppStore::load(storage).await;
        component_info!(
            Component::Store,
            "🏁 Portal ready (checkout phase delay {:?})",
            config.checkout_phase_delay
        );

        Self {
            store: Arc::new(store),
            catalog: Arc::new(Catalog::standard()),
            config,
        }
    }

    pub fn store(&self) -> &AppStore<K> {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub async fn login(&self, email: &str, password: &str) -> PortalResult<Session> {
        let session = self.store.auth().login(email, password).await?;
        self.store.refresh_session().await;
        Ok(session)
    }

    pub async fn logout(&self) -> PortalResult<()> {
        self.store.auth().logout().await?;
        self.store.refresh_session().await;
        Ok(())
    }

    pub async fn current_session(&self) -> Option<Session> {
        self.store.current_session().await
    }

    pub async fn register(&self, form: &RegistrationForm) -> PortalResult<RegistrationOutcome> {
        registration::submit(&self.store, form).await
    }

    pub fn hotel_quote(&self, selection: &HotelSelection) -> PortalResult<HotelQuote> {
        hotel::quote(&self.catalog, selection)
    }

    pub async fn book_hotel(&self, selection: &HotelSelection) -> PortalResult<BookingOutcome<HotelBooking>> {
        hotel::book(&self.store, &self.catalog, selection).await
    }

    pub fn meal_quote(&self, selection: &MealSelection) -> PortalResult<MealQuote> {
        meals::quote(&self.catalog, selection)
    }

    pub async fn book_meals(&self, selection: &MealSelection) -> PortalResult<BookingOutcome<MealBooking>> {
        meals::book(&self.store, &self.catalog, selection).await
    }

    pub async fn checkout_summary(&self) -> PortalResult<CheckoutSummary> {
        checkout::summary(&self.store).await
    }

    /// Pay with the configured phase delay
    pub async fn checkout(
        &self,
        details: &PaymentDetails,
        progress: Option<mpsc::Sender<CheckoutPhase>>,
    ) -> PortalResult<BookingOutcome<Payment>> {
        checkout::pay(&self.store, details, self.config.checkout_phase_delay, progress).await
    }

    pub async fn player_dashboard(&self) -> PortalResult<PlayerDashboard> {
        dashboard::player_dashboard(&self.store).await
    }

    pub async fn admin_dashboard(&self) -> PortalResult<AdminDashboard> {
        dashboard::admin_dashboard(&self.store).await
    }

    /// Admin-only; `Ok(false)` when no registration has that id
    pub async fn update_registration(&self, id: &RecordId, patch: RegistrationPatch) -> PortalResult<bool> {
        self.store.require_admin().await?;
        self.store.update_registration(id, patch).await
    }

    pub async fn update_hotel_booking(&self, id: &RecordId, patch: HotelBookingPatch) -> PortalResult<bool> {
        self.store.require_admin().await?;
        self.store.update_hotel_booking(id, patch).await
    }

    pub async fn update_meal_booking(&self, id: &RecordId, patch: MealBookingPatch) -> PortalResult<bool> {
        self.store.require_admin().await?;
        self.store.update_meal_booking(id, patch).await
    }

    pub async fn update_payment(&self, id: &RecordId, patch: PaymentPatch) -> PortalResult<bool> {
        self.store.require_admin().await?;
        self.store.update_payment(id, patch).await
    }
}
