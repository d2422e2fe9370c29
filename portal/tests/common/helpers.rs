//! Builders and assertions that keep the portal tests short

use std::sync::Arc;
use std::time::Duration;

use portal::*;
use super::fixtures::TestFixtures;

/// Builder for portals backed by an in-memory store, with no checkout delay
pub struct PortalBuilder {
    storage: MemoryKeyValueStore,
    config: PortalConfig,
}

impl PortalBuilder {
    pub fn new() -> Self {
        Self {
            storage: MemoryKeyValueStore::new(),
            config: PortalConfig::default().with_checkout_phase_delay(Duration::ZERO),
        }
    }

    /// Share storage with another portal, as a restarted process would
    pub fn with_storage(mut self, storage: MemoryKeyValueStore) -> Self {
        self.storage = storage;
        self
    }

    pub fn storage(&self) -> MemoryKeyValueStore {
        self.storage.clone()
    }

    pub async fn build(self) -> Portal<MemoryKeyValueStore> {
        Portal::load(Arc::new(self.storage), self.config).await
    }
}

pub struct TestHelpers;

impl TestHelpers {
    pub fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    /// Register the standard player and book the standard hotel and meals
    pub async fn fully_booked_player(portal: &Portal<MemoryKeyValueStore>) -> RegistrationOutcome {
        let outcome = portal
            .register(&TestFixtures::registration_form(TestFixtures::PLAYER_EMAIL))
            .await
            .unwrap();
        portal.book_hotel(&TestFixtures::hotel_selection()).await.unwrap();
        portal.book_meals(&TestFixtures::meal_selection()).await.unwrap();
        outcome
    }

    pub async fn login_admin(portal: &Portal<MemoryKeyValueStore>) {
        let session = portal
            .login(TestFixtures::ADMIN_EMAIL, TestFixtures::ADMIN_PASSWORD)
            .await
            .unwrap();
        assert!(session.is_admin);
    }
}
