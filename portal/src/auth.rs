//! Demo authentication
//!
//! Credentials resolve to a player identity and the result is persisted as
//! the single current-session record. There is no real verification: the
//! admin pair is hard-coded and any other credentials log in, fabricating a
//! guest player when the email is unknown. Login therefore only fails when
//! storage itself fails.

use std::sync::Arc;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::error::PortalResult;
use crate::services::collections::{read_collection, read_document, write_collection, write_document};
use crate::traits::KeyValueStore;
use shared::{
    component_info, keys, Component, EmergencyContact, Gender, Player, PlayerProfile, RecordId,
    RecordKind, Session,
};

pub const ADMIN_EMAIL: &str = "admin@tournament.com";
pub const ADMIN_PASSWORD: &str = "admin123";
/// Id of the synthetic admin identity; it never appears in the player directory
pub const ADMIN_ID: &str = "admin";

/// Credential resolution and session persistence
pub struct Auth<K: KeyValueStore> {
    store: Arc<K>,
    /// Held across every read-modify-write of the player directory and session
    writes: Arc<Mutex<()>>,
}

impl<K: KeyValueStore> Clone for Auth<K> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            writes: Arc::clone(&self.writes),
        }
    }
}

impl<K: KeyValueStore> Auth<K> {
    pub fn new(store: Arc<K>) -> Self {
        Self {
            store,
            writes: Arc::new(Mutex::new(())),
        }
    }

    /// Resolve credentials to a session; never rejects credentials
    pub async fn login(&self, email: &str, password: &str) -> PortalResult<Session> {
        let _guard = self.writes.lock().await;

        if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            let session = Session { player: admin_player(), is_admin: true };
            self.save_session(&session).await?;
            component_info!(Component::Auth, "🔑 Admin logged in");
            return Ok(session);
        }

        let mut players = self.players().await;
        let player = match players.iter().find(|p| p.email == email) {
            Some(existing) => existing.clone(),
            None => {
                let guest = guest_player(email);
                players.push(guest.clone());
                write_collection(self.store.as_ref(), keys::PLAYERS, &players).await?;
                component_info!(Component::Auth, "👤 Created guest player {} for {}", guest.id, email);
                guest
            }
        };

        let session = Session { player, is_admin: false };
        self.save_session(&session).await?;
        component_info!(Component::Auth, "🔑 Player {} logged in", session.player.id);
        Ok(session)
    }

    /// Create a player from profile fields and log them in
    pub async fn register(&self, profile: PlayerProfile) -> PortalResult<Player> {
        let player = profile.into_player(RecordId::generate(RecordKind::Player), Utc::now());

        let _guard = self.writes.lock().await;
        let mut players = self.players().await;
        players.push(player.clone());
        write_collection(self.store.as_ref(), keys::PLAYERS, &players).await?;

        self.save_session(&Session { player: player.clone(), is_admin: false }).await?;
        component_info!(Component::Auth, "📝 Registered player {} ({})", player.id, player.email);
        Ok(player)
    }

    /// Clear the session record only; players and bookings stay
    pub async fn logout(&self) -> PortalResult<()> {
        let _guard = self.writes.lock().await;
        self.store.remove(keys::SESSION).await?;
        component_info!(Component::Auth, "👋 Logged out");
        Ok(())
    }

    pub async fn current_session(&self) -> Option<Session> {
        read_document(self.store.as_ref(), keys::SESSION).await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current_session().await.is_some()
    }

    pub async fn is_admin(&self) -> bool {
        self.current_session().await.is_some_and(|s| s.is_admin)
    }

    /// The persisted player directory
    pub async fn players(&self) -> Vec<Player> {
        read_collection(self.store.as_ref(), keys::PLAYERS).await
    }

    pub async fn find_player(&self, player_id: &RecordId) -> Option<Player> {
        self.players().await.into_iter().find(|p| &p.id == player_id)
    }

    /// Whether bookings may reference this id
    pub async fn player_exists(&self, player_id: &RecordId) -> bool {
        player_id.as_str() == ADMIN_ID || self.find_player(player_id).await.is_some()
    }

    async fn save_session(&self, session: &Session) -> PortalResult<()> {
        write_document(self.store.as_ref(), keys::SESSION, session).await
    }
}

fn blank_player(id: RecordId, email: &str, name: String) -> Player {
    Player {
        id,
        email: email.to_string(),
        name,
        phone: String::new(),
        date_of_birth: String::new(),
        gender: Gender::Other,
        team_name: None,
        club_name: None,
        coach_name: None,
        emergency_contact: EmergencyContact::default(),
        created_at: Utc::now(),
    }
}

fn admin_player() -> Player {
    blank_player(RecordId::from(ADMIN_ID), ADMIN_EMAIL, "Admin User".to_string())
}

fn guest_player(email: &str) -> Player {
    let local_part = email.split('@').next().unwrap_or_default();
    let name = if local_part.is_empty() {
        "Guest User".to_string()
    } else {
        local_part.to_string()
    };
    blank_player(RecordId::generate(RecordKind::Guest), email, name)
}
