//! Main webserver implementation
//!
//! Wires the portal into an axum router and serves it until a shutdown
//! signal arrives.

use std::net::SocketAddr;
use axum::{
    routing::{get, patch, post},
    Router,
};
use tokio::sync::mpsc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use portal::{KeyValueStore, Portal};
use shared::{component_info, logging, Component};

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::web::handlers::{api, auth, bookings, dashboards};

/// JSON API server over one portal
pub struct WebServer<K: KeyValueStore> {
    state: WebServerState<K>,
    shutdown_tx: mpsc::Sender<()>,
    shutdown_rx: Option<mpsc::Receiver<()>>,
}

impl<K: KeyValueStore + 'static> WebServer<K> {
    pub fn new(portal: Portal<K>, bind_address: SocketAddr) -> Self {
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        Self {
            state: WebServerState::new(portal, bind_address),
            shutdown_tx,
            shutdown_rx: Some(shutdown_rx),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Health check
            .route("/health", get(api::health_check::<K>))
            .route("/api/catalog", get(api::get_catalog::<K>))
            // Session
            .route("/api/auth/login", post(auth::login::<K>))
            .route("/api/auth/logout", post(auth::logout::<K>))
            .route("/api/auth/session", get(auth::get_session::<K>))
            // Booking flows
            .route("/api/register", post(bookings::register::<K>))
            .route("/api/hotel/quote", post(bookings::quote_hotel::<K>))
            .route("/api/hotel/bookings", post(bookings::book_hotel::<K>))
            .route("/api/meals/quote", post(bookings::quote_meals::<K>))
            .route("/api/meals/bookings", post(bookings::book_meals::<K>))
            .route(
                "/api/checkout",
                get(bookings::checkout_summary::<K>).post(bookings::checkout::<K>),
            )
            // Dashboards
            .route("/api/dashboard", get(dashboards::player_dashboard::<K>))
            .route("/api/admin", get(dashboards::admin_dashboard::<K>))
            .route("/api/admin/registrations/:id", patch(dashboards::update_registration::<K>))
            .route("/api/admin/hotel-bookings/:id", patch(dashboards::update_hotel_booking::<K>))
            .route("/api/admin/meal-bookings/:id", patch(dashboards::update_meal_booking::<K>))
            .route("/api/admin/payments/:id", patch(dashboards::update_payment::<K>))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.state.clone())
    }

    /// Sender that stops `run` when signalled
    pub fn get_shutdown_sender(&self) -> mpsc::Sender<()> {
        self.shutdown_tx.clone()
    }

    /// Serve until the shutdown sender fires
    pub async fn run(&mut self) -> WebServerResult<()> {
        let router = self.build_router();
        let bind_address = self.state.bind_address;
        let mut shutdown_rx = self
            .shutdown_rx
            .take()
            .ok_or_else(|| WebServerError::ServerStartup("server already running".to_string()))?;

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {}: {}", bind_address, e)))?;

        logging::log_startup(Component::WebServer, &format!("portal API on http://{}", bind_address));

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown_rx.recv().await;
            })
            .await?;

        component_info!(Component::WebServer, "🛑 HTTP server stopped");
        Ok(())
    }

    pub fn state(&self) -> &WebServerState<K> {
        &self.state
    }
}
