//! Webserver library for the tournament portal
//!
//! Exposes the portal's flows and dashboards as a JSON API.

pub mod error;
pub mod state;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use types::*;
pub use webserver_impl::WebServer;
