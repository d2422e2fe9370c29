//! Shared logging utilities for consistent tracing across the portal

use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{error, info};

/// Portal component an event originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Storage,
    Store,
    Auth,
    Registration,
    Hotel,
    Meals,
    Checkout,
    Dashboard,
    WebServer,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Storage => "storage",
            Component::Store => "store",
            Component::Auth => "auth",
            Component::Registration => "registration",
            Component::Hotel => "hotel",
            Component::Meals => "meals",
            Component::Checkout => "checkout",
            Component::Dashboard => "dashboard",
            Component::WebServer => "webserver",
        };
        f.write_str(name)
    }
}

/// Build the `EnvFilter` directive string for a base level
pub fn filter_directives(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("portal={base_level},webserver={base_level},shared={base_level},tower_http=debug,axum={base_level}")
}

/// Initialize tracing subscriber with an optional log level
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let directives = filter_directives(log_level);

    let _ = fmt()
        .with_env_filter(EnvFilter::new(&directives))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Initialize tracing at the default level
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for component-aware info logging
#[macro_export]
macro_rules! component_info {
    ($component:expr, $($arg:tt)*) => {
        tracing::info!(
            component = %$component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware warning logging
#[macro_export]
macro_rules! component_warn {
    ($component:expr, $($arg:tt)*) => {
        tracing::warn!(
            component = %$component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware error logging
#[macro_export]
macro_rules! component_error {
    ($component:expr, $($arg:tt)*) => {
        tracing::error!(
            component = %$component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware debug logging
#[macro_export]
macro_rules! component_debug {
    ($component:expr, $($arg:tt)*) => {
        tracing::debug!(
            component = %$component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: Component, details: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(component: Component, reason: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(component: Component, context: &str, error: &dyn std::fmt::Display) {
    error!(
        component = %component,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(component: Component, message: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_display() {
        assert_eq!(Component::Store.to_string(), "store");
        assert_eq!(Component::WebServer.to_string(), "webserver");
        assert_eq!(Component::Checkout.to_string(), "checkout");
    }

    #[test]
    fn test_filter_directives_use_level() {
        let directives = filter_directives(Some("debug"));
        assert!(directives.contains("portal=debug"));
        assert!(directives.contains("webserver=debug"));
        assert_eq!(filter_directives(None), filter_directives(Some("info")));
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing_with_level(Some("warn"));
        init_tracing();
    }
}
