//! Webserver state management
//!
//! Handlers share one `WebServerState`: the portal handle plus what the
//! health endpoint reports.

use std::net::SocketAddr;
use std::time::Instant;

use portal::{KeyValueStore, Portal};

/// Shared handler state; cloning shares the underlying portal
pub struct WebServerState<K: KeyValueStore> {
    pub portal: Portal<K>,
    pub bind_address: SocketAddr,
    pub server_start_time: Instant,
}

impl<K: KeyValueStore> Clone for WebServerState<K> {
    fn clone(&self) -> Self {
        Self {
            portal: self.portal.clone(),
            bind_address: self.bind_address,
            server_start_time: self.server_start_time,
        }
    }
}

impl<K: KeyValueStore> WebServerState<K> {
    pub fn new(portal: Portal<K>, bind_address: SocketAddr) -> Self {
        Self {
            portal,
            bind_address,
            server_start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}
