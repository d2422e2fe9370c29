//! Route handlers, grouped by the part of the portal they drive

pub mod api;
pub mod auth;
pub mod bookings;
pub mod dashboards;
