//! HTTP layer: route handlers and extractors

pub mod extract;
pub mod handlers;
