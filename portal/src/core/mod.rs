//! Pure domain logic: catalog, pricing and dashboard views

pub mod catalog;
pub mod dashboard;
pub mod pricing;

pub use catalog::{Catalog, CURRENCY, REGISTRATION_FEE};
pub use dashboard::{AdminDashboard, PlayerDashboard, RecordCounts};
pub use pricing::CheckoutTotals;
