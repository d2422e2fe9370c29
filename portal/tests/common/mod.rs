//! Common test utilities shared by the portal test suites

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{PortalBuilder, TestHelpers};
