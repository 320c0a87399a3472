//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mocks share their state through `Arc<RwLock<..>>` so a test can keep
//! a handle after moving the mock into the renderer.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
