//! Test utilities shared by unit and HTTP-level tests.
//!
//! This module provides:
//! - Fixed test secrets and token helpers
//! - Test data factories for job status fixtures
//! - A stub workflow processor and an `AppState` builder wired with it

mod app_state_builder;
mod factories;
mod workflow_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use workflow_mocks::*;
