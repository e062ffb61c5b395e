//! Localator library crate.
//!
//! This crate exposes the earnings/viability calculation engine and
//! its API components as reusable modules.  External applications may
//! depend on the `localator` crate and call `engine::calculate`
//! directly, or embed the HTTP surface via `api::build_router`.

pub mod api;
pub mod engine;
pub mod models;
pub mod policy;

pub use engine::{calculate, calculate_with_policy, compare};
pub use models::{CalculationInputs, CalculationResult, RevenueMode, Viability};
pub use policy::ViabilityPolicy;
