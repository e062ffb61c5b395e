//! HTTP API for the Localator engine.
//!
//! This module exposes a minimal REST API around the calculation
//! engine using the [`axum`](https://crates.io/crates/axum)
//! framework.  Clients submit engagement inputs and receive the full
//! profit breakdown in JSON.  The active viability policy is shared
//! application state, loaded once at startup from an optional JSON
//! file so deployments can retune the verdict thresholds without a
//! rebuild.
//!
//! Calculation handlers cannot fail: the engine is total over its
//! numeric domain, so the only rejections a client will see are
//! axum's own for malformed JSON.

use crate::engine::{calculate_with_policy, compare};
use crate::models::{CalculationInputs, CalculationResult};
use crate::policy::{load_policy_from_file, ViabilityPolicy};
use anyhow::Result;
use axum::{extract::State, routing::get, routing::post, Json, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state shared across requests.
pub struct AppState {
    pub policy: RwLock<ViabilityPolicy>,
}

/// Builds the API router, initialising the viability policy from the
/// given file if one was supplied.  Returns the router and a handle
/// to the state.
pub fn build_router(policy_file: Option<PathBuf>) -> Result<(Router, Arc<AppState>)> {
    let policy = match policy_file {
        Some(path) => load_policy_from_file(&path)?,
        None => ViabilityPolicy::default(),
    };
    let state = Arc::new(AppState {
        policy: RwLock::new(policy),
    });
    let router = Router::new()
        .route("/api/calculate", post(calculate_handler))
        .route("/api/compare", post(compare_handler))
        .route("/api/policy", get(policy_handler))
        .with_state(state.clone());
    Ok((router, state))
}

/// Handler for POST /api/calculate
async fn calculate_handler(
    State(app_state): State<Arc<AppState>>,
    Json(inputs): Json<CalculationInputs>,
) -> Json<CalculationResult> {
    let policy = app_state.policy.read().await;
    Json(calculate_with_policy(&inputs, &policy))
}

/// Handler for POST /api/compare
async fn compare_handler(
    State(app_state): State<Arc<AppState>>,
    Json(candidates): Json<Vec<CalculationInputs>>,
) -> Json<Vec<CalculationResult>> {
    let policy = app_state.policy.read().await;
    Json(compare(&candidates, &policy))
}

/// Handler for GET /api/policy
async fn policy_handler(State(app_state): State<Arc<AppState>>) -> Json<ViabilityPolicy> {
    let policy = app_state.policy.read().await;
    Json(*policy)
}

/// Launches the API server.  Builds the router from the optional
/// policy file, binds to the supplied address and blocks until the
/// server terminates.
pub async fn serve(addr: &str, policy_file: Option<PathBuf>) -> Result<()> {
    let (router, _state) = build_router(policy_file)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Server listening on {}", addr);
    axum::serve(listener, router).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Viability;

    #[tokio::test]
    async fn calculate_handler_applies_shared_policy() {
        let state = Arc::new(AppState {
            policy: RwLock::new(ViabilityPolicy::default()),
        });
        let inputs = CalculationInputs::from_rate_and_hours(100.0, 20.0, 5.0, 0.0, 20.0);
        let Json(result) = calculate_handler(State(state), Json(inputs)).await;
        assert_eq!(result.net_profit, 1520.0);
        assert_eq!(result.viability, Viability::Medium);
    }

    #[tokio::test]
    async fn compare_handler_returns_one_result_per_candidate() {
        let state = Arc::new(AppState {
            policy: RwLock::new(ViabilityPolicy::default()),
        });
        let candidates = vec![
            CalculationInputs::from_rate_and_hours(85.0, 40.0, 15.0, 150.0, 25.0),
            CalculationInputs::from_fixed_budget(500.0, 100.0, 10.0, 15.0, 600.0, 25.0),
        ];
        let Json(results) = compare_handler(State(state), Json(candidates)).await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].net_profit, -131.25);
    }

    #[test]
    fn build_router_defaults_policy_when_no_file_given() {
        let (_router, state) = build_router(None).unwrap();
        let policy = state.policy.blocking_read();
        assert_eq!(*policy, ViabilityPolicy::default());
    }
}
