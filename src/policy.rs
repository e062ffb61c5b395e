//! Viability classification policy.
//!
//! The `policy` module owns the thresholds that turn an effective
//! hourly rate into a three-way verdict.  The source screens this
//! engine replaces disagreed on the exact cut points, so the
//! thresholds live in a named, serialisable struct rather than as
//! magic numbers inside the arithmetic: a product owner can retune
//! them from a JSON file without touching the engine.

use crate::models::Viability;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ratio of effective to target rate below which a deal is `Low`.
pub const DEFAULT_LOW_CUTOFF: f64 = 0.75;
/// Ratio of effective to target rate at or above which a deal is `High`.
pub const DEFAULT_HIGH_CUTOFF: f64 = 1.25;

/// The two cut points for the viability verdict.
///
/// The verdict compares `effective_hourly_rate / hourly_rate` against
/// these ratios: below `low_cutoff` the deal is [`Viability::Low`],
/// at or above `high_cutoff` it is [`Viability::High`], and anything
/// between is [`Viability::Medium`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViabilityPolicy {
    pub low_cutoff: f64,
    pub high_cutoff: f64,
}

impl Default for ViabilityPolicy {
    fn default() -> Self {
        ViabilityPolicy {
            low_cutoff: DEFAULT_LOW_CUTOFF,
            high_cutoff: DEFAULT_HIGH_CUTOFF,
        }
    }
}

impl ViabilityPolicy {
    /// Classifies an engagement by comparing its effective hourly
    /// rate against the professional's target rate.
    ///
    /// A zero target rate yields a ratio of zero, and hence the
    /// lowest tier, rather than a division by zero.  Negative
    /// effective rates (loss-making engagements) produce a negative
    /// ratio and land in the lowest tier the same way.
    pub fn classify(&self, effective_hourly_rate: f64, hourly_rate: f64) -> Viability {
        let ratio = if hourly_rate == 0.0 {
            0.0
        } else {
            effective_hourly_rate / hourly_rate
        };
        if ratio < self.low_cutoff {
            Viability::Low
        } else if ratio < self.high_cutoff {
            Viability::Medium
        } else {
            Viability::High
        }
    }
}

/// Loads a [`ViabilityPolicy`] from a JSON file.
///
/// The file is expected to contain an object with `low_cutoff` and
/// `high_cutoff` fields, e.g. `{"low_cutoff": 0.7, "high_cutoff": 1.2}`.
pub fn load_policy_from_file(path: &Path) -> Result<ViabilityPolicy> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read policy file {:?}", path))?;
    let policy = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse policy file {:?}", path))?;
    Ok(policy)
}
