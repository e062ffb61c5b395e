//! Earnings computation engine.
//!
//! The `engine` module turns a [`CalculationInputs`] into a
//! [`CalculationResult`]: a single linear arithmetic pipeline with no
//! branching beyond the revenue-mode selection and two division
//! guards.  The function is pure and total over finite numeric
//! inputs: it performs no I/O, reads no external state, never panics
//! and never returns a partial result, so callers may invoke it on
//! every keystroke of a live-editing form without coordination.
//! Batch comparison of several candidate engagements is parallelised
//! with [`rayon`].
//!
//! Out-of-domain values (a negative rate, a fee above 100%) are not
//! rejected here; they propagate arithmetically.  Range checking is
//! the caller's concern, via [`CalculationInputs::validate`].

use crate::models::{CalculationInputs, CalculationResult, RevenueMode};
use crate::policy::ViabilityPolicy;
use rayon::prelude::*;

/// Computes the full profit breakdown for one engagement using the
/// default viability policy.
pub fn calculate(inputs: &CalculationInputs) -> CalculationResult {
    calculate_with_policy(inputs, &ViabilityPolicy::default())
}

/// Computes the full profit breakdown for one engagement, classifying
/// viability with the supplied policy.
pub fn calculate_with_policy(
    inputs: &CalculationInputs,
    policy: &ViabilityPolicy,
) -> CalculationResult {
    let gross_revenue = match inputs.revenue_mode {
        RevenueMode::RateBased => inputs.hourly_rate * inputs.expected_hours,
        RevenueMode::FixedBudget => inputs.fixed_budget,
    };
    let platform_fees = gross_revenue * inputs.platform_fee_percent / 100.0;
    // May go negative on a loss-making deal; downstream steps must see
    // the loss, so no clamping.
    let net_before_tax = gross_revenue - platform_fees - inputs.tool_costs;
    // Taxes apply to net business income, not gross receipts.  A
    // negative base yields a negative tax, a credit in this model.
    let taxes = net_before_tax * inputs.tax_rate_percent / 100.0;
    let net_profit = net_before_tax - taxes;

    let effective_hourly_rate = if inputs.expected_hours > 0.0 {
        net_profit / inputs.expected_hours
    } else {
        0.0
    };
    let profit_margin_percent = if gross_revenue > 0.0 {
        (net_profit / gross_revenue) * 100.0
    } else {
        0.0
    };
    let viability = policy.classify(effective_hourly_rate, inputs.hourly_rate);

    CalculationResult {
        gross_revenue,
        platform_fees,
        net_before_tax,
        taxes,
        net_profit,
        effective_hourly_rate,
        profit_margin_percent,
        viability,
    }
}

/// Evaluates several candidate engagements side by side.
///
/// Results come back in input order.  Each calculation is independent,
/// so the batch is spread across CPU cores.
pub fn compare(inputs: &[CalculationInputs], policy: &ViabilityPolicy) -> Vec<CalculationResult> {
    inputs
        .par_iter()
        .map(|i| calculate_with_policy(i, policy))
        .collect()
}
