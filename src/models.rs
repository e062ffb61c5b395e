//! Data models for the Localator engine.
//!
//! The `models` module defines the serialisable structs and enums
//! representing a candidate engagement (the inputs a freelancer keys
//! into the calculator) and the derived profit breakdown.  These data
//! types derive `Serialize` and `Deserialize` so they can be accepted
//! and returned over the JSON API unchanged.  Both are transient value
//! objects: constructed fresh per calculation call, never mutated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How gross revenue is derived from the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueMode {
    /// Gross revenue is `hourly_rate * expected_hours`.
    RateBased,
    /// Gross revenue is the quoted `fixed_budget`; `hourly_rate` is
    /// still used as the reference rate for the viability verdict.
    FixedBudget,
}

/// The marketplace's membership tiers and the platform fee each one
/// carries.  The calculator screens preset `platform_fee_percent`
/// from the professional's active tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformTier {
    Garage,
    Community,
    Global,
}

impl PlatformTier {
    /// The platform fee retained from gross revenue at this tier,
    /// as a whole-number percentage.
    pub fn fee_percent(&self) -> f64 {
        match self {
            PlatformTier::Garage => 15.0,
            PlatformTier::Community => 10.0,
            PlatformTier::Global => 5.0,
        }
    }
}

/// A freelancer's rate assumptions for one candidate engagement.
///
/// All percentage fields are whole-number percentages (`15` means
/// 15%), not fractions.  The engine deliberately performs no
/// validation or clamping on these fields: partial or out-of-range
/// values are the normal transient state while a user is mid-edit,
/// and they propagate arithmetically.  Callers that want range
/// checking invoke [`CalculationInputs::validate`] themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInputs {
    /// Selects between rate-by-hours and fixed-budget revenue.
    pub revenue_mode: RevenueMode,
    /// The professional's target rate (currency per hour).  In
    /// `RateBased` mode it drives gross revenue; in both modes it is
    /// the reference rate the viability verdict compares against.
    pub hourly_rate: f64,
    /// Hours the engagement is expected to take.
    pub expected_hours: f64,
    /// Total contract value in `FixedBudget` mode.  Ignored in
    /// `RateBased` mode and may be omitted from JSON payloads.
    #[serde(default)]
    pub fixed_budget: f64,
    /// Percentage of gross revenue retained by the platform.
    pub platform_fee_percent: f64,
    /// Flat, revenue-independent operating costs (software, gear).
    pub tool_costs: f64,
    /// Estimated tax rate, applied to profit after fees and tool
    /// costs rather than to gross receipts.
    pub tax_rate_percent: f64,
}

impl CalculationInputs {
    /// Builds inputs for a rate-by-hours engagement.
    pub fn from_rate_and_hours(
        hourly_rate: f64,
        expected_hours: f64,
        platform_fee_percent: f64,
        tool_costs: f64,
        tax_rate_percent: f64,
    ) -> Self {
        CalculationInputs {
            revenue_mode: RevenueMode::RateBased,
            hourly_rate,
            expected_hours,
            fixed_budget: 0.0,
            platform_fee_percent,
            tool_costs,
            tax_rate_percent,
        }
    }

    /// Builds inputs for a fixed-budget engagement.  `hourly_rate`
    /// and `expected_hours` still matter: they feed the effective
    /// hourly rate and the viability comparison.
    pub fn from_fixed_budget(
        fixed_budget: f64,
        hourly_rate: f64,
        expected_hours: f64,
        platform_fee_percent: f64,
        tool_costs: f64,
        tax_rate_percent: f64,
    ) -> Self {
        CalculationInputs {
            revenue_mode: RevenueMode::FixedBudget,
            hourly_rate,
            expected_hours,
            fixed_budget,
            platform_fee_percent,
            tool_costs,
            tax_rate_percent,
        }
    }

    /// Range-checks the inputs.  This is a separate step from the
    /// calculation itself: a UI typically calls it to decorate form
    /// fields while still feeding the raw values to the engine for a
    /// live preview.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("hourly_rate", self.hourly_rate),
            ("expected_hours", self.expected_hours),
            ("fixed_budget", self.fixed_budget),
            ("platform_fee_percent", self.platform_fee_percent),
            ("tool_costs", self.tool_costs),
            ("tax_rate_percent", self.tax_rate_percent),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ValidationError::NotFinite { field: name });
            }
            if value < 0.0 {
                return Err(ValidationError::Negative { field: name, value });
            }
        }
        if self.platform_fee_percent >= 100.0 {
            return Err(ValidationError::PercentOutOfRange {
                field: "platform_fee_percent",
                value: self.platform_fee_percent,
            });
        }
        if self.tax_rate_percent >= 100.0 {
            return Err(ValidationError::PercentOutOfRange {
                field: "tax_rate_percent",
                value: self.tax_rate_percent,
            });
        }
        Ok(())
    }
}

/// Why a set of inputs failed [`CalculationInputs::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be a percentage below 100 (got {value})")]
    PercentOutOfRange { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

/// The qualitative verdict on whether an engagement is worth taking
/// at the quoted terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viability {
    /// Effective pay has dropped too far below the target rate once
    /// fees, costs and taxes are accounted for.  Avoid.
    Low,
    /// Effective rate is within a reasonable band of the target rate.
    Medium,
    /// The engagement significantly exceeds the target rate after
    /// all deductions.
    High,
}

impl Viability {
    /// A templated advisory string for this tier.  Presentation glue
    /// for callers that want a ready-made message next to the badge;
    /// the verdict itself is the contract.
    pub fn advice(&self) -> &'static str {
        match self {
            Viability::Low => {
                "Warning: fees and taxes are consuming too much of your revenue. \
                 Consider raising your rate or billing tool costs separately."
            }
            Viability::Medium => {
                "Standard freelance margin. Ensure you track billable hours accurately."
            }
            Viability::High => {
                "Excellent. You are retaining a high percentage of your gross revenue."
            }
        }
    }
}

/// The full profit breakdown derived from one [`CalculationInputs`].
///
/// Recomputed from scratch on every input change; there is no
/// incremental state or caching.  Every field is always populated and
/// always finite (the engine guards its two divisions), so the struct
/// serialises cleanly for downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Total contract value before any deductions.
    pub gross_revenue: f64,
    /// The marketplace's cut of gross revenue.
    pub platform_fees: f64,
    /// Gross revenue minus platform fees minus tool costs.  May be
    /// negative on a loss-making engagement.
    pub net_before_tax: f64,
    /// Estimated taxes on `net_before_tax`.  Negative when the base
    /// is negative, i.e. a credit in this simplified model.
    pub taxes: f64,
    /// What the professional actually keeps.
    pub net_profit: f64,
    /// Net profit divided by expected hours; `0` when no hours were
    /// quoted.
    pub effective_hourly_rate: f64,
    /// Net profit as a percentage of gross revenue; `0` when gross
    /// revenue is zero.
    pub profit_margin_percent: f64,
    /// The three-way verdict, see [`Viability`].
    pub viability: Viability,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_fee_mapping() {
        assert_eq!(PlatformTier::Garage.fee_percent(), 15.0);
        assert_eq!(PlatformTier::Community.fee_percent(), 10.0);
        assert_eq!(PlatformTier::Global.fee_percent(), 5.0);
    }

    #[test]
    fn rate_based_payload_may_omit_fixed_budget() {
        let inputs: CalculationInputs = serde_json::from_str(
            r#"{
                "revenue_mode": "rate_based",
                "hourly_rate": 85.0,
                "expected_hours": 40.0,
                "platform_fee_percent": 15.0,
                "tool_costs": 150.0,
                "tax_rate_percent": 25.0
            }"#,
        )
        .unwrap();
        assert_eq!(inputs.revenue_mode, RevenueMode::RateBased);
        assert_eq!(inputs.fixed_budget, 0.0);
    }

    #[test]
    fn viability_serialises_lowercase() {
        assert_eq!(serde_json::to_string(&Viability::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::from_str::<Viability>("\"medium\"").unwrap(),
            Viability::Medium
        );
    }

    #[test]
    fn validate_accepts_ordinary_inputs() {
        let inputs = CalculationInputs::from_rate_and_hours(85.0, 40.0, 15.0, 150.0, 25.0);
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_rate() {
        let inputs = CalculationInputs::from_rate_and_hours(-1.0, 40.0, 15.0, 0.0, 25.0);
        assert_eq!(
            inputs.validate(),
            Err(ValidationError::Negative {
                field: "hourly_rate",
                value: -1.0
            })
        );
    }

    #[test]
    fn validate_rejects_full_percentage() {
        let inputs = CalculationInputs::from_rate_and_hours(85.0, 40.0, 100.0, 0.0, 25.0);
        assert!(matches!(
            inputs.validate(),
            Err(ValidationError::PercentOutOfRange {
                field: "platform_fee_percent",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_nan() {
        let inputs = CalculationInputs::from_rate_and_hours(f64::NAN, 40.0, 15.0, 0.0, 25.0);
        assert_eq!(
            inputs.validate(),
            Err(ValidationError::NotFinite { field: "hourly_rate" })
        );
    }
}
