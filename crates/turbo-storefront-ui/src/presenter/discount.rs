//! Discount badge derivation.

use serde::{Deserialize, Serialize};

/// Smallest percentage shown on a discount badge.
pub const MIN_PERCENT_OFF: u32 = 1;
/// Largest percentage shown on a discount badge.
pub const MAX_PERCENT_OFF: u32 = 99;

/// Whether the spot price undercuts the list price, and by how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct DiscountState {
    pub has_discount: bool,
    /// Set only when `has_discount` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_off: Option<u32>,
}

impl DiscountState {
    pub fn none() -> Self {
        Self::default()
    }

    /// Badge text, e.g. "20% off".
    pub fn label(&self) -> Option<String> {
        self.percent_off.map(|p| format!("{}% off", p))
    }
}

/// Percent boundaries for the badge tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountThresholds {
    pub low: u32,
    pub high: u32,
}

impl Default for DiscountThresholds {
    fn default() -> Self {
        Self { low: 15, high: 40 }
    }
}

/// Visual weight of a discount badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountTier {
    Low,
    Medium,
    High,
}

impl DiscountTier {
    pub fn for_percent(percent_off: u32, thresholds: DiscountThresholds) -> Self {
        if percent_off <= thresholds.low {
            DiscountTier::Low
        } else if percent_off <= thresholds.high {
            DiscountTier::Medium
        } else {
            DiscountTier::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountTier::Low => "low",
            DiscountTier::Medium => "medium",
            DiscountTier::High => "high",
        }
    }
}

/// Compares list and spot prices.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountEvaluator;

impl DiscountEvaluator {
    /// A discount exists only when `spot_price < list_price` and the list
    /// price is a positive finite number.
    ///
    /// The percentage is `(list - spot) / list * 100` rounded half away from
    /// zero, then clamped into `1..=99` so a discounted card never shows
    /// "0% off" or "100% off".
    pub fn evaluate(list_price: f64, spot_price: f64) -> DiscountState {
        if !list_price.is_finite() || !spot_price.is_finite() || list_price <= 0.0 {
            return DiscountState::none();
        }
        if spot_price >= list_price {
            return DiscountState::none();
        }

        let raw = (list_price - spot_price) / list_price * 100.0;
        let percent_off = (raw.round() as u32).clamp(MIN_PERCENT_OFF, MAX_PERCENT_OFF);

        DiscountState {
            has_discount: true,
            percent_off: Some(percent_off),
        }
    }
}
