//! Stock classification.

use serde::{Deserialize, Serialize};

use crate::catalog::IN_STOCK_TOKEN;

/// Whether a card may be presented as sellable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockState {
    InStock,
    OutOfStock,
}

impl StockState {
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, StockState::OutOfStock)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockState::InStock => "in_stock",
            StockState::OutOfStock => "out_of_stock",
        }
    }
}

/// Maps availability tokens to [`StockState`].
///
/// Default-deny: only the exact in-stock token is sellable.
#[derive(Debug, Clone, Copy, Default)]
pub struct StockEvaluator;

impl StockEvaluator {
    pub fn evaluate(availability: &str) -> StockState {
        if availability == IN_STOCK_TOKEN {
            StockState::InStock
        } else {
            StockState::OutOfStock
        }
    }
}
