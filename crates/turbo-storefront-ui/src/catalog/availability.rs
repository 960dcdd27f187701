//! schema.org item availability vocabulary.

use serde::{Deserialize, Serialize};

/// The only availability token treated as sellable.
pub const IN_STOCK_TOKEN: &str = "https://schema.org/InStock";

const SCHEMA_PREFIX: &str = "https://schema.org/";

/// Availability as published by the catalog.
///
/// Parsing is lossless for analytics and logging. Sellability is decided
/// separately and only [`Availability::InStock`] qualifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    InStock,
    OutOfStock,
    PreOrder,
    BackOrder,
    Discontinued,
    SoldOut,
    LimitedAvailability,
    InStoreOnly,
    OnlineOnly,
    /// Anything outside the vocabulary, including malformed tokens.
    Unknown,
}

impl Availability {
    /// Parse a full schema.org URI token. Matching is exact.
    pub fn from_token(token: &str) -> Self {
        let Some(name) = token.strip_prefix(SCHEMA_PREFIX) else {
            return Availability::Unknown;
        };
        match name {
            "InStock" => Availability::InStock,
            "OutOfStock" => Availability::OutOfStock,
            "PreOrder" => Availability::PreOrder,
            "BackOrder" => Availability::BackOrder,
            "Discontinued" => Availability::Discontinued,
            "SoldOut" => Availability::SoldOut,
            "LimitedAvailability" => Availability::LimitedAvailability,
            "InStoreOnly" => Availability::InStoreOnly,
            "OnlineOnly" => Availability::OnlineOnly,
            _ => Availability::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::InStock => "in_stock",
            Availability::OutOfStock => "out_of_stock",
            Availability::PreOrder => "pre_order",
            Availability::BackOrder => "back_order",
            Availability::Discontinued => "discontinued",
            Availability::SoldOut => "sold_out",
            Availability::LimitedAvailability => "limited_availability",
            Availability::InStoreOnly => "in_store_only",
            Availability::OnlineOnly => "online_only",
            Availability::Unknown => "unknown",
        }
    }
}
