//! Display price selection.

use serde::{Deserialize, Serialize};

use crate::catalog::{Offer, OfferAggregate};

/// Position of the offer used for list price and availability.
///
/// Listing cards do not compare sellers; they read a single canonical offer.
pub const CANONICAL_OFFER_INDEX: usize = 0;

/// The two prices a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayPriceState {
    /// Pre-discount reference price.
    pub list_price: f64,
    /// Effective price: the aggregate low price across offers.
    pub spot_price: f64,
}

/// Extracts display prices from an offer aggregate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceSelector;

impl PriceSelector {
    /// The offer consulted for list price and availability.
    ///
    /// `None` when the aggregate has no offers.
    pub fn canonical_offer(offers: &OfferAggregate) -> Option<&Offer> {
        offers.offer_list().get(CANONICAL_OFFER_INDEX)
    }

    /// Select list and spot prices. `None` when there is no canonical offer.
    pub fn select(offers: &OfferAggregate) -> Option<DisplayPriceState> {
        Self::canonical_offer(offers).map(|offer| DisplayPriceState {
            list_price: offer.list_price,
            spot_price: offers.low_price,
        })
    }
}
