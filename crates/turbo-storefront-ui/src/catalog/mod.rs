//! Catalog input records.

mod availability;
mod product;

pub use availability::{Availability, IN_STOCK_TOKEN};
pub use product::{Brand, Offer, OfferAggregate, Product, ProductGroup, ProductImage, Seller};
