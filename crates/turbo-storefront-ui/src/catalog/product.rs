//! Product summary records as supplied by the catalog query layer.
//!
//! Field names follow the `ProductSummary_product` fragment so records can be
//! deserialised straight from the API response.

use crate::catalog::availability::{Availability, IN_STOCK_TOKEN};
use crate::ids::{ProductGroupId, ProductId, SellerId};
use serde::{Deserialize, Serialize};

/// A product summary. Treated as immutable once received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub slug: String,
    #[serde(default)]
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub gtin: Option<String>,
    #[serde(default)]
    pub brand: Option<Brand>,
    pub is_variant_of: ProductGroup,
    /// Ordered images; cards use the first one.
    pub image: Vec<ProductImage>,
    pub offers: OfferAggregate,
}

impl Product {
    /// Create a product with no images and no offers.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let id = id.into();
        Self {
            is_variant_of: ProductGroup {
                product_group_id: ProductGroupId::new(id.as_str()),
                name: name.clone(),
            },
            id,
            slug: slug.into(),
            sku: String::new(),
            name,
            gtin: None,
            brand: None,
            image: Vec::new(),
            offers: OfferAggregate::default(),
        }
    }

    pub fn with_group(mut self, group_id: impl Into<ProductGroupId>, name: impl Into<String>) -> Self {
        self.is_variant_of = ProductGroup {
            product_group_id: group_id.into(),
            name: name.into(),
        };
        self
    }

    pub fn with_image(mut self, url: impl Into<String>, alternate_name: impl Into<String>) -> Self {
        self.image.push(ProductImage {
            url: url.into(),
            alternate_name: alternate_name.into(),
        });
        self
    }

    pub fn with_offer(mut self, offer: Offer) -> Self {
        self.offers.offers.push(offer);
        self
    }

    pub fn with_low_price(mut self, low_price: f64) -> Self {
        self.offers.low_price = low_price;
        self
    }

    /// Group (variant parent) identifier.
    pub fn group_id(&self) -> &ProductGroupId {
        &self.is_variant_of.product_group_id
    }

    /// Name shown on listing cards: the product group name.
    pub fn display_name(&self) -> &str {
        &self.is_variant_of.name
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Brand {
    pub name: String,
}

/// The parent group a product variant belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductGroup {
    #[serde(rename = "productGroupID")]
    pub product_group_id: ProductGroupId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub url: String,
    #[serde(default)]
    pub alternate_name: String,
}

/// Offers for a product plus the aggregate low price across them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OfferAggregate {
    pub low_price: f64,
    #[serde(default)]
    pub offers: Vec<Offer>,
}

impl OfferAggregate {
    pub fn offer_list(&self) -> &[Offer] {
        &self.offers
    }
}

/// A single seller's price and availability for a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub price: f64,
    pub list_price: f64,
    #[serde(default)]
    pub quantity: i64,
    /// schema.org availability URI, kept verbatim.
    pub availability: String,
    #[serde(default)]
    pub seller: Seller,
}

impl Offer {
    pub fn new(price: f64, list_price: f64, availability: impl Into<String>) -> Self {
        Self {
            price,
            list_price,
            quantity: 0,
            availability: availability.into(),
            seller: Seller::default(),
        }
    }

    /// An offer marked as in stock.
    pub fn in_stock(price: f64, list_price: f64) -> Self {
        Self::new(price, list_price, IN_STOCK_TOKEN)
    }

    pub fn with_seller(mut self, identifier: impl Into<SellerId>) -> Self {
        self.seller = Seller {
            identifier: identifier.into(),
        };
        self
    }

    pub fn parsed_availability(&self) -> Availability {
        Availability::from_token(&self.availability)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Seller {
    pub identifier: SellerId,
}
