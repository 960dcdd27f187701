//! Product link descriptors.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::{ProductGroupId, ProductId, SellerId};

/// Navigation target for a product card, plus the analytics payload sent
/// when the card is clicked. Opaque to the presenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkDescriptor {
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_item: Option<SelectItemEvent>,
}

impl LinkDescriptor {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            select_item: None,
        }
    }
}

/// Analytics `select_item` event for a product chosen from a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectItemEvent {
    pub item_id: ProductId,
    pub item_group_id: ProductGroupId,
    pub item_name: String,
    /// 1-based position of the card in its list.
    pub index: usize,
    pub price: f64,
    pub seller: SellerId,
}

/// Builds link descriptors for product cards.
pub trait LinkBuilder {
    fn product_link(&self, product: &Product, offer_index: usize, position: usize)
        -> LinkDescriptor;
}

impl<F> LinkBuilder for F
where
    F: Fn(&Product, usize, usize) -> LinkDescriptor,
{
    fn product_link(
        &self,
        product: &Product,
        offer_index: usize,
        position: usize,
    ) -> LinkDescriptor {
        self(product, offer_index, position)
    }
}

/// Default builder: `/{slug}{suffix}` with a `select_item` payload.
#[derive(Debug, Clone)]
pub struct ProductLinkBuilder {
    path_suffix: String,
}

impl ProductLinkBuilder {
    pub fn new(path_suffix: impl Into<String>) -> Self {
        Self {
            path_suffix: path_suffix.into(),
        }
    }
}

impl Default for ProductLinkBuilder {
    fn default() -> Self {
        Self::new("/p")
    }
}

impl LinkBuilder for ProductLinkBuilder {
    fn product_link(
        &self,
        product: &Product,
        offer_index: usize,
        position: usize,
    ) -> LinkDescriptor {
        let href = format!("/{}{}", product.slug, self.path_suffix);

        let select_item = product
            .offers
            .offer_list()
            .get(offer_index)
            .map(|offer| SelectItemEvent {
                item_id: product.id.clone(),
                item_group_id: product.group_id().clone(),
                item_name: product.display_name().to_string(),
                index: position + 1,
                price: offer.price,
                seller: offer.seller.identifier.clone(),
            });

        LinkDescriptor { href, select_item }
    }
}
