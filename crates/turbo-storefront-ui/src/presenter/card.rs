//! Product card composition.

use serde::{Deserialize, Serialize};

use crate::catalog::{Availability, Product};
use crate::error::{PresentationError, Result};
use crate::ids::ProductId;
use crate::presenter::discount::{DiscountEvaluator, DiscountState, DiscountThresholds, DiscountTier};
use crate::presenter::link::{LinkBuilder, LinkDescriptor, ProductLinkBuilder};
use crate::presenter::price::{DisplayPriceState, PriceSelector, CANONICAL_OFFER_INDEX};
use crate::presenter::stock::{StockEvaluator, StockState};

/// Attribute carrying the card variant.
pub const ATTR_CARD_VARIANT: &str = "data-card-variant";
/// Attribute carrying whether the card has a border.
pub const ATTR_CARD_BORDERED: &str = "data-card-bordered";
/// Attribute carrying whether the card's product is out of stock.
pub const ATTR_CARD_OUT_OF_STOCK: &str = "data-card-out-of-stock";

/// Card orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    Horizontal,
    #[default]
    Vertical,
}

impl CardVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardVariant::Horizontal => "horizontal",
            CardVariant::Vertical => "vertical",
        }
    }
}

/// Layout options for a card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardLayout {
    pub variant: CardVariant,
    pub bordered: bool,
    /// Image width / height.
    pub aspect_ratio: f64,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            variant: CardVariant::Vertical,
            bordered: false,
            aspect_ratio: 1.0,
        }
    }
}

impl CardLayout {
    pub fn validate(&self) -> Result<()> {
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(PresentationError::InvalidLayout(format!(
                "aspect ratio must be a positive number, got {}",
                self.aspect_ratio
            )));
        }
        Ok(())
    }
}

/// The single badge a card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardBadge {
    /// Neutral out-of-stock indicator.
    OutOfStock { label: String },
    Discount { percent_off: u32, tier: DiscountTier },
}

impl CardBadge {
    pub fn label(&self) -> String {
        match self {
            CardBadge::OutOfStock { label } => label.clone(),
            CardBadge::Discount { percent_off, .. } => format!("{}% off", percent_off),
        }
    }
}

/// Everything a render target needs to draw one product card.
///
/// Rebuilt for every render and owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRenderModel {
    pub product_id: ProductId,
    /// 0-based position of the card in its list.
    pub index: usize,
    pub title: String,
    pub image_url: String,
    pub image_alt: String,
    pub link: LinkDescriptor,
    pub display_price: DisplayPriceState,
    pub stock_state: StockState,
    pub discount_state: DiscountState,
    pub variant: CardVariant,
    pub bordered: bool,
    pub aspect_ratio: f64,
    pub badge: Option<CardBadge>,
    /// Pre-rendered buy action. `None` omits the actions region entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_button: Option<String>,
}

impl CardRenderModel {
    pub fn with_buy_button(mut self, fragment: impl Into<String>) -> Self {
        self.buy_button = Some(fragment.into());
        self
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock_state.is_out_of_stock()
    }

    /// Discount badge, if one is shown.
    pub fn discount_badge(&self) -> Option<(u32, DiscountTier)> {
        match &self.badge {
            Some(CardBadge::Discount { percent_off, tier }) => Some((*percent_off, *tier)),
            _ => None,
        }
    }

    /// JSON payload for client-side hydration.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn attributes(&self) -> CardAttributes {
        CardAttributes {
            variant: self.variant,
            bordered: self.bordered,
            out_of_stock: self.is_out_of_stock(),
        }
    }
}

/// DOM attributes styling layers rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardAttributes {
    pub variant: CardVariant,
    pub bordered: bool,
    pub out_of_stock: bool,
}

impl CardAttributes {
    /// Attribute name/value pairs in render order.
    pub fn pairs(&self) -> [(&'static str, String); 3] {
        [
            (ATTR_CARD_VARIANT, self.variant.as_str().to_string()),
            (ATTR_CARD_BORDERED, self.bordered.to_string()),
            (ATTR_CARD_OUT_OF_STOCK, self.out_of_stock.to_string()),
        ]
    }
}

/// Derives a [`CardRenderModel`] from a product.
#[derive(Debug, Clone)]
pub struct CardComposer<L = ProductLinkBuilder> {
    link_builder: L,
    thresholds: DiscountThresholds,
    out_of_stock_label: String,
}

impl Default for CardComposer<ProductLinkBuilder> {
    fn default() -> Self {
        Self::new(ProductLinkBuilder::default())
    }
}

impl<L: LinkBuilder> CardComposer<L> {
    pub fn new(link_builder: L) -> Self {
        Self {
            link_builder,
            thresholds: DiscountThresholds::default(),
            out_of_stock_label: "Out of stock".to_string(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: DiscountThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_out_of_stock_label(mut self, label: impl Into<String>) -> Self {
        self.out_of_stock_label = label.into();
        self
    }

    /// Compose the card for `product` shown at `index` in its list.
    ///
    /// Fails when the product has no image or no offer; nothing is rendered
    /// for such a product.
    pub fn compose(
        &self,
        product: &Product,
        index: usize,
        layout: &CardLayout,
    ) -> Result<CardRenderModel> {
        layout.validate()?;

        let Some(image) = product.image.first() else {
            tracing::error!(product_id = %product.id, "Product has no images");
            return Err(PresentationError::EmptyImages {
                product_id: product.id.to_string(),
            });
        };

        let (Some(offer), Some(display_price)) = (
            PriceSelector::canonical_offer(&product.offers),
            PriceSelector::select(&product.offers),
        ) else {
            tracing::error!(product_id = %product.id, "Product has no offers");
            return Err(PresentationError::EmptyOffers {
                product_id: product.id.to_string(),
            });
        };

        if offer.parsed_availability() == Availability::Unknown {
            tracing::warn!(
                product_id = %product.id,
                availability = %offer.availability,
                "Unrecognized availability token, presenting as out of stock"
            );
        }

        let stock_state = StockEvaluator::evaluate(&offer.availability);
        let discount_state =
            DiscountEvaluator::evaluate(display_price.list_price, display_price.spot_price);
        let badge = self.select_badge(stock_state, discount_state);
        let link = self
            .link_builder
            .product_link(product, CANONICAL_OFFER_INDEX, index);

        tracing::debug!(
            product_id = %product.id,
            index,
            stock = stock_state.as_str(),
            percent_off = ?discount_state.percent_off,
            "Composed product card"
        );

        Ok(CardRenderModel {
            product_id: product.id.clone(),
            index,
            title: product.display_name().to_string(),
            image_url: image.url.clone(),
            image_alt: image.alternate_name.clone(),
            link,
            display_price,
            stock_state,
            discount_state,
            variant: layout.variant,
            bordered: layout.bordered,
            aspect_ratio: layout.aspect_ratio,
            badge,
            buy_button: None,
        })
    }

    /// Out of stock wins over any discount.
    fn select_badge(&self, stock: StockState, discount: DiscountState) -> Option<CardBadge> {
        if stock.is_out_of_stock() {
            return Some(CardBadge::OutOfStock {
                label: self.out_of_stock_label.clone(),
            });
        }
        discount.percent_off.map(|percent_off| CardBadge::Discount {
            percent_off,
            tier: DiscountTier::for_percent(percent_off, self.thresholds),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Offer, IN_STOCK_TOKEN};

    fn composer() -> CardComposer {
        CardComposer::default()
    }

    fn product(list: f64, spot: f64, availability: &str) -> Product {
        Product::new("p-1", "Headphone", "headphone")
            .with_image("https://cdn.example.com/h.jpg", "Headphone front")
            .with_low_price(spot)
            .with_offer(Offer::new(spot, list, availability).with_seller("1"))
    }

    #[test]
    fn test_compose_discounted_in_stock() {
        let model = composer()
            .compose(&product(100.0, 80.0, IN_STOCK_TOKEN), 0, &CardLayout::default())
            .unwrap();

        assert_eq!(model.title, "Headphone");
        assert_eq!(model.image_url, "https://cdn.example.com/h.jpg");
        assert_eq!(model.image_alt, "Headphone front");
        assert_eq!(model.link.href, "/headphone/p");
        assert_eq!(model.display_price.list_price, 100.0);
        assert_eq!(model.display_price.spot_price, 80.0);
        assert_eq!(model.stock_state, StockState::InStock);
        assert_eq!(model.discount_badge(), Some((20, DiscountTier::Medium)));
        assert_eq!(model.badge.as_ref().map(CardBadge::label).as_deref(), Some("20% off"));
        assert!(model.buy_button.is_none());
    }

    #[test]
    fn test_out_of_stock_suppresses_discount() {
        let model = composer()
            .compose(
                &product(100.0, 80.0, "https://schema.org/OutOfStock"),
                0,
                &CardLayout::default(),
            )
            .unwrap();

        assert!(model.discount_state.has_discount);
        assert_eq!(
            model.badge,
            Some(CardBadge::OutOfStock {
                label: "Out of stock".to_string()
            })
        );
        assert!(model.discount_badge().is_none());
        assert!(model.attributes().out_of_stock);
    }

    #[test]
    fn test_no_badge_without_discount() {
        let model = composer()
            .compose(&product(100.0, 100.0, IN_STOCK_TOKEN), 0, &CardLayout::default())
            .unwrap();
        assert!(model.badge.is_none());
    }

    #[test]
    fn test_custom_label_and_thresholds() {
        let composer = composer()
            .with_out_of_stock_label("Sold out")
            .with_thresholds(DiscountThresholds { low: 25, high: 50 });

        let model = composer
            .compose(&product(100.0, 80.0, IN_STOCK_TOKEN), 0, &CardLayout::default())
            .unwrap();
        assert_eq!(model.discount_badge(), Some((20, DiscountTier::Low)));

        let model = composer
            .compose(&product(100.0, 80.0, "unknown"), 0, &CardLayout::default())
            .unwrap();
        assert_eq!(model.badge.unwrap().label(), "Sold out");
    }

    #[test]
    fn test_empty_offers_is_precondition_error() {
        let product = Product::new("p-2", "Empty", "empty").with_image("u", "a");
        let err = composer()
            .compose(&product, 0, &CardLayout::default())
            .unwrap_err();
        assert!(matches!(err, PresentationError::EmptyOffers { .. }));
        assert!(err.is_precondition());
    }

    #[test]
    fn test_empty_images_is_precondition_error() {
        let product = Product::new("p-3", "Imageless", "imageless")
            .with_offer(Offer::in_stock(1.0, 1.0));
        let err = composer()
            .compose(&product, 0, &CardLayout::default())
            .unwrap_err();
        assert!(matches!(err, PresentationError::EmptyImages { .. }));
    }

    #[test]
    fn test_invalid_layout() {
        let layout = CardLayout {
            aspect_ratio: f64::NAN,
            ..CardLayout::default()
        };
        let err = composer()
            .compose(&product(1.0, 1.0, IN_STOCK_TOKEN), 0, &layout)
            .unwrap_err();
        assert!(matches!(err, PresentationError::InvalidLayout(_)));
        assert!(!err.is_precondition());
    }

    #[test]
    fn test_link_builder_receives_canonical_offer_and_position() {
        let composer = CardComposer::new(|p: &Product, offer: usize, pos: usize| {
            LinkDescriptor::new(format!("/{}?offer={}&pos={}", p.slug, offer, pos))
        });
        let model = composer
            .compose(&product(10.0, 5.0, IN_STOCK_TOKEN), 7, &CardLayout::default())
            .unwrap();
        assert_eq!(model.link.href, "/headphone?offer=0&pos=7");
        assert_eq!(model.index, 7);
    }

    #[test]
    fn test_attributes() {
        let layout = CardLayout {
            variant: CardVariant::Horizontal,
            bordered: true,
            aspect_ratio: 1.5,
        };
        let model = composer()
            .compose(&product(10.0, 5.0, IN_STOCK_TOKEN), 0, &layout)
            .unwrap();

        let pairs = model.attributes().pairs();
        assert_eq!(pairs[0], (ATTR_CARD_VARIANT, "horizontal".to_string()));
        assert_eq!(pairs[1], (ATTR_CARD_BORDERED, "true".to_string()));
        assert_eq!(pairs[2], (ATTR_CARD_OUT_OF_STOCK, "false".to_string()));
    }

    #[test]
    fn test_compose_is_idempotent() {
        let composer = composer();
        let product = product(100.0, 80.0, IN_STOCK_TOKEN);
        let a = composer.compose(&product, 2, &CardLayout::default()).unwrap();
        let b = composer.compose(&product, 2, &CardLayout::default()).unwrap();
        assert_eq!(a, b);
    }
}
