//! Product presentation: from a catalog record to a card render model.
//!
//! The pipeline is one-way and pure:
//!
//! ```text
//! Product -> PriceSelector / StockEvaluator / DiscountEvaluator -> CardComposer -> CardRenderModel
//! ```
//!
//! [`ProductPresenter`] is the entry point rendering layers call.

mod card;
mod discount;
mod hero;
mod link;
mod memo;
mod price;
mod stock;

pub use card::{
    CardAttributes, CardBadge, CardComposer, CardLayout, CardRenderModel, CardVariant,
    ATTR_CARD_BORDERED, ATTR_CARD_OUT_OF_STOCK, ATTR_CARD_VARIANT,
};
pub use discount::{
    DiscountEvaluator, DiscountState, DiscountThresholds, DiscountTier, MAX_PERCENT_OFF,
    MIN_PERCENT_OFF,
};
pub use hero::{
    HeroLink, HeroModel, HeroProps, HeroVariant, ATTR_HERO_VARIANT, HERO_IMAGE_HEIGHT,
    HERO_IMAGE_SIZES, HERO_IMAGE_WIDTH,
};
pub use link::{LinkBuilder, LinkDescriptor, ProductLinkBuilder, SelectItemEvent};
pub use memo::CardMemo;
pub use price::{DisplayPriceState, PriceSelector, CANONICAL_OFFER_INDEX};
pub use stock::{StockEvaluator, StockState};

use crate::catalog::Product;
use crate::config::PresenterConfig;
use crate::error::Result;

/// Inputs for one product card. Unset layout fields fall back to the
/// presenter's configured defaults.
#[derive(Debug, Clone)]
pub struct CardProps<'a> {
    pub product: &'a Product,
    /// 0-based position in the list the card belongs to.
    pub index: usize,
    pub variant: Option<CardVariant>,
    pub bordered: Option<bool>,
    pub aspect_ratio: Option<f64>,
    /// Pre-rendered buy action.
    pub buy_button: Option<String>,
}

impl<'a> CardProps<'a> {
    pub fn new(product: &'a Product, index: usize) -> Self {
        Self {
            product,
            index,
            variant: None,
            bordered: None,
            aspect_ratio: None,
            buy_button: None,
        }
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = Some(bordered);
        self
    }

    pub fn aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }

    pub fn buy_button(mut self, fragment: impl Into<String>) -> Self {
        self.buy_button = Some(fragment.into());
        self
    }

    fn layout(&self, defaults: &CardLayout) -> CardLayout {
        CardLayout {
            variant: self.variant.unwrap_or(defaults.variant),
            bordered: self.bordered.unwrap_or(defaults.bordered),
            aspect_ratio: self.aspect_ratio.unwrap_or(defaults.aspect_ratio),
        }
    }
}

/// A composed card and the DOM attributes styling layers key on.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedCard {
    pub model: CardRenderModel,
    pub attributes: CardAttributes,
}

/// Entry point for presenting product cards.
#[derive(Debug, Clone)]
pub struct ProductPresenter<L = ProductLinkBuilder> {
    composer: CardComposer<L>,
    defaults: CardLayout,
}

impl ProductPresenter<ProductLinkBuilder> {
    /// Build a presenter from a validated config.
    pub fn from_config(config: &PresenterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &PresenterConfig) -> Self {
        let composer = CardComposer::new(ProductLinkBuilder::new(
            config.links.product_path_suffix.clone(),
        ))
        .with_thresholds(config.badges.discount_thresholds)
        .with_out_of_stock_label(config.badges.out_of_stock_label.clone());

        Self {
            composer,
            defaults: config.card.default_layout(),
        }
    }
}

impl Default for ProductPresenter<ProductLinkBuilder> {
    fn default() -> Self {
        Self::build(&PresenterConfig::default())
    }
}

impl<L: LinkBuilder> ProductPresenter<L> {
    pub fn new(composer: CardComposer<L>, defaults: CardLayout) -> Self {
        Self { composer, defaults }
    }

    /// Present a single card.
    pub fn present(&self, props: CardProps<'_>) -> Result<PresentedCard> {
        let layout = props.layout(&self.defaults);
        let mut model = self.composer.compose(props.product, props.index, &layout)?;
        model.buy_button = props.buy_button;

        Ok(PresentedCard {
            attributes: model.attributes(),
            model,
        })
    }

    /// A memo slot bound to a copy of this presenter.
    pub fn memo(&self) -> CardMemo<L>
    where
        L: Clone,
    {
        CardMemo::new(self.clone())
    }

    /// Present a list of products with default layout, in list order.
    ///
    /// Stops at the first product that breaks the data contract.
    pub fn present_grid(&self, products: &[Product]) -> Result<Vec<PresentedCard>> {
        let cards = products
            .iter()
            .enumerate()
            .map(|(index, product)| self.present(CardProps::new(product, index)))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(count = cards.len(), "Presented product grid");
        Ok(cards)
    }
}
