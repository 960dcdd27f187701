//! Storefront presentation logic for TurboCommerce.
//!
//! Turns catalog product summaries into the facts a listing card shows:
//!
//! - **Prices**: list price from the canonical offer, spot price from the
//!   aggregate low price
//! - **Stock**: only the exact schema.org `InStock` token is sellable
//! - **Discount**: percentage badge when the spot price undercuts the list price
//! - **Card**: a render model plus the `data-card-*` attributes styling hooks on
//!
//! Rendering itself sits behind [`render::CardRenderer`]; an HTML target is
//! included, along with a hero banner.
//!
//! # Example
//!
//! ```rust
//! use turbo_storefront_ui::prelude::*;
//!
//! let product = Product::new("99988213", "Aedle VK-1 L Headphone", "aedle-vk1")
//!     .with_image("https://cdn.example.com/vk1.jpg", "Headphone")
//!     .with_low_price(80.0)
//!     .with_offer(Offer::in_stock(80.0, 100.0));
//!
//! let presenter: ProductPresenter = ProductPresenter::default();
//! let card = presenter.present(CardProps::new(&product, 0)).unwrap();
//! assert_eq!(card.model.badge.unwrap().label(), "20% off");
//! assert!(!card.attributes.out_of_stock);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod presenter;
pub mod render;

pub use error::{PresentationError, Result};
pub use ids::*;
pub use money::{Currency, CurrencyFormatter, Money, PriceFormatter};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{PresentationError, Result};
    pub use crate::ids::*;
    pub use crate::money::{Currency, CurrencyFormatter, Money, PriceFormatter};

    // Catalog
    pub use crate::catalog::{Availability, Offer, OfferAggregate, Product, ProductImage, IN_STOCK_TOKEN};

    // Configuration
    pub use crate::config::PresenterConfig;

    // Presentation
    pub use crate::presenter::{
        CardAttributes, CardBadge, CardComposer, CardLayout, CardMemo, CardProps,
        CardRenderModel, CardVariant, DiscountEvaluator, DiscountState, DiscountTier,
        DisplayPriceState, HeroModel, HeroProps, HeroVariant, LinkBuilder, LinkDescriptor,
        PresentedCard, PriceSelector, ProductLinkBuilder, ProductPresenter, StockEvaluator,
        StockState,
    };

    // Rendering
    pub use crate::render::{render_hero, CardRenderer, HtmlCardRenderer};
}
