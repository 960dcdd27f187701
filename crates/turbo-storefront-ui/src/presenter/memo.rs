//! Identity-based skip for repeated card renders.
//!
//! A card slot keeps the last card it presented. When the next render passes
//! the very same product allocation with the same index, layout and buy
//! action, the cached card is returned without recomputing. Product contents
//! are never compared.
//!
//! The slot owns the presenter it renders with, so a cached card can only
//! ever come from that presenter's labels, thresholds and link builder.

use std::sync::Arc;

use crate::catalog::Product;
use crate::error::Result;
use crate::presenter::card::CardLayout;
use crate::presenter::link::{LinkBuilder, ProductLinkBuilder};
use crate::presenter::{CardProps, PresentedCard, ProductPresenter};

#[derive(Debug)]
struct MemoEntry {
    product: Arc<Product>,
    index: usize,
    layout: CardLayout,
    buy_button: Option<String>,
    card: Arc<PresentedCard>,
}

impl MemoEntry {
    fn matches(&self, product: &Arc<Product>, props: &CardProps<'_>, layout: &CardLayout) -> bool {
        Arc::ptr_eq(&self.product, product)
            && self.index == props.index
            && self.layout == *layout
            && self.buy_button == props.buy_button
    }
}

/// Memo slot for one rendered card.
#[derive(Debug)]
pub struct CardMemo<L = ProductLinkBuilder> {
    presenter: ProductPresenter<L>,
    last: Option<MemoEntry>,
    hits: u64,
    misses: u64,
}

impl<L: LinkBuilder> CardMemo<L> {
    pub fn new(presenter: ProductPresenter<L>) -> Self {
        Self {
            presenter,
            last: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Present `product` at `index` through the memo.
    ///
    /// `configure` sets the optional props the same way a direct
    /// [`ProductPresenter::present`] call would. Errors are returned and
    /// never cached.
    pub fn present<F>(
        &mut self,
        product: &Arc<Product>,
        index: usize,
        configure: F,
    ) -> Result<Arc<PresentedCard>>
    where
        F: for<'a> FnOnce(CardProps<'a>) -> CardProps<'a>,
    {
        let props = configure(CardProps::new(product, index));
        let layout = props.layout(&self.presenter.defaults);

        if let Some(entry) = &self.last {
            if entry.matches(product, &props, &layout) {
                self.hits += 1;
                tracing::trace!(product_id = %product.id, index = props.index, "Card memo hit");
                return Ok(Arc::clone(&entry.card));
            }
        }

        self.misses += 1;
        let index = props.index;
        let buy_button = props.buy_button.clone();
        let card = Arc::new(self.presenter.present(props)?);
        self.last = Some(MemoEntry {
            product: Arc::clone(product),
            index,
            layout,
            buy_button,
            card: Arc::clone(&card),
        });
        Ok(card)
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop the cached card.
    pub fn clear(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Offer;
    use crate::presenter::card::{CardComposer, CardVariant};

    fn product() -> Arc<Product> {
        Arc::new(
            Product::new("p-1", "Lamp", "lamp")
                .with_image("https://cdn.example.com/lamp.jpg", "Lamp")
                .with_low_price(30.0)
                .with_offer(Offer::in_stock(30.0, 40.0)),
        )
    }

    fn sold_out() -> Arc<Product> {
        Arc::new(
            Product::new("p-3", "Desk", "desk")
                .with_image("https://cdn.example.com/desk.jpg", "Desk")
                .with_low_price(90.0)
                .with_offer(Offer::new(90.0, 120.0, "https://schema.org/SoldOut")),
        )
    }

    fn memo() -> CardMemo {
        ProductPresenter::default().memo()
    }

    #[test]
    fn test_same_inputs_return_same_card() {
        let product = product();
        let mut memo = memo();

        let first = memo.present(&product, 0, |props| props).unwrap();
        let second = memo.present(&product, 0, |props| props).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(memo.hits(), 1);
        assert_eq!(memo.misses(), 1);
    }

    #[test]
    fn test_equal_but_distinct_product_recomputes() {
        let a = product();
        let b = Arc::new((*a).clone());
        let mut memo = memo();

        let first = memo.present(&a, 0, |props| props).unwrap();
        let second = memo.present(&b, 0, |props| props).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
        assert_eq!(memo.misses(), 2);
    }

    #[test]
    fn test_index_or_layout_change_recomputes() {
        let product = product();
        let mut memo = memo();

        memo.present(&product, 0, |props| props).unwrap();
        let moved = memo.present(&product, 1, |props| props).unwrap();
        assert_eq!(moved.model.index, 1);

        let relaid = memo
            .present(&product, 1, |props| props.variant(CardVariant::Horizontal))
            .unwrap();
        assert_eq!(relaid.attributes.variant, CardVariant::Horizontal);
        assert_eq!(memo.hits(), 0);
        assert_eq!(memo.misses(), 3);
    }

    #[test]
    fn test_buy_button_is_part_of_the_key() {
        let product = product();
        let mut memo = memo();

        let first = memo
            .present(&product, 0, |props| props.buy_button("<button>Buy</button>"))
            .unwrap();
        let same = memo
            .present(&product, 0, |props| props.buy_button("<button>Buy</button>"))
            .unwrap();
        assert!(Arc::ptr_eq(&first, &same));
        assert_eq!(same.model.buy_button.as_deref(), Some("<button>Buy</button>"));

        let changed = memo
            .present(&product, 0, |props| props.buy_button("<button>Add</button>"))
            .unwrap();
        assert_eq!(changed.model.buy_button.as_deref(), Some("<button>Add</button>"));

        let removed = memo.present(&product, 0, |props| props).unwrap();
        assert!(removed.model.buy_button.is_none());

        assert_eq!(memo.hits(), 1);
        assert_eq!(memo.misses(), 3);
    }

    #[test]
    fn test_slot_renders_with_its_own_presenter() {
        let product = sold_out();
        let mut english = memo();
        let mut portuguese = CardMemo::new(ProductPresenter::new(
            CardComposer::default().with_out_of_stock_label("Esgotado"),
            CardLayout::default(),
        ));

        let first = english.present(&product, 0, |props| props).unwrap();
        let second = portuguese.present(&product, 0, |props| props).unwrap();
        let again = portuguese.present(&product, 0, |props| props).unwrap();

        assert_eq!(first.model.badge.as_ref().unwrap().label(), "Out of stock");
        assert_eq!(second.model.badge.as_ref().unwrap().label(), "Esgotado");
        assert!(Arc::ptr_eq(&second, &again));
        assert_eq!(portuguese.hits(), 1);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let broken = Arc::new(Product::new("p-2", "Broken", "broken"));
        let mut memo = memo();

        assert!(memo.present(&broken, 0, |props| props).is_err());
        assert!(memo.present(&broken, 0, |props| props).is_err());
        assert_eq!(memo.hits(), 0);
        assert_eq!(memo.misses(), 2);
    }

    #[test]
    fn test_clear() {
        let product = product();
        let mut memo = memo();

        memo.present(&product, 0, |props| props).unwrap();
        memo.clear();
        memo.present(&product, 0, |props| props).unwrap();
        assert_eq!(memo.misses(), 2);
    }
}
