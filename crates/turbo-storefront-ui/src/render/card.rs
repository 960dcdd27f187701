//! HTML product card.

use crate::config::PresenterConfig;
use crate::money::{CurrencyFormatter, PriceFormatter};
use crate::presenter::{CardBadge, CardRenderModel};
use crate::render::{escape_html, CardRenderer};

/// Renders a [`CardRenderModel`] as an `<article class="product-card">`.
#[derive(Debug, Clone)]
pub struct HtmlCardRenderer<F = CurrencyFormatter> {
    formatter: F,
    image_width: u32,
    image_sizes: String,
}

impl HtmlCardRenderer<CurrencyFormatter> {
    pub fn from_config(config: &PresenterConfig) -> Self {
        Self::new(CurrencyFormatter::new(config.currency))
            .with_image_width(config.card.image_width)
            .with_image_sizes(config.card.image_sizes.clone())
    }
}

impl Default for HtmlCardRenderer<CurrencyFormatter> {
    fn default() -> Self {
        Self::from_config(&PresenterConfig::default())
    }
}

impl<F: PriceFormatter> HtmlCardRenderer<F> {
    pub fn new(formatter: F) -> Self {
        Self {
            formatter,
            image_width: 360,
            image_sizes: "(max-width: 768px) 25vw, 30vw".to_string(),
        }
    }

    pub fn with_image_width(mut self, width: u32) -> Self {
        self.image_width = width;
        self
    }

    pub fn with_image_sizes(mut self, sizes: impl Into<String>) -> Self {
        self.image_sizes = sizes.into();
        self
    }

    fn image_height(&self, aspect_ratio: f64) -> u32 {
        (self.image_width as f64 / aspect_ratio).round() as u32
    }

    fn render_price(
        &self,
        value: f64,
        test_id: &str,
        variant: &str,
        classes: &str,
        sr_text: &str,
    ) -> String {
        format!(
            r#"<span class="price {classes}" data-testid="{test_id}" data-value="{value}" data-variant="{variant}"><span class="sr-only">{sr_text}</span>{formatted}</span>"#,
            classes = classes,
            test_id = test_id,
            value = value,
            variant = variant,
            sr_text = sr_text,
            formatted = escape_html(&self.formatter.format(value)),
        )
    }

    fn render_badge(badge: &CardBadge) -> String {
        match badge {
            CardBadge::OutOfStock { label } => format!(
                r#"<span class="badge badge--small" data-badge-variant="neutral">{}</span>"#,
                escape_html(label)
            ),
            CardBadge::Discount { tier, .. } => format!(
                r#"<span class="badge badge--small discount-badge" data-badge-variant="{}">{}</span>"#,
                tier.as_str(),
                escape_html(&badge.label())
            ),
        }
    }
}

impl<F: PriceFormatter> CardRenderer for HtmlCardRenderer<F> {
    type Output = String;

    fn render(&self, model: &CardRenderModel) -> String {
        let attributes: String = model
            .attributes()
            .pairs()
            .iter()
            .map(|(name, value)| format!(r#" {}="{}""#, name, value))
            .collect();

        let list_price = self.render_price(
            model.display_price.list_price,
            "list-price",
            "listing",
            "text-body-small",
            "Original price:",
        );
        let spot_price = self.render_price(
            model.display_price.spot_price,
            "price",
            "spot",
            "text-body",
            "Sale Price:",
        );

        let badge = model
            .badge
            .as_ref()
            .map(Self::render_badge)
            .unwrap_or_default();

        let actions = model
            .buy_button
            .as_ref()
            .map(|fragment| format!(r#"<div class="product-card__actions">{}</div>"#, fragment))
            .unwrap_or_default();

        format!(
            r#"<article class="product-card"{attributes} data-product-id="{product_id}">
    <div class="product-card__image">
        <img src="{image_url}" alt="{image_alt}" width="{width}" height="{height}" sizes="{sizes}" loading="lazy">
    </div>
    <div class="product-card__content">
        <div class="product-card__heading">
            <h3 class="product-card__title / title-small">
                <a href="{href}" title="{title}">{title}</a>
            </h3>
            <div class="product-card__prices">
                {list_price}
                {spot_price}
            </div>
        </div>
        {badge}
    </div>
    {actions}
</article>"#,
            attributes = attributes,
            product_id = escape_html(model.product_id.as_str()),
            image_url = escape_html(&model.image_url),
            image_alt = escape_html(&model.image_alt),
            width = self.image_width,
            height = self.image_height(model.aspect_ratio),
            sizes = escape_html(&self.image_sizes),
            href = escape_html(&model.link.href),
            title = escape_html(&model.title),
            list_price = list_price,
            spot_price = spot_price,
            badge = badge,
            actions = actions,
        )
    }
}
