//! HTML hero banner.

use crate::presenter::{
    HeroModel, ATTR_HERO_VARIANT, HERO_IMAGE_HEIGHT, HERO_IMAGE_SIZES, HERO_IMAGE_WIDTH,
};
use crate::render::escape_html;

/// Render a hero banner section.
pub fn render_hero(model: &HeroModel) -> String {
    let link = model
        .link
        .as_ref()
        .map(|link| {
            format!(
                r#"<div class="hero-link"><a class="button button--inverse" href="{}">{} <span class="icon" data-icon="ArrowRight"></span></a></div>"#,
                escape_html(&link.href),
                escape_html(&link.text)
            )
        })
        .unwrap_or_default();

    let icon = model
        .icon
        .as_ref()
        .map(|icon| format!(r#"<div class="hero-content-icon">{}</div>"#, icon))
        .unwrap_or_default();

    format!(
        r#"<section class="hero" {attr}="{variant}">
    <div class="hero-content" aria-labelledby="hero-heading">
        <div class="hero-content-wrapper / grid-content">
            <div class="hero-content-info">
                <h1 id="hero-heading" class="{title_class}">{title}</h1>
                <p class="text-body-big">{subtitle}</p>
                {link}
            </div>
            {icon}
        </div>
    </div>
    <div class="hero-image">
        <img src="{src}" alt="{alt}" width="{width}" height="{height}" sizes="{sizes}" loading="eager" fetchpriority="high">
    </div>
</section>"#,
        attr = ATTR_HERO_VARIANT,
        variant = model.variant.as_str(),
        title_class = model.title_class,
        title = escape_html(&model.title),
        subtitle = escape_html(&model.subtitle),
        link = link,
        icon = icon,
        src = escape_html(&model.image_src),
        alt = escape_html(&model.image_alt),
        width = HERO_IMAGE_WIDTH,
        height = HERO_IMAGE_HEIGHT,
        sizes = HERO_IMAGE_SIZES,
    )
}
