//! Render targets for presentation models.
//!
//! A render target accepts a model and produces markup. The models are the
//! contract; the HTML targets here are one implementation of it.

mod card;
mod hero;

pub use card::HtmlCardRenderer;
pub use hero::render_hero;

use crate::presenter::CardRenderModel;

/// Something that can draw a product card.
pub trait CardRenderer {
    type Output;

    fn render(&self, model: &CardRenderModel) -> Self::Output;
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom & Jerry"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&quot;&lt;/b&gt;"
        );
    }
}
