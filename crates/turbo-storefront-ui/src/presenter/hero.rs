//! Hero banner model.

use serde::{Deserialize, Serialize};

/// Attribute carrying the hero variant.
pub const ATTR_HERO_VARIANT: &str = "data-hero-variant";

pub const HERO_IMAGE_WIDTH: u32 = 360;
pub const HERO_IMAGE_HEIGHT: u32 = 240;
pub const HERO_IMAGE_SIZES: &str = "(max-width: 768px) 70vw, 50vw";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeroVariant {
    #[default]
    Default,
    Small,
}

impl HeroVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeroVariant::Default => "default",
            HeroVariant::Small => "small",
        }
    }

    /// Class applied to the hero heading.
    pub fn title_class(&self) -> &'static str {
        match self {
            HeroVariant::Default => "title-hero",
            HeroVariant::Small => "title-hero-small",
        }
    }
}

/// Hero banner inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HeroProps {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub variant: HeroVariant,
    #[serde(default)]
    pub link_text: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    /// Pre-rendered icon markup.
    #[serde(default)]
    pub icon: Option<String>,
    pub image_src: String,
    pub image_alt: String,
}

/// Call-to-action shown under the subtitle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroLink {
    pub href: String,
    pub text: String,
}

/// Derived hero banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroModel {
    pub title: String,
    pub subtitle: String,
    pub variant: HeroVariant,
    pub title_class: &'static str,
    /// Present only for a non-empty link.
    pub link: Option<HeroLink>,
    pub icon: Option<String>,
    pub image_src: String,
    pub image_alt: String,
}

impl HeroModel {
    pub fn from_props(props: HeroProps) -> Self {
        let link = props
            .link
            .filter(|href| !href.is_empty())
            .map(|href| HeroLink {
                href,
                text: props.link_text.unwrap_or_default(),
            });
        let icon = props.icon.filter(|icon| !icon.is_empty());

        Self {
            title_class: props.variant.title_class(),
            title: props.title,
            subtitle: props.subtitle,
            variant: props.variant,
            link,
            icon,
            image_src: props.image_src,
            image_alt: props.image_alt,
        }
    }
}
