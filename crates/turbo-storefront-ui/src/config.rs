//! Presenter configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PresentationError, Result};
use crate::money::Currency;
use crate::presenter::{CardLayout, CardVariant, DiscountThresholds};

/// Presenter configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PresenterConfig {
    /// Card layout defaults.
    #[serde(default)]
    pub card: CardConfig,

    /// Badge labels and discount tiers.
    #[serde(default)]
    pub badges: BadgeConfig,

    /// Product link construction.
    #[serde(default)]
    pub links: LinkConfig,

    /// Currency used by the default price formatter.
    #[serde(default)]
    pub currency: Currency,
}

impl PresenterConfig {
    /// Load config from a TOML or JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PresentationError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| PresentationError::Config(format!("Invalid JSON config: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        self.card.default_layout().validate()?;
        if self.card.image_width == 0 {
            return Err(PresentationError::Config(
                "card.image_width must be positive".to_string(),
            ));
        }
        let t = self.badges.discount_thresholds;
        if t.low > t.high {
            return Err(PresentationError::Config(format!(
                "badges.discount_thresholds.low ({}) exceeds high ({})",
                t.low, t.high
            )));
        }
        Ok(())
    }
}

/// Card layout defaults and image sizing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardConfig {
    #[serde(default)]
    pub variant: CardVariant,

    #[serde(default)]
    pub bordered: bool,

    /// Width / height of the card image.
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: f64,

    /// Rendered image width in pixels.
    #[serde(default = "default_image_width")]
    pub image_width: u32,

    /// Responsive `sizes` attribute for the card image.
    #[serde(default = "default_image_sizes")]
    pub image_sizes: String,
}

impl CardConfig {
    pub fn default_layout(&self) -> CardLayout {
        CardLayout {
            variant: self.variant,
            bordered: self.bordered,
            aspect_ratio: self.aspect_ratio,
        }
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            variant: CardVariant::default(),
            bordered: false,
            aspect_ratio: default_aspect_ratio(),
            image_width: default_image_width(),
            image_sizes: default_image_sizes(),
        }
    }
}

fn default_aspect_ratio() -> f64 {
    1.0
}

fn default_image_width() -> u32 {
    360
}

fn default_image_sizes() -> String {
    "(max-width: 768px) 25vw, 30vw".to_string()
}

/// Badge configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BadgeConfig {
    #[serde(default = "default_out_of_stock_label")]
    pub out_of_stock_label: String,

    #[serde(default)]
    pub discount_thresholds: DiscountThresholds,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            out_of_stock_label: default_out_of_stock_label(),
            discount_thresholds: DiscountThresholds::default(),
        }
    }
}

fn default_out_of_stock_label() -> String {
    "Out of stock".to_string()
}

/// Product link configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkConfig {
    /// Appended to `/{slug}` to form the product page path.
    #[serde(default = "default_product_path_suffix")]
    pub product_path_suffix: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            product_path_suffix: default_product_path_suffix(),
        }
    }
}

fn default_product_path_suffix() -> String {
    "/p".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PresenterConfig::default();
        assert_eq!(config.card.variant, CardVariant::Vertical);
        assert!(!config.card.bordered);
        assert_eq!(config.card.aspect_ratio, 1.0);
        assert_eq!(config.card.image_width, 360);
        assert_eq!(config.badges.out_of_stock_label, "Out of stock");
        assert_eq!(config.badges.discount_thresholds.low, 15);
        assert_eq!(config.badges.discount_thresholds.high, 40);
        assert_eq!(config.links.product_path_suffix, "/p");
        assert_eq!(config.currency, Currency::USD);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = PresenterConfig::from_toml_str(
            r#"
currency = "EUR"

[card]
variant = "horizontal"
bordered = true

[badges]
out_of_stock_label = "Sold out"
"#,
        )
        .unwrap();

        assert_eq!(config.currency, Currency::EUR);
        assert_eq!(config.card.variant, CardVariant::Horizontal);
        assert!(config.card.bordered);
        assert_eq!(config.card.aspect_ratio, 1.0);
        assert_eq!(config.badges.out_of_stock_label, "Sold out");
        assert_eq!(config.badges.discount_thresholds, DiscountThresholds::default());
    }

    #[test]
    fn test_json_config() {
        let config =
            PresenterConfig::from_json_str(r#"{"card": {"aspect_ratio": 1.5}}"#).unwrap();
        assert_eq!(config.card.aspect_ratio, 1.5);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = PresenterConfig::default();
        config.card.aspect_ratio = 0.0;
        assert!(config.validate().is_err());

        let mut config = PresenterConfig::default();
        config.badges.discount_thresholds = DiscountThresholds { low: 50, high: 10 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = PresenterConfig::from_toml_str("card = 3").unwrap_err();
        assert!(matches!(err, PresentationError::Config(_)));
    }

    #[test]
    fn test_invalid_json() {
        let err = PresenterConfig::from_json_str(r#"{"card": 3}"#).unwrap_err();
        assert!(matches!(err, PresentationError::Config(_)));
    }

    #[test]
    fn test_load_reports_json_and_toml_alike() {
        let dir = std::env::temp_dir().join(format!("presenter-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let json = dir.join("presenter.json");
        let toml = dir.join("presenter.toml");
        std::fs::write(&json, "{ not json").unwrap();
        std::fs::write(&toml, "card = 3").unwrap();

        let json_err = PresenterConfig::load(&json).unwrap_err();
        let toml_err = PresenterConfig::load(&toml).unwrap_err();
        std::fs::remove_dir_all(&dir).unwrap();

        assert!(matches!(json_err, PresentationError::Config(_)));
        assert!(matches!(toml_err, PresentationError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = PresenterConfig::load("/nonexistent/presenter.toml").unwrap_err();
        assert!(matches!(err, PresentationError::Config(_)));
    }
}
