//! Presentation error types.

use thiserror::Error;

/// Result alias for presentation operations.
pub type Result<T> = std::result::Result<T, PresentationError>;

/// Errors raised while presenting catalog fragments.
///
/// Only upstream contract breaches end up here. Unknown availability tokens
/// and degenerate prices are normal inputs and never produce an error.
#[derive(Error, Debug)]
pub enum PresentationError {
    /// The product arrived without any offer.
    #[error("Product {product_id} has an empty offer list")]
    EmptyOffers { product_id: String },

    /// The product arrived without any image.
    #[error("Product {product_id} has an empty image list")]
    EmptyImages { product_id: String },

    /// Layout options that cannot produce a card.
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PresentationError {
    /// Whether this error signals a breach of the product data contract.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            PresentationError::EmptyOffers { .. } | PresentationError::EmptyImages { .. }
        )
    }
}

impl From<serde_json::Error> for PresentationError {
    fn from(e: serde_json::Error) -> Self {
        PresentationError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for PresentationError {
    fn from(e: toml::de::Error) -> Self {
        PresentationError::Config(e.to_string())
    }
}
