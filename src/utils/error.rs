use crate::domain::model::{CartOperation, ProductId};
use thiserror::Error;

pub const OUT_OF_STOCK_MESSAGE: &str = "Requested quantity is out of stock";

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Requested quantity {requested} of product {product_id} exceeds stock of {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    #[error("Product {product_id} is not in the cart")]
    ProductNotFound { product_id: ProductId },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

/// Coarse classification used by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    OutOfStock,
    NotFound,
    Transient,
    Configuration,
}

impl CartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::OutOfStock { .. } => ErrorKind::OutOfStock,
            CartError::ProductNotFound { .. } => ErrorKind::NotFound,
            CartError::ConfigError { .. }
            | CartError::InvalidConfigValueError { .. }
            | CartError::ConfigValidationError { .. } => ErrorKind::Configuration,
            CartError::ApiError(_)
            | CartError::UnexpectedStatus { .. }
            | CartError::IoError(_)
            | CartError::SerializationError(_)
            | CartError::StorageError { .. } => ErrorKind::Transient,
        }
    }

    /// The human-readable message shown when `operation` fails with this error.
    pub fn user_message(&self, operation: CartOperation) -> &'static str {
        match self.kind() {
            ErrorKind::OutOfStock => OUT_OF_STOCK_MESSAGE,
            _ => operation.failure_message(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CartError>;
