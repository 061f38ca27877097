pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CartCommand, CliConfig};

pub use adapters::{ConsoleNotifier, HttpCatalogApi, LocalStorage, MemoryStorage};
pub use app::{cart_summary, CartSession};
pub use config::CartConfig;
pub use core::cart_store::{CartStore, DEFAULT_STORAGE_KEY};
pub use domain::model::{Cart, CartLineItem, Product, ProductId, StockInfo, UpdateProductAmount};
pub use utils::error::{CartError, ErrorKind, Result};
