pub mod cart_store;

pub use crate::domain::model::{
    Cart, CartLineItem, CartOperation, Product, ProductId, StockInfo, UpdateProductAmount,
};
pub use crate::domain::ports::{CatalogApi, ConfigProvider, Notifier, Storage};
pub use crate::utils::error::Result;
