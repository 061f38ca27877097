use crate::domain::model::{Product, ProductId, StockInfo};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Remote product catalog and stock service.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn stock(&self, product_id: ProductId) -> Result<StockInfo>;
    async fn product(&self, product_id: ProductId) -> Result<Product>;
}

/// Durable string key-value slot, the local-storage of the host.
pub trait Storage: Send + Sync {
    fn get_item(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set_item(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Fire-and-forget sink for user-facing messages.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn storage_path(&self) -> &str;
    fn storage_key(&self) -> &str;
}
