use crate::core::{Cart, CartLineItem, CatalogApi, ProductId, Storage, UpdateProductAmount};
use crate::utils::error::{CartError, Result};

pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";

/// Holds the session's cart and mirrors every committed change to `Storage`.
///
/// Operations take `&mut self`, so at most one mutation is in flight per store.
pub struct CartStore<A: CatalogApi, S: Storage> {
    api: A,
    storage: S,
    key: String,
    cart: Cart,
}

impl<A: CatalogApi, S: Storage> CartStore<A, S> {
    /// Seeds the cart from the value stored under `key`.
    ///
    /// A missing value, a read failure, an unparsable value or a value with
    /// duplicate product ids all start the session with an empty cart.
    pub async fn load(api: A, storage: S, key: impl Into<String>) -> Self {
        let key = key.into();

        let cart = match storage.get_item(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<Cart>(&raw) {
                Ok(cart) if cart.has_unique_ids() => {
                    tracing::debug!("Restored cart with {} items from '{}'", cart.len(), key);
                    cart
                }
                Ok(_) => {
                    tracing::warn!("Stored cart under '{}' has duplicate products, starting empty", key);
                    Cart::new()
                }
                Err(e) => {
                    tracing::warn!("Stored cart under '{}' is not valid JSON ({}), starting empty", key, e);
                    Cart::new()
                }
            },
            Ok(None) => {
                tracing::debug!("No stored cart under '{}'", key);
                Cart::new()
            }
            Err(e) => {
                tracing::warn!("Failed to read stored cart '{}': {}", key, e);
                Cart::new()
            }
        };

        Self {
            api,
            storage,
            key,
            cart,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub async fn add_product(&mut self, product_id: ProductId) -> Result<Cart> {
        let existing = self.cart.get(product_id).cloned();

        tracing::debug!("Checking stock for product {}", product_id);
        let total_stock = self.api.stock(product_id).await?.amount;

        let updated = match existing {
            Some(mut item) => {
                let requested = i64::from(item.amount) + 1;
                item.amount = Self::checked_amount(product_id, requested, total_stock)?;
                self.cart.with_item(item)
            }
            None => {
                let product = self.api.product(product_id).await?;
                Self::checked_amount(product_id, 1, total_stock)?;
                self.cart.with_item(CartLineItem::new(product))
            }
        };

        tracing::info!("Added product {} to cart", product_id);
        self.commit(updated).await
    }

    pub async fn remove_product(&mut self, product_id: ProductId) -> Result<Cart> {
        if !self.cart.contains(product_id) {
            return Err(CartError::ProductNotFound { product_id });
        }

        let updated = self.cart.without(product_id);
        tracing::info!("Removed product {} from cart", product_id);
        self.commit(updated).await
    }

    /// Sets the amount of a line item after checking it against remote stock.
    ///
    /// An id that is not in the cart is not rejected: the unchanged cart is
    /// persisted and returned.
    pub async fn update_product_amount(&mut self, request: UpdateProductAmount) -> Result<Cart> {
        let UpdateProductAmount { product_id, amount } = request;

        tracing::debug!("Checking stock for product {}", product_id);
        let total_stock = self.api.stock(product_id).await?.amount;
        let amount = Self::checked_amount(product_id, amount, total_stock)?;

        if !self.cart.contains(product_id) {
            tracing::debug!("Product {} not in cart, amount update has no effect", product_id);
        }

        let updated = self.cart.with_amount(product_id, amount);
        tracing::info!("Set amount of product {} to {}", product_id, amount);
        self.commit(updated).await
    }

    fn checked_amount(product_id: ProductId, requested: i64, available: i64) -> Result<u32> {
        let out_of_stock = || CartError::OutOfStock {
            product_id,
            requested,
            available,
        };

        if requested <= 0 || requested > available {
            tracing::warn!(
                "Requested {} of product {} but only {} in stock",
                requested,
                product_id,
                available
            );
            return Err(out_of_stock());
        }

        u32::try_from(requested).map_err(|_| out_of_stock())
    }

    // The snapshot is written before it replaces the in-memory cart, so a
    // failed write leaves both sides on the previous cart.
    async fn commit(&mut self, updated: Cart) -> Result<Cart> {
        let payload = serde_json::to_string(&updated)?;
        tracing::debug!("Persisting cart ({} bytes) under '{}'", payload.len(), self.key);
        self.storage.set_item(&self.key, &payload).await?;

        self.cart = updated;
        Ok(self.cart.clone())
    }
}
