use crate::core::cart_store::CartStore;
use crate::core::{
    Cart, CartOperation, CatalogApi, Notifier, ProductId, Storage, UpdateProductAmount,
};
use crate::utils::error::{CartError, Result};

/// A cart store paired with the sink that reports its failures.
///
/// Built once per session and handed by reference to whatever renders or
/// mutates the cart.
pub struct CartSession<A: CatalogApi, S: Storage, N: Notifier> {
    store: CartStore<A, S>,
    notifier: N,
}

impl<A: CatalogApi, S: Storage, N: Notifier> CartSession<A, S, N> {
    pub fn new(store: CartStore<A, S>, notifier: N) -> Self {
        Self { store, notifier }
    }

    pub fn cart(&self) -> &Cart {
        self.store.cart()
    }

    pub async fn add_product(&mut self, product_id: ProductId) -> Result<Cart> {
        let result = self.store.add_product(product_id).await;
        self.report(CartOperation::AddProduct, result)
    }

    pub async fn remove_product(&mut self, product_id: ProductId) -> Result<Cart> {
        let result = self.store.remove_product(product_id).await;
        self.report(CartOperation::RemoveProduct, result)
    }

    pub async fn update_product_amount(&mut self, request: UpdateProductAmount) -> Result<Cart> {
        let result = self.store.update_product_amount(request).await;
        self.report(CartOperation::UpdateProductAmount, result)
    }

    fn report(&self, operation: CartOperation, result: Result<Cart>) -> Result<Cart> {
        if let Err(e) = &result {
            tracing::debug!("{:?} failed: {}", operation, e);
            self.notify(operation, e);
        }
        result
    }

    fn notify(&self, operation: CartOperation, error: &CartError) {
        self.notifier.error(error.user_message(operation));
    }
}
