use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

pub type ProductId = u64;

/// A catalog product. Only `id` is interpreted; every other field is carried as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Product {
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    pub fn price(&self) -> Option<f64> {
        self.fields.get("price").and_then(Value::as_f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    pub amount: u32,
}

impl CartLineItem {
    /// Builds a line item holding one unit of `product`.
    pub fn new(mut product: Product) -> Self {
        product.fields.remove("amount");
        Self { product, amount: 1 }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn subtotal(&self) -> Option<f64> {
        self.product.price().map(|price| price * f64::from(self.amount))
    }
}

/// Ordered line items, at most one per product id.
///
/// Mutating helpers return a new `Cart` so the store can persist the
/// candidate snapshot before committing it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id() == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().filter_map(CartLineItem::subtotal).sum()
    }

    pub fn has_unique_ids(&self) -> bool {
        let mut seen = HashSet::new();
        self.items.iter().all(|item| seen.insert(item.id()))
    }

    /// All items except `product_id`, order preserved.
    pub fn without(&self, product_id: ProductId) -> Cart {
        Cart {
            items: self
                .items
                .iter()
                .filter(|item| item.id() != product_id)
                .cloned()
                .collect(),
        }
    }

    /// Appends `item`, replacing any line with the same id.
    pub fn with_item(&self, item: CartLineItem) -> Cart {
        let mut cart = self.without(item.id());
        cart.items.push(item);
        cart
    }

    /// Sets the amount of `product_id` in place. Unknown ids leave the cart as is.
    pub fn with_amount(&self, product_id: ProductId, amount: u32) -> Cart {
        Cart {
            items: self
                .items
                .iter()
                .map(|item| {
                    if item.id() == product_id {
                        CartLineItem {
                            amount,
                            ..item.clone()
                        }
                    } else {
                        item.clone()
                    }
                })
                .collect(),
        }
    }
}

impl From<Vec<CartLineItem>> for Cart {
    fn from(items: Vec<CartLineItem>) -> Self {
        Self { items }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockInfo {
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    AddProduct,
    RemoveProduct,
    UpdateProductAmount,
}

impl CartOperation {
    pub fn failure_message(self) -> &'static str {
        match self {
            CartOperation::AddProduct => "Failed to add product",
            CartOperation::RemoveProduct => "Failed to remove product",
            CartOperation::UpdateProductAmount => "Failed to update product quantity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sneaker(id: ProductId, price: f64) -> Product {
        Product::new(id)
            .with_field("title", format!("Sneaker {}", id))
            .with_field("price", price)
            .with_field("image", format!("https://cdn.example.com/{}.jpg", id))
    }

    #[test]
    fn test_line_item_serializes_flat() {
        let item = CartLineItem::new(sneaker(1, 179.9));
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 1,
                "title": "Sneaker 1",
                "price": 179.9,
                "image": "https://cdn.example.com/1.jpg",
                "amount": 1
            })
        );
    }

    #[test]
    fn test_cart_deserializes_minimal_items() {
        let cart: Cart = serde_json::from_str(r#"[{"id": 7, "amount": 2}]"#).unwrap();

        assert_eq!(cart.len(), 1);
        let item = cart.get(7).unwrap();
        assert_eq!(item.amount, 2);
        assert!(item.product.fields.is_empty());
        assert_eq!(item.subtotal(), None);
    }

    #[test]
    fn test_new_line_item_drops_catalog_amount() {
        let product = sneaker(2, 10.0).with_field("amount", 99);
        let item = CartLineItem::new(product);

        assert_eq!(item.amount, 1);
        let text = serde_json::to_string(&item).unwrap();
        assert_eq!(text.matches("\"amount\"").count(), 1);
    }

    #[test]
    fn test_with_item_moves_existing_to_end() {
        let cart = Cart::from(vec![
            CartLineItem::new(sneaker(1, 1.0)),
            CartLineItem::new(sneaker(2, 2.0)),
        ]);

        let mut bumped = cart.get(1).unwrap().clone();
        bumped.amount = 2;
        let updated = cart.with_item(bumped);

        let ids: Vec<_> = updated.items().iter().map(CartLineItem::id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(updated.get(1).unwrap().amount, 2);
        assert!(updated.has_unique_ids());
    }

    #[test]
    fn test_with_amount_keeps_order_and_ignores_unknown_ids() {
        let cart = Cart::from(vec![
            CartLineItem::new(sneaker(1, 1.0)),
            CartLineItem::new(sneaker(2, 2.0)),
        ]);

        let updated = cart.with_amount(1, 4);
        assert_eq!(updated.items()[0].id(), 1);
        assert_eq!(updated.items()[0].amount, 4);
        assert_eq!(updated.items()[1].amount, 1);

        assert_eq!(cart.with_amount(42, 3), cart);
    }

    #[test]
    fn test_without_preserves_order() {
        let cart = Cart::from(vec![
            CartLineItem::new(sneaker(1, 1.0)),
            CartLineItem::new(sneaker(2, 2.0)),
            CartLineItem::new(sneaker(3, 3.0)),
        ]);

        let ids: Vec<_> = cart.without(2).items().iter().map(CartLineItem::id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_total_sums_priced_items() {
        let mut first = CartLineItem::new(sneaker(1, 10.5));
        first.amount = 2;
        let second = CartLineItem::new(sneaker(2, 4.0));
        let unpriced = CartLineItem::new(Product::new(3));

        let cart = Cart::from(vec![first, second, unpriced]);
        assert!((cart.total() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_duplicate_ids_detected() {
        let cart: Cart =
            serde_json::from_str(r#"[{"id": 1, "amount": 1}, {"id": 1, "amount": 2}]"#).unwrap();
        assert!(!cart.has_unique_ids());
    }
}
