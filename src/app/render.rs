use crate::core::Cart;

/// Plain-text listing of the cart with subtotals and a grand total.
pub fn cart_summary(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Cart is empty".to_string();
    }

    let mut lines = Vec::with_capacity(cart.len() + 2);
    lines.push(format!("Cart ({} products)", cart.len()));

    for item in cart.items() {
        let title = item.product.title().unwrap_or("-");
        let line = match (item.product.price(), item.subtotal()) {
            (Some(price), Some(subtotal)) => format!(
                "  #{} {} x{} @ {:.2} = {:.2}",
                item.id(),
                title,
                item.amount,
                price,
                subtotal
            ),
            _ => format!("  #{} {} x{}", item.id(), title, item.amount),
        };
        lines.push(line);
    }

    lines.push(format!("Total: {:.2}", cart.total()));
    lines.join("\n")
}
