//! User Aggregate

use crate::domain::aggregates::{Order, ProductHandle, ShoppingCart};
use crate::domain::ids::OrderIdGenerator;

#[derive(Clone, Debug)]
pub struct User {
    id: u64,
    name: String,
    order_history: Vec<Order>,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>) -> Self { Self { id, name: name.into(), order_history: vec![] } }

    pub fn id(&self) -> u64 { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn order_history(&self) -> &[Order] { &self.order_history }
    pub fn order_mut(&mut self, order_id: u64) -> Option<&mut Order> { self.order_history.iter_mut().find(|o| o.id() == order_id) }

    pub fn add_to_cart(&self, product: ProductHandle, cart: &mut ShoppingCart) { cart.add_product(product); }

    /// Snapshots `cart` into a new order. The cart is left as it was.
    pub fn place_order(&mut self, cart: &ShoppingCart, ids: &OrderIdGenerator) -> u64 {
        let order = Order::from_cart(ids.next_id(), cart);
        let id = order.id();
        tracing::info!(user = %self.name, order_id = id, total = %order.total(), "Order placed");
        self.order_history.push(order);
        id
    }

    pub fn view_order_history(&self) -> String {
        let mut out = format!("Order History for {}:\n", self.name);
        for order in &self.order_history {
            out.push_str(&order.order_details());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::Product;
    use rust_decimal::Decimal;

    #[test]
    fn test_place_order_snapshots_cart() {
        let ids = OrderIdGenerator::new();
        let mut user = User::new(1, "Artem");
        let mut cart = ShoppingCart::new();
        user.add_to_cart(Product::new("Guitar", Decimal::new(1400, 0), 10).into(), &mut cart);
        let id = user.place_order(&cart, &ids);
        assert_eq!(id, 1);
        assert_eq!(user.order_history().len(), 1);
        assert_eq!(user.order_history()[0].total(), Decimal::new(14000, 0));
        assert_eq!(cart.len(), 1);
    }
    #[test]
    fn test_placing_twice_duplicates_order() {
        let ids = OrderIdGenerator::new();
        let mut user = User::new(1, "Artem");
        let mut cart = ShoppingCart::new();
        user.add_to_cart(Product::new("Guitar", Decimal::new(1400, 0), 10).into(), &mut cart);
        let first = user.place_order(&cart, &ids);
        let second = user.place_order(&cart, &ids);
        assert!(second > first);
        let history = user.order_history();
        assert_eq!(history[0].total(), history[1].total());
        assert_eq!(history[0].products().len(), history[1].products().len());
    }
    #[test]
    fn test_ids_unique_across_users() {
        let ids = OrderIdGenerator::new();
        let cart = ShoppingCart::new();
        let mut a = User::new(1, "Artem");
        let mut b = User::new(2, "Olena");
        let first = a.place_order(&cart, &ids);
        let second = b.place_order(&cart, &ids);
        let third = a.place_order(&cart, &ids);
        assert!(first < second && second < third);
    }
    #[test]
    fn test_order_mut_updates_status() {
        let ids = OrderIdGenerator::starting_at(10);
        let mut user = User::new(1, "Artem");
        let id = user.place_order(&ShoppingCart::new(), &ids);
        user.order_mut(id).unwrap().update_status("Shipped");
        assert_eq!(user.order_history()[0].status(), "Shipped");
        assert!(user.order_mut(99).is_none());
    }
    #[test]
    fn test_view_order_history() {
        let ids = OrderIdGenerator::new();
        let mut user = User::new(1, "Artem");
        let empty = user.view_order_history();
        assert_eq!(empty, "Order History for Artem:\n");
        user.place_order(&ShoppingCart::new(), &ids);
        assert_eq!(
            user.view_order_history(),
            "Order History for Artem:\nOrder ID: 1\nStatus: In process\nTotal Amount: 0.000000\nProducts:\n\n"
        );
    }
}
