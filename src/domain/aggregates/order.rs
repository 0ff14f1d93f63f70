//! Order Aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use crate::domain::aggregates::{ProductHandle, ShoppingCart};
use crate::domain::events::{DomainEvent, OrderEvent};
use crate::domain::value_objects::Amount;

pub const DEFAULT_STATUS: &str = "In process";

#[derive(Clone, Debug)]
pub struct Order {
    id: u64,
    products: Vec<ProductHandle>,
    total: Decimal,
    status: String,
    placed_at: DateTime<Utc>,
    events: Vec<DomainEvent>,
}

impl Order {
    pub fn new(id: u64) -> Self {
        Self { id, products: vec![], total: Decimal::ZERO, status: DEFAULT_STATUS.to_string(), placed_at: Utc::now(), events: vec![] }
    }

    pub fn from_cart(id: u64, cart: &ShoppingCart) -> Self {
        let mut order = Self::new(id);
        order.create_order(cart);
        order
    }

    pub fn id(&self) -> u64 { self.id }
    pub fn products(&self) -> &[ProductHandle] { &self.products }
    pub fn total(&self) -> Decimal { self.total }
    pub fn status(&self) -> &str { &self.status }
    pub fn placed_at(&self) -> DateTime<Utc> { self.placed_at }

    /// Copies the cart's product list and total as they are right now.
    pub fn create_order(&mut self, cart: &ShoppingCart) {
        self.products = cart.products();
        self.total = cart.calculate_total();
        self.placed_at = Utc::now();
        self.raise_event(DomainEvent::Order(OrderEvent::Created { order_id: self.id, total: self.total, products: self.products.len() }));
    }

    /// Any status text is accepted.
    pub fn update_status(&mut self, status: impl Into<String>) {
        let to = status.into();
        let from = std::mem::replace(&mut self.status, to.clone());
        self.raise_event(DomainEvent::Order(OrderEvent::StatusUpdated { order_id: self.id, from, to }));
    }

    pub fn order_details(&self) -> String {
        let mut out = format!("Order ID: {}\nStatus: {}\nTotal Amount: {}\nProducts:\n", self.id, self.status, Amount(self.total));
        for product in &self.products {
            out.push_str(&product.info());
            out.push('\n');
        }
        out
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: DomainEvent) { self.events.push(e); }
}
