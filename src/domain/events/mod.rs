//! Domain events
use rust_decimal::Decimal;

#[derive(Clone, Debug, PartialEq)]
pub enum DomainEvent {
    Cart(CartEvent),
    Order(OrderEvent),
}

#[derive(Clone, Debug, PartialEq)]
pub enum CartEvent {
    ProductAdded { name: String, line_total: Decimal },
    ProductRemoved { name: String, removed: usize, line_total: Decimal },
    RemovalMissed { name: String },
}

#[derive(Clone, Debug, PartialEq)]
pub enum OrderEvent {
    Created { order_id: u64, total: Decimal, products: usize },
    StatusUpdated { order_id: u64, from: String, to: String },
}
