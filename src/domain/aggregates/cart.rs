//! Cart Aggregate

use rust_decimal::Decimal;
use crate::domain::aggregates::ProductHandle;
use crate::domain::events::{CartEvent, DomainEvent};
use crate::domain::value_objects::line_total;
use crate::{CatalogError, Result};

/// Products picked for purchase with a cached running total.
///
/// The total is adjusted on each add and remove and never recomputed. Adds use
/// the price at insertion while removals use the price at removal, so a price
/// change in between leaves the total off by the difference.
#[derive(Clone, Debug, Default)]
pub struct ShoppingCart {
    products: Vec<ProductHandle>,
    total: Decimal,
    events: Vec<DomainEvent>,
}

impl ShoppingCart {
    pub fn new() -> Self { Self::default() }

    pub fn products(&self) -> Vec<ProductHandle> { self.products.clone() }
    pub fn calculate_total(&self) -> Decimal { self.total }
    pub fn len(&self) -> usize { self.products.len() }
    pub fn is_empty(&self) -> bool { self.products.is_empty() }

    pub fn add_product(&mut self, product: ProductHandle) {
        let amount = line_total(product.price(), product.quantity());
        self.total = self.total.saturating_add(amount);
        self.raise_event(DomainEvent::Cart(CartEvent::ProductAdded { name: product.name(), line_total: amount }));
        self.products.push(product);
    }

    /// Removes every entry sharing `product`'s name, deducting its current line total once.
    pub fn remove_product(&mut self, product: &ProductHandle) -> Result<()> {
        let name = product.name();
        let before = self.products.len();
        self.products.retain(|p| !p.has_name(&name));
        let removed = before - self.products.len();
        if removed == 0 {
            tracing::warn!(product = %name, "Product not found in the cart.");
            self.raise_event(DomainEvent::Cart(CartEvent::RemovalMissed { name: name.clone() }));
            return Err(CatalogError::ProductNotFound { name });
        }
        let amount = line_total(product.price(), product.quantity());
        self.total = self.total.saturating_sub(amount);
        self.raise_event(DomainEvent::Cart(CartEvent::ProductRemoved { name, removed, line_total: amount }));
        Ok(())
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: DomainEvent) { self.events.push(e); }
}
