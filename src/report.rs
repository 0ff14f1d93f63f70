//! Serializable views of the catalog for JSON output.
//!
//! Text reports live on the aggregates themselves (`Product::info`,
//! `Order::order_details`, ...). These views carry the same data in a shape
//! `serde_json` can render.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::aggregates::{Category, Order, Pricing, Product, ProductHandle, ShoppingCart, User};
use crate::Result;

/// Pretty-printed JSON rendering of any report.
pub fn to_json_pretty<T: Serialize>(report: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductReport {
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<Decimal>,
}

impl From<&Product> for ProductReport {
    fn from(p: &Product) -> Self {
        let (discount, discounted_price) = match p.pricing() {
            Pricing::Regular => (None, None),
            Pricing::Discounted(d) => (Some(d.percent()), Some(p.price())),
        };
        Self { name: p.name().to_string(), price: p.base_price(), quantity: p.quantity(), discount, discounted_price }
    }
}

impl From<&ProductHandle> for ProductReport {
    fn from(h: &ProductHandle) -> Self { Self::from(&*h.borrow()) }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub name: String,
    pub product_count: usize,
    pub products: Vec<ProductReport>,
}

impl From<&Category> for CategoryReport {
    fn from(c: &Category) -> Self {
        Self { name: c.name().to_string(), product_count: c.product_count(), products: c.products().iter().map(ProductReport::from).collect() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CartReport {
    pub total: Decimal,
    pub products: Vec<ProductReport>,
}

impl From<&ShoppingCart> for CartReport {
    fn from(c: &ShoppingCart) -> Self {
        Self { total: c.calculate_total(), products: c.products().iter().map(ProductReport::from).collect() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderReport {
    pub order_id: u64,
    pub status: String,
    pub total: Decimal,
    pub placed_at: DateTime<Utc>,
    pub products: Vec<ProductReport>,
}

impl From<&Order> for OrderReport {
    fn from(o: &Order) -> Self {
        Self {
            order_id: o.id(),
            status: o.status().to_string(),
            total: o.total(),
            placed_at: o.placed_at(),
            products: o.products().iter().map(ProductReport::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderHistoryReport {
    pub user_id: u64,
    pub name: String,
    pub orders: Vec<OrderReport>,
}

impl From<&User> for OrderHistoryReport {
    fn from(u: &User) -> Self {
        Self { user_id: u.id(), name: u.name().to_string(), orders: u.order_history().iter().map(OrderReport::from).collect() }
    }
}
