//! Demonstration flow: build a small catalog, fill a cart and place an order.

use std::io::Write;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::app::AppContext;
use crate::config::ReportFormat;
use crate::domain::aggregates::{Category, Product, ProductHandle, ShoppingCart, User};
use crate::domain::events::DomainEvent;
use crate::report::{self, CartReport, CategoryReport, OrderHistoryReport, ProductReport};

#[derive(Debug, Serialize)]
struct DemoReport {
    products: Vec<ProductReport>,
    category: CategoryReport,
    cart: CartReport,
    history: OrderHistoryReport,
}

pub fn run(ctx: &AppContext, out: &mut impl Write) -> Result<()> {
    let guitar = ProductHandle::new(Product::new("Guitar", Decimal::new(1400, 0), 10));
    let electric_bass = ProductHandle::new(Product::discounted("Electric Bass Guitar", Decimal::new(2300, 0), 10, Decimal::new(15, 0)));

    let mut category = Category::new("Instruments");
    category.add_product(guitar.clone());
    category.add_product(electric_bass.clone());

    let mut cart = ShoppingCart::new();
    cart.add_product(guitar.clone());
    cart.add_product(electric_bass.clone());
    tracing::info!(products = cart.len(), total = %cart.calculate_total(), "Cart filled");

    let mut user = User::new(1, "Artem");
    user.add_to_cart(guitar.clone(), &mut cart);
    user.add_to_cart(electric_bass.clone(), &mut cart);
    let order_id = user.place_order(&cart, &ctx.order_ids);

    log_events(cart.take_events());
    if let Some(order) = user.order_mut(order_id) {
        log_events(order.take_events());
    }

    match ctx.config.format {
        ReportFormat::Text => {
            write!(out, "{}", guitar.info())?;
            write!(out, "{}", electric_bass.info())?;
            let as_catalog_item: ProductHandle = electric_bass.clone();
            write!(out, "{}", as_catalog_item.info())?;
            writeln!(out, "{}", category.list_products())?;
            writeln!(out, "Products in the cart:")?;
            for product in cart.products() {
                writeln!(out, "{}", product.info())?;
            }
            write!(out, "{}", user.view_order_history())?;
        }
        ReportFormat::Json => {
            let demo_report = DemoReport {
                products: vec![ProductReport::from(&guitar), ProductReport::from(&electric_bass)],
                category: CategoryReport::from(&category),
                cart: CartReport::from(&cart),
                history: OrderHistoryReport::from(&user),
            };
            let json = report::to_json_pretty(&demo_report).context("failed to render JSON report")?;
            writeln!(out, "{}", json)?;
        }
    }
    out.flush().context("failed to flush report output")?;
    Ok(())
}

fn log_events(events: Vec<DomainEvent>) {
    for event in events {
        tracing::debug!(?event, "Domain event");
    }
}
