//! Retail Catalog
//!
//! In-memory model of a small retail catalog.
//!
//! ## Features
//! - Products with regular or discounted pricing
//! - Categories of shared products
//! - Shopping cart with a running total
//! - Orders snapshotted from a cart
//! - Users with an order history

use thiserror::Error;

pub mod app;
pub mod config;
pub mod demo;
pub mod domain;
pub mod logging;
pub mod report;

pub use app::AppContext;
pub use config::{Config, ReportFormat};
pub use domain::aggregates::{Category, Order, Pricing, Product, ProductHandle, ShoppingCart, User};
pub use domain::ids::OrderIdGenerator;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Product not found in the cart: {name}")]
    ProductNotFound { name: String },

    #[error("Product has no discount: {name}")]
    NotDiscounted { name: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
