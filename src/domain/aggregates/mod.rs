//! Aggregates module
pub mod product;
pub mod category;
pub mod cart;
pub mod order;
pub mod user;

pub use product::{Pricing, Product, ProductHandle};
pub use category::Category;
pub use cart::ShoppingCart;
pub use order::{Order, DEFAULT_STATUS};
pub use user::User;
