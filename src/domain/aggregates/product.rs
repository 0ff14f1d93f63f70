//! Product Aggregate

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use rust_decimal::Decimal;
use crate::domain::value_objects::{Amount, Discount};
use crate::{CatalogError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    name: String,
    price: Decimal,
    quantity: i32,
    pricing: Pricing,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Pricing {
    #[default]
    Regular,
    Discounted(Discount),
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal, quantity: i32) -> Self {
        Self { name: name.into(), price, quantity, pricing: Pricing::Regular }
    }

    pub fn discounted(name: impl Into<String>, price: Decimal, quantity: i32, discount: impl Into<Discount>) -> Self {
        Self { pricing: Pricing::Discounted(discount.into()), ..Self::new(name, price, quantity) }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn quantity(&self) -> i32 { self.quantity }
    pub fn pricing(&self) -> Pricing { self.pricing }
    pub fn base_price(&self) -> Decimal { self.price }

    pub fn discount(&self) -> Option<Discount> {
        match self.pricing { Pricing::Discounted(d) => Some(d), Pricing::Regular => None }
    }

    /// Effective unit price: the stored price with any discount applied.
    pub fn price(&self) -> Decimal {
        match self.pricing {
            Pricing::Regular => self.price,
            Pricing::Discounted(d) => d.apply(self.price),
        }
    }

    pub fn update_price(&mut self, new_price: Decimal) { self.price = new_price; }
    pub fn update_quantity(&mut self, new_quantity: i32) { self.quantity = new_quantity; }

    pub fn set_discount(&mut self, discount: impl Into<Discount>) -> Result<()> {
        match &mut self.pricing {
            Pricing::Discounted(d) => { *d = discount.into(); Ok(()) }
            Pricing::Regular => Err(CatalogError::NotDiscounted { name: self.name.clone() }),
        }
    }

    /// Multi-line report. Discounted products append their discount lines.
    pub fn info(&self) -> String {
        let mut out = format!("Product: {}\nPrice: {}\nQuantity: {}\n", self.name, Amount(self.price), self.quantity);
        if let Pricing::Discounted(d) = self.pricing {
            out.push_str(&format!("Discount: {}\nDiscounted price: {}\n", d, Amount(self.price())));
        }
        out
    }
}

/// Shared handle to a product held by categories, carts and orders.
///
/// Clones point at the same product: an update through one handle is seen by
/// every holder.
#[derive(Clone, Debug)]
pub struct ProductHandle(Rc<RefCell<Product>>);

impl ProductHandle {
    pub fn new(product: Product) -> Self { Self(Rc::new(RefCell::new(product))) }

    pub fn borrow(&self) -> Ref<'_, Product> { self.0.borrow() }
    pub fn name(&self) -> String { self.0.borrow().name.clone() }
    pub fn price(&self) -> Decimal { self.0.borrow().price() }
    pub fn quantity(&self) -> i32 { self.0.borrow().quantity }
    pub fn info(&self) -> String { self.0.borrow().info() }

    pub fn update_price(&self, new_price: Decimal) { self.0.borrow_mut().update_price(new_price) }
    pub fn update_quantity(&self, new_quantity: i32) { self.0.borrow_mut().update_quantity(new_quantity) }
    pub fn set_discount(&self, discount: impl Into<Discount>) -> Result<()> { self.0.borrow_mut().set_discount(discount) }

    pub fn has_name(&self, name: &str) -> bool { self.0.borrow().name == name }
    pub fn ptr_eq(&self, other: &ProductHandle) -> bool { Rc::ptr_eq(&self.0, &other.0) }
}

impl From<Product> for ProductHandle {
    fn from(product: Product) -> Self { Self::new(product) }
}
