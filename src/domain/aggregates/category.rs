//! Category Aggregate

use crate::domain::aggregates::ProductHandle;

#[derive(Clone, Debug)]
pub struct Category {
    name: String,
    products: Vec<ProductHandle>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self { Self { name: name.into(), products: vec![] } }

    pub fn name(&self) -> &str { &self.name }
    pub fn products(&self) -> &[ProductHandle] { &self.products }
    pub fn product_count(&self) -> usize { self.products.len() }

    pub fn add_product(&mut self, product: ProductHandle) { self.products.push(product); }

    /// Removes every product named exactly `name`; returns how many went.
    pub fn remove_product(&mut self, name: &str) -> usize {
        let before = self.products.len();
        self.products.retain(|p| !p.has_name(name));
        before - self.products.len()
    }

    pub fn list_products(&self) -> String {
        let mut out = format!("Category: {}\n", self.name);
        for product in &self.products {
            out.push_str(&product.info());
            out.push('\n');
        }
        out
    }
}
