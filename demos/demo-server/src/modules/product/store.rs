use super::model::{Product, ProductInput};
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

/// In-memory product table.
#[derive(Default)]
pub struct ProductStore {
    products: DashMap<String, Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All products, oldest first.
    pub fn list(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.products.iter().map(|p| p.value().clone()).collect();
        products.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        products
    }

    pub fn get(&self, id: &str) -> Option<Product> {
        self.products.get(id).map(|p| p.clone())
    }

    pub fn insert(&self, input: ProductInput) -> Product {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            price: input.price,
            created_at: now,
            updated_at: now,
        };
        self.products.insert(product.id.clone(), product.clone());
        product
    }

    /// Replace the fields of an existing product.
    pub fn replace(&self, id: &str, input: ProductInput) -> Option<Product> {
        let mut entry = self.products.get_mut(id)?;
        entry.name = input.name;
        entry.price = input.price;
        entry.updated_at = Utc::now();
        Some(entry.clone())
    }

    pub fn remove(&self, id: &str) -> Option<Product> {
        self.products.remove(id).map(|(_, product)| product)
    }
}
