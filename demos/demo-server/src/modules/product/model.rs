use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /products` and `PUT /products/{id}`.
#[derive(Debug, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
}

impl ProductInput {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("price must be a non-negative number".to_string());
        }
        Ok(())
    }
}
