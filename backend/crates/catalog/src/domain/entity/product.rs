//! Product Entity

use chrono::{DateTime, Utc};
use kernel::id::ProductId;

use crate::domain::value_object::{price::Price, product_name::ProductName, stock::Stock};

/// Catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Exposed as `_id`
    pub product_id: ProductId,
    pub name: ProductName,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Price,
    pub stock: Stock,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product
    pub fn new(
        name: ProductName,
        description: Option<String>,
        category: Option<String>,
        price: Price,
        stock: Stock,
    ) -> Self {
        let now = Utc::now();

        Self {
            product_id: ProductId::new(),
            name,
            description,
            category,
            price,
            stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, touching `updated_at`
    pub fn apply(&mut self, patch: &ProductPatch, now: DateTime<Utc>) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(category) = &patch.category {
            self.category = Some(category.clone());
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        self.updated_at = now;
    }
}

/// Validated partial update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<ProductName>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<Price>,
    pub stock: Option<Stock>,
}
