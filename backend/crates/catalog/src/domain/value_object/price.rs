//! Price Value Object

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Non-negative, finite unit price
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> CatalogResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(CatalogError::InvalidPrice);
        }
        Ok(Self(value))
    }

    pub fn from_db(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
