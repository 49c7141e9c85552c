//! Stock Value Object

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Units on hand, never negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(transparent)]
pub struct Stock(i32);

impl Stock {
    pub fn new(value: i64) -> CatalogResult<Self> {
        i32::try_from(value)
            .ok()
            .filter(|v| *v >= 0)
            .map(Self)
            .ok_or(CatalogError::InvalidStock)
    }

    pub fn from_db(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_bounds() {
        assert_eq!(Stock::default().value(), 0);
        assert_eq!(Stock::new(12).unwrap().value(), 12);
        assert!(matches!(Stock::new(-1), Err(CatalogError::InvalidStock)));
        assert!(Stock::new(i64::from(i32::MAX) + 1).is_err());
    }
}
