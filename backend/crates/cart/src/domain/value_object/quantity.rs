//! Quantity Value Object

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::{CartError, CartResult};

/// Units of one product in a cart, at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(transparent)]
pub struct Quantity(i32);

impl Quantity {
    pub fn new(value: i64) -> CartResult<Self> {
        i32::try_from(value)
            .ok()
            .filter(|v| *v >= 1)
            .map(Self)
            .ok_or(CartError::InvalidQuantity)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(1)
    }
}
