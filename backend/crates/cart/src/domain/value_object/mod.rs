//! Value Object Module

pub mod quantity;
