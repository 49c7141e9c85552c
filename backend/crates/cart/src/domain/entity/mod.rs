//! Entity Module

pub mod cart;
