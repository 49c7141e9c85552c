//! Application Layer
//!
//! Use cases for the per-user cart.

pub mod add_to_cart;
pub mod remove_cart_items;

// Re-exports
pub use add_to_cart::{AddToCartInput, AddToCartUseCase, CartItemInput};
pub use remove_cart_items::{RemoveCartItemsInput, RemoveCartItemsUseCase};
