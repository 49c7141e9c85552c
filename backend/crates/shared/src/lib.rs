//! Shared Kernel
//!
//! Vocabulary shared by every bounded context of the storefront:
//! - The wire-level error type and its status classification
//! - Typed identifiers for users, products and carts
//!
//! Only things whose meaning is identical across `auth`, `catalog`
//! and `cart` belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
