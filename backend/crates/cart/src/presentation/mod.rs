//! Presentation Layer
//!
//! HTTP handlers, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::CartAppState;
pub use router::{cart_router, cart_router_generic};
