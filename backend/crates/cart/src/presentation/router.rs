//! Cart Router

use axum::{Router, middleware, routing::post};
use std::sync::Arc;

use auth::{AuthMiddlewareState, PgUserRepository, UserRepository, require_auth};

use crate::domain::repository::CartRepository;
use crate::infra::postgres::PgCartRepository;
use crate::presentation::handlers::{self, CartAppState};

/// Create the Cart router with PostgreSQL repositories
pub fn cart_router(repo: PgCartRepository, auth: AuthMiddlewareState<PgUserRepository>) -> Router {
    cart_router_generic(repo, auth)
}

/// Create a generic Cart router for any repository implementation
///
/// Every route requires a session; the cart is always the caller's own.
pub fn cart_router_generic<R, U>(repo: R, auth: AuthMiddlewareState<U>) -> Router
where
    R: CartRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = CartAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/add-cart", post(handlers::add_cart::<R>))
        .route("/remove-cartitems", post(handlers::remove_cart_items::<R>))
        .route_layer(middleware::from_fn_with_state(auth, require_auth::<U>))
        .with_state(state)
}
