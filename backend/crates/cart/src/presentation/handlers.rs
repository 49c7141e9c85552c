//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use std::sync::Arc;

use auth::CurrentUser;

use crate::application::{AddToCartUseCase, RemoveCartItemsInput, RemoveCartItemsUseCase};
use crate::domain::repository::CartRepository;
use crate::error::CartResult;
use crate::presentation::dto::{AddCartRequest, CartResponse, RemoveCartItemsRequest};

/// Shared state for cart handlers
#[derive(Clone)]
pub struct CartAppState<R>
where
    R: CartRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// A request without a JSON content type is read as an empty object
fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> CartResult<T> {
    match payload {
        Ok(Json(req)) => Ok(req),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

/// POST /add-cart
pub async fn add_cart<R>(
    State(state): State<CartAppState<R>>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<AddCartRequest>, JsonRejection>,
) -> CartResult<Json<CartResponse>>
where
    R: CartRepository + Clone + Send + Sync + 'static,
{
    let req = body_or_default(payload)?;

    let cart = AddToCartUseCase::new(state.repo.clone())
        .execute(&user, req.into())
        .await?;

    Ok(Json(CartResponse::from(cart)))
}

/// POST /remove-cartitems
pub async fn remove_cart_items<R>(
    State(state): State<CartAppState<R>>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<RemoveCartItemsRequest>, JsonRejection>,
) -> CartResult<Json<CartResponse>>
where
    R: CartRepository + Clone + Send + Sync + 'static,
{
    let req = body_or_default(payload)?;
    let input = RemoveCartItemsInput {
        product_ids: req.into_product_ids()?,
    };

    let cart = RemoveCartItemsUseCase::new(state.repo.clone())
        .execute(&user, input)
        .await?;

    Ok(Json(CartResponse::from(cart)))
}
