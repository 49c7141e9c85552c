//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use auth::CurrentUser;
use kernel::id::ProductId;

use crate::application::{
    CreateProductUseCase, DeleteProductUseCase, ListProductsUseCase, UpdateProductUseCase,
    require_admin,
};
use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};
use crate::presentation::dto::{MessageResponse, ProductRequest, ProductResponse};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

fn parse_product_id(raw: &str) -> CatalogResult<ProductId> {
    ProductId::parse(raw).map_err(|_| CatalogError::InvalidProductId)
}

// ============================================================================
// Queries
// ============================================================================

/// GET /products
pub async fn list_products<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<Vec<ProductResponse>>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let products = ListProductsUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

// ============================================================================
// Mutations (admin only)
// ============================================================================
//
// Role is checked before the path or body is read.

/// POST /add-product
pub async fn add_product<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> CatalogResult<impl IntoResponse>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    require_admin(&user)?;
    let Json(req) = payload?;

    let product = CreateProductUseCase::new(state.repo.clone())
        .execute(&user, req.into())
        .await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// PATCH /update-product/{id}
pub async fn update_product<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> CatalogResult<Json<ProductResponse>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    require_admin(&user)?;
    let product_id = parse_product_id(&id)?;
    let Json(req) = payload?;

    let product = UpdateProductUseCase::new(state.repo.clone())
        .execute(&user, &product_id, req.into())
        .await?;

    Ok(Json(ProductResponse::from(product)))
}

/// DELETE /delete-product/{id}
pub async fn delete_product<R>(
    State(state): State<CatalogAppState<R>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> CatalogResult<Json<MessageResponse>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    require_admin(&user)?;
    let product_id = parse_product_id(&id)?;

    DeleteProductUseCase::new(state.repo.clone())
        .execute(&user, &product_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Product deleted successfully".to_string(),
    }))
}
