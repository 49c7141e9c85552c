//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::ProductId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::product::{Product, ProductPatch};
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::{price::Price, product_name::ProductName, stock::Stock};
use crate::error::CatalogResult;

/// PostgreSQL-backed product repository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Product Repository Implementation
// ============================================================================

impl ProductRepository for PgProductRepository {
    async fn list(&self) -> CatalogResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT
                product_id,
                name,
                description,
                category,
                price,
                stock,
                created_at,
                updated_at
            FROM products
            ORDER BY created_at, product_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn create(&self, product: &Product) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO products (
                product_id,
                name,
                description,
                category,
                price,
                stock,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(product.product_id.as_uuid())
        .bind(product.name.as_str())
        .bind(product.description.as_deref())
        .bind(product.category.as_deref())
        .bind(product.price.value())
        .bind(product.stock.value())
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(
        &self,
        product_id: &ProductId,
        patch: &ProductPatch,
    ) -> CatalogResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                price = COALESCE($5, price),
                stock = COALESCE($6, stock),
                updated_at = $7
            WHERE product_id = $1
            RETURNING
                product_id,
                name,
                description,
                category,
                price,
                stock,
                created_at,
                updated_at
            "#,
        )
        .bind(product_id.as_uuid())
        .bind(patch.name.as_ref().map(|n| n.as_str()))
        .bind(patch.description.as_deref())
        .bind(patch.category.as_deref())
        .bind(patch.price.map(|p| p.value()))
        .bind(patch.stock.map(|s| s.value()))
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn delete(&self, product_id: &ProductId) -> CatalogResult<bool> {
        let deleted = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(product_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: Uuid,
    name: String,
    description: Option<String>,
    category: Option<String>,
    price: f64,
    stock: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            product_id: ProductId::from_uuid(self.product_id),
            name: ProductName::from_db(self.name),
            description: self.description,
            category: self.category,
            price: Price::from_db(self.price),
            stock: Stock::from_db(self.stock),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
