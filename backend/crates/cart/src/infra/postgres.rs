//! PostgreSQL Repository Implementations
//!
//! Items are stored as a JSONB array of `{"productId", "quantity"}` objects.

use chrono::{DateTime, Utc};
use kernel::id::{CartId, ProductId, UserId};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entity::cart::{Cart, CartItem};
use crate::domain::repository::CartRepository;
use crate::error::CartResult;

/// PostgreSQL-backed cart repository
#[derive(Clone)]
pub struct PgCartRepository {
    pool: PgPool,
}

impl PgCartRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Cart Repository Implementation
// ============================================================================

impl CartRepository for PgCartRepository {
    async fn upsert_items(&self, user_id: &UserId, items: &[CartItem]) -> CartResult<Cart> {
        let now = Utc::now();

        let row = sqlx::query_as::<_, CartRow>(
            r#"
            INSERT INTO carts (cart_id, user_id, items, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            ON CONFLICT (user_id) DO UPDATE SET
                items = EXCLUDED.items,
                updated_at = EXCLUDED.updated_at
            RETURNING cart_id, user_id, items, created_at, updated_at
            "#,
        )
        .bind(CartId::new().as_uuid())
        .bind(user_id.as_uuid())
        .bind(Json(items))
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_cart())
    }

    async fn remove_items(
        &self,
        user_id: &UserId,
        product_ids: &[ProductId],
    ) -> CartResult<Option<Cart>> {
        let ids: Vec<String> = product_ids.iter().map(ToString::to_string).collect();

        let row = sqlx::query_as::<_, CartRow>(
            r#"
            UPDATE carts SET
                items = COALESCE(
                    (
                        SELECT jsonb_agg(t.item ORDER BY t.position)
                        FROM jsonb_array_elements(carts.items) WITH ORDINALITY AS t(item, position)
                        WHERE NOT (t.item->>'productId' = ANY($2))
                    ),
                    '[]'::jsonb
                ),
                updated_at = $3
            WHERE user_id = $1
            RETURNING cart_id, user_id, items, created_at, updated_at
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(&ids)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CartRow::into_cart))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CartRow {
    cart_id: Uuid,
    user_id: Uuid,
    items: Json<Vec<CartItem>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CartRow {
    fn into_cart(self) -> Cart {
        Cart {
            cart_id: CartId::from_uuid(self.cart_id),
            user_id: UserId::from_uuid(self.user_id),
            items: self.items.0,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
