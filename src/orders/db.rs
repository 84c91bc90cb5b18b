/**
 * Order Database Operations
 */

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::orders::models::{Order, OrderPayload};

pub async fn create_order(pool: &SqlitePool, payload: OrderPayload) -> Result<Order, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Order>(
        r#"
        INSERT INTO orders (id, customer_id, order_date, product_name, status, total, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, customer_id, order_date, product_name, status, total, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(payload.customer_id)
    .bind(now)
    .bind(&payload.product_name)
    .bind(&payload.status)
    .bind(payload.total)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Offset-paginated order listing, ordered by creation time.
pub async fn list_orders(
    pool: &SqlitePool,
    limit: i64,
    offset: i64,
) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(
        r#"
        SELECT id, customer_id, order_date, product_name, status, total, created_at, updated_at
        FROM orders
        ORDER BY created_at
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn get_order(pool: &SqlitePool, id: Uuid) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(
        r#"
        SELECT id, customer_id, order_date, product_name, status, total, created_at, updated_at
        FROM orders
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn update_order(
    pool: &SqlitePool,
    id: Uuid,
    payload: OrderPayload,
) -> Result<Option<Order>, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Order>(
        r#"
        UPDATE orders
        SET customer_id = $1, product_name = $2, status = $3, total = $4, updated_at = $5
        WHERE id = $6
        RETURNING id, customer_id, order_date, product_name, status, total, created_at, updated_at
        "#,
    )
    .bind(payload.customer_id)
    .bind(&payload.product_name)
    .bind(&payload.status)
    .bind(payload.total)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Returns true if a row was deleted.
pub async fn delete_order(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM orders WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
