/**
 * Customer Database Operations
 */

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::customers::models::{Customer, CustomerPayload};

pub async fn create_customer(
    pool: &SqlitePool,
    payload: CustomerPayload,
) -> Result<Customer, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Customer>(
        r#"
        INSERT INTO customers (id, name, email, phone, address, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, name, email, phone, address, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.phone)
    .bind(&payload.address)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Offset-paginated customer listing, ordered by creation time.
pub async fn list_customers(
    pool: &SqlitePool,
    limit: i64,
    offset: i64,
) -> Result<Vec<Customer>, sqlx::Error> {
    sqlx::query_as::<_, Customer>(
        r#"
        SELECT id, name, email, phone, address, created_at, updated_at
        FROM customers
        ORDER BY created_at
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn get_customer(pool: &SqlitePool, id: Uuid) -> Result<Option<Customer>, sqlx::Error> {
    sqlx::query_as::<_, Customer>(
        r#"
        SELECT id, name, email, phone, address, created_at, updated_at
        FROM customers
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn update_customer(
    pool: &SqlitePool,
    id: Uuid,
    payload: CustomerPayload,
) -> Result<Option<Customer>, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Customer>(
        r#"
        UPDATE customers
        SET name = $1, email = $2, phone = $3, address = $4, updated_at = $5
        WHERE id = $6
        RETURNING id, name, email, phone, address, created_at, updated_at
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.phone)
    .bind(&payload.address)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Returns true if a row was deleted.
pub async fn delete_customer(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM customers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
