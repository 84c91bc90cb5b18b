/**
 * Order CRUD Handlers
 *
 * Persistence glue behind the authorization gate, mirroring the customer
 * handlers. The only business rule is the status whitelist, enforced on
 * create and update.
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::orders::db;
use crate::orders::models::{Order, OrderPayload};
use crate::pagination::Pagination;

pub async fn create_order(
    State(pool): State<SqlitePool>,
    Json(payload): Json<OrderPayload>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    if !payload.has_valid_status() {
        return Err(ApiError::BadRequest("invalid status value".to_string()));
    }

    let order = db::create_order(&pool, payload).await?;
    tracing::info!("order created: {}", order.id);
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn list_orders(
    State(pool): State<SqlitePool>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = db::list_orders(&pool, pagination.limit(), pagination.offset()).await?;
    Ok(Json(orders))
}

pub async fn get_order(
    State(pool): State<SqlitePool>,
    Path(id): Path<Uuid>,
) -> Result<Json<Order>, ApiError> {
    let order = db::get_order(&pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("order not found".to_string()))?;
    Ok(Json(order))
}

pub async fn update_order(
    State(pool): State<SqlitePool>,
    Path(id): Path<Uuid>,
    Json(payload): Json<OrderPayload>,
) -> Result<Json<Order>, ApiError> {
    if !payload.has_valid_status() {
        return Err(ApiError::BadRequest("invalid status value".to_string()));
    }

    let order = db::update_order(&pool, id, payload)
        .await?
        .ok_or_else(|| ApiError::NotFound("order not found".to_string()))?;
    tracing::info!("order updated: {}", order.id);
    Ok(Json(order))
}

pub async fn delete_order(
    State(pool): State<SqlitePool>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !db::delete_order(&pool, id).await? {
        return Err(ApiError::NotFound("order not found".to_string()));
    }
    tracing::info!("order deleted: {id}");
    Ok(StatusCode::NO_CONTENT)
}
