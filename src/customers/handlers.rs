/**
 * Customer CRUD Handlers
 *
 * Thin persistence glue behind the authorization gate. These handlers only
 * run for requests that already carry a verified identity; they make no
 * authorization decisions of their own.
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::customers::db;
use crate::customers::models::{Customer, CustomerPayload};
use crate::error::ApiError;
use crate::pagination::Pagination;

pub async fn create_customer(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CustomerPayload>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let customer = db::create_customer(&pool, payload).await?;
    tracing::info!("customer created: {}", customer.id);
    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn list_customers(
    State(pool): State<SqlitePool>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers = db::list_customers(&pool, pagination.limit(), pagination.offset()).await?;
    Ok(Json(customers))
}

pub async fn get_customer(
    State(pool): State<SqlitePool>,
    Path(id): Path<Uuid>,
) -> Result<Json<Customer>, ApiError> {
    let customer = db::get_customer(&pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("customer not found".to_string()))?;
    Ok(Json(customer))
}

pub async fn update_customer(
    State(pool): State<SqlitePool>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CustomerPayload>,
) -> Result<Json<Customer>, ApiError> {
    let customer = db::update_customer(&pool, id, payload)
        .await?
        .ok_or_else(|| ApiError::NotFound("customer not found".to_string()))?;
    tracing::info!("customer updated: {}", customer.id);
    Ok(Json(customer))
}

pub async fn delete_customer(
    State(pool): State<SqlitePool>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !db::delete_customer(&pool, id).await? {
        return Err(ApiError::NotFound("customer not found".to_string()));
    }
    tracing::info!("customer deleted: {id}");
    Ok(StatusCode::NO_CONTENT)
}
