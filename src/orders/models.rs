/**
 * Order Model and Wire Types
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Statuses an order may carry; anything else is rejected with 400.
pub const VALID_STATUSES: [&str; 4] = ["pending", "shipped", "delivered", "cancelled"];

/// Order row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub order_date: DateTime<Utc>,
    pub product_name: String,
    pub status: String,
    pub total: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for `POST /orders` and `PUT /orders/{id}`. The order date is set
/// server-side at creation.
#[derive(Debug, Deserialize)]
pub struct OrderPayload {
    pub customer_id: Uuid,
    pub product_name: String,
    pub status: String,
    pub total: f64,
}

impl OrderPayload {
    pub fn has_valid_status(&self) -> bool {
        VALID_STATUSES.contains(&self.status.as_str())
    }
}
