//! Order CRUD: model, queries, and handlers for the protected `/orders`
//! routes.

pub mod db;
pub mod handlers;
pub mod models;

pub use models::{Order, OrderPayload};
