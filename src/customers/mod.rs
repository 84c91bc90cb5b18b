//! Customer CRUD: model, queries, and handlers for the protected
//! `/customers` routes.

pub mod db;
pub mod handlers;
pub mod models;

pub use models::{Customer, CustomerPayload};
