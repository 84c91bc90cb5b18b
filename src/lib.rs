//! orderdesk
//!
//! A small HTTP service for customer and order management with token-based
//! authentication. Users register and log in against bcrypt password
//! hashes; login issues a 24-hour HS256 bearer token; the customer and
//! order routes are gated behind stateless token verification.
//!
//! # Module Structure
//!
//! - **`auth`** - password hashing, JWT issue/verify, the authorization
//!   gate, and the credential store
//! - **`customers`** / **`orders`** - protected CRUD surfaces
//! - **`routes`** - router assembly (public vs gated routes)
//! - **`server`** - configuration, shared state, startup
//! - **`error`** - the API error boundary
//! - **`pagination`** - shared offset-pagination query parameters

pub mod auth;
pub mod customers;
pub mod error;
pub mod orders;
pub mod pagination;
pub mod routes;
pub mod server;
