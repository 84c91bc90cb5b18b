//! Authentication Core
//!
//! Everything security-relevant lives here:
//!
//! - **`password`** - bcrypt hashing and verification (fixed cost 10)
//! - **`token`** - HS256 JWT issuance and verification with typed claims
//! - **`middleware`** - the authorization gate for protected routes
//! - **`users`** - the credential store (lookup and persist)
//! - **`handlers`** - the `/register` and `/login` endpoints
//!
//! The signing key is loaded once at startup into [`token::AuthKeys`] and is
//! immutable afterwards; verification is stateless, so the server keeps no
//! per-token record and holds no locks on the request path.

pub mod handlers;
pub mod middleware;
pub mod password;
pub mod token;
pub mod users;

pub use handlers::{login, register};
pub use middleware::{require_auth, AuthUser, AuthenticatedUser};
pub use token::{AuthKeys, Claims, TokenError};
