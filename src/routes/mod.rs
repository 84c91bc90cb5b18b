/**
 * Router Configuration
 *
 * Assembles the full route table. Registration and login are public; the
 * customer and order sub-routers sit behind the authorization gate, so a
 * request that fails verification is rejected before any handler or
 * database call runs.
 *
 * # Routes
 *
 * ## Public
 * - `POST /register` - create a user
 * - `POST /login` - exchange credentials for a bearer token
 *
 * ## Protected (`Authorization: Bearer <token>`)
 * - `POST /customers`, `GET /customers`
 * - `GET /customers/{id}`, `PUT /customers/{id}`, `DELETE /customers/{id}`
 * - `POST /orders`, `GET /orders`
 * - `GET /orders/{id}`, `PUT /orders/{id}`, `DELETE /orders/{id}`
 */

use axum::{middleware, routing::get, routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::auth::middleware::require_auth;
use crate::auth::{login, register};
use crate::customers::handlers as customers;
use crate::orders::handlers as orders;
use crate::server::state::AppState;

/// Build the application router.
pub fn create_router(app_state: AppState) -> Router {
    let customer_routes = Router::new()
        .route("/", post(customers::create_customer).get(customers::list_customers))
        .route(
            "/{id}",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        );

    let order_routes = Router::new()
        .route("/", post(orders::create_order).get(orders::list_orders))
        .route(
            "/{id}",
            get(orders::get_order)
                .put(orders::update_order)
                .delete(orders::delete_order),
        );

    let protected = Router::new()
        .nest("/customers", customer_routes)
        .nest("/orders", order_routes)
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            require_auth,
        ));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
