//! Department API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::{ADMIN_ONLY, require_role};
use crate::core::ServerState;

/// Department router - every route is admin-only
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/departments", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/employees", get(handler::list_employees))
        .layer(middleware::from_fn(require_role(ADMIN_ONLY)))
}
