//! Route definitions for the `/clients` resource.
//!
//! Also mounts the client-scoped pet listing under `/clients/{id}/pets`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{client, pet};
use crate::state::AppState;

/// Routes mounted at `/clients`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id (includes pets)
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /{id}/pets     -> list_by_client
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(client::list).post(client::create))
        .route(
            "/{id}",
            get(client::get_by_id)
                .put(client::update)
                .delete(client::delete),
        )
        .route("/{id}/pets", get(pet::list_by_client))
}
