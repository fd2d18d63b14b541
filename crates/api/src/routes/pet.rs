//! Route definitions for the `/pets` resource.
//!
//! Also mounts the pet-scoped appointment listing under
//! `/pets/{id}/appointments`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{appointment, pet};
use crate::state::AppState;

/// Routes mounted at `/pets`.
///
/// ```text
/// GET    /                   -> list (optional ?client_id=N)
/// POST   /                   -> create
/// GET    /{id}               -> get_by_id
/// PUT    /{id}               -> update
/// DELETE /{id}               -> delete
/// GET    /{id}/appointments  -> list_by_pet
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pet::list).post(pet::create))
        .route(
            "/{id}",
            get(pet::get_by_id).put(pet::update).delete(pet::delete),
        )
        .route("/{id}/appointments", get(appointment::list_by_pet))
}
