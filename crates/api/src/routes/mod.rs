//! Route definitions, one module per resource.

pub mod appointment;
pub mod client;
pub mod health;
pub mod pet;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /clients                      list, create
/// /clients/{id}                 get (with pets), update, delete
/// /clients/{id}/pets            pets of a client
///
/// /pets                         list (?client_id=N), create
/// /pets/{id}                    get, update, delete
/// /pets/{id}/appointments       appointments of a pet
///
/// /appointments                 list (?pet_id=N), create
/// /appointments/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/clients", client::router())
        .nest("/pets", pet::router())
        .nest("/appointments", appointment::router())
}
