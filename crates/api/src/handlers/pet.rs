//! Handlers for the `/pets` resource and the client-scoped pet listing.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use vetclinic_core::types::DbId;
use vetclinic_db::models::pet::{CreatePet, Pet, UpdatePet};
use vetclinic_db::repositories::PetRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for GET /pets.
#[derive(Debug, Deserialize)]
pub struct ListPetsQuery {
    /// Restrict the listing to one client's pets.
    pub client_id: Option<DbId>,
}

/// POST /api/v1/pets
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePet>,
) -> AppResult<(StatusCode, Json<Pet>)> {
    let pet = PetRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(pet)))
}

/// GET /api/v1/pets[?client_id=N]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListPetsQuery>,
) -> AppResult<Json<Vec<Pet>>> {
    let pets = match query.client_id {
        Some(client_id) => PetRepo::list_by_client(&state.pool, client_id).await?,
        None => PetRepo::list(&state.pool).await?,
    };
    Ok(Json(pets))
}

/// GET /api/v1/clients/{client_id}/pets
///
/// An empty list for a nonexistent client, same as an empty client; the
/// scoped listing does not parent-check.
pub async fn list_by_client(
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
) -> AppResult<Json<Vec<Pet>>> {
    let pets = PetRepo::list_by_client(&state.pool, client_id).await?;
    Ok(Json(pets))
}

/// GET /api/v1/pets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Pet>> {
    let pet = PetRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(pet))
}

/// PUT /api/v1/pets/{id} -- full replace; the id comes from the path.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePet>,
) -> AppResult<Json<Pet>> {
    let pet = PetRepo::update(&state.pool, id, &input).await?;
    Ok(Json(pet))
}

/// DELETE /api/v1/pets/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    PetRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
