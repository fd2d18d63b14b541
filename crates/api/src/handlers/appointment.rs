//! Handlers for the `/appointments` resource and the pet-scoped listing.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use vetclinic_core::types::DbId;
use vetclinic_db::models::appointment::{Appointment, CreateAppointment, UpdateAppointment};
use vetclinic_db::repositories::AppointmentRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for GET /appointments.
#[derive(Debug, Deserialize)]
pub struct ListAppointmentsQuery {
    /// Restrict the listing to one pet's appointments.
    pub pet_id: Option<DbId>,
}

/// POST /api/v1/appointments
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAppointment>,
) -> AppResult<(StatusCode, Json<Appointment>)> {
    let appointment = AppointmentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// GET /api/v1/appointments[?pet_id=N]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListAppointmentsQuery>,
) -> AppResult<Json<Vec<Appointment>>> {
    let appointments = match query.pet_id {
        Some(pet_id) => AppointmentRepo::list_by_pet(&state.pool, pet_id).await?,
        None => AppointmentRepo::list(&state.pool).await?,
    };
    Ok(Json(appointments))
}

/// GET /api/v1/pets/{pet_id}/appointments
pub async fn list_by_pet(
    State(state): State<AppState>,
    Path(pet_id): Path<DbId>,
) -> AppResult<Json<Vec<Appointment>>> {
    let appointments = AppointmentRepo::list_by_pet(&state.pool, pet_id).await?;
    Ok(Json(appointments))
}

/// GET /api/v1/appointments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Appointment>> {
    let appointment = AppointmentRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(appointment))
}

/// PUT /api/v1/appointments/{id} -- full replace; the id comes from the path.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAppointment>,
) -> AppResult<Json<Appointment>> {
    let appointment = AppointmentRepo::update(&state.pool, id, &input).await?;
    Ok(Json(appointment))
}

/// DELETE /api/v1/appointments/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    AppointmentRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
