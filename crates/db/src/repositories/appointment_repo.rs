//! Repository for the `appointments` table.

use chrono::Utc;

use vetclinic_core::error::CoreError;
use vetclinic_core::types::DbId;
use vetclinic_core::validation::{validate_duration, validate_required};

use crate::models::appointment::{Appointment, CreateAppointment, UpdateAppointment};
use crate::{map_sqlx_error, DbPool};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, pet_id, date, reason, notes, duration, completed, created_at, updated_at";

/// Provides CRUD operations for appointments plus the pet-scoped listing.
///
/// No overlap detection is performed between appointments sharing a pet or
/// time slot; clashing schedules are accepted.
pub struct AppointmentRepo;

impl AppointmentRepo {
    /// List all appointments, ordered by id ascending.
    pub async fn list(pool: &DbPool) -> Result<Vec<Appointment>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM appointments ORDER BY id ASC");
        sqlx::query_as::<_, Appointment>(&query)
            .fetch_all(pool)
            .await
            .map_err(map_sqlx_error)
    }

    /// Find an appointment by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Appointment, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM appointments WHERE id = $1");
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(CoreError::NotFound {
                entity: "Appointment",
                id,
            })
    }

    /// List all appointments for a pet, in insertion order.
    ///
    /// Empty vec both for a pet with no appointments and for a pet id that
    /// does not exist, mirroring [`PetRepo::list_by_client`].
    ///
    /// [`PetRepo::list_by_client`]: crate::repositories::PetRepo::list_by_client
    pub async fn list_by_pet(pool: &DbPool, pet_id: DbId) -> Result<Vec<Appointment>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM appointments WHERE pet_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Appointment>(&query)
            .bind(pet_id)
            .fetch_all(pool)
            .await
            .map_err(map_sqlx_error)
    }

    /// Insert a new appointment, returning the created row.
    ///
    /// `reason` must be non-empty and `duration` positive (rejected as
    /// [`CoreError::Validation`] before the insert); an invalid `pet_id`
    /// is rejected by the foreign key as [`CoreError::Constraint`], with
    /// no row persisted.
    pub async fn create(
        pool: &DbPool,
        input: &CreateAppointment,
    ) -> Result<Appointment, CoreError> {
        validate_required("reason", &input.reason)?;
        validate_duration(input.duration)?;

        let now = Utc::now();
        let query = format!(
            "INSERT INTO appointments (pet_id, date, reason, notes, duration, completed,
                                       created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(input.pet_id)
            .bind(input.date)
            .bind(&input.reason)
            .bind(&input.notes)
            .bind(input.duration)
            .bind(input.completed)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
            .map_err(map_sqlx_error)
    }

    /// Replace every mutable field of an existing appointment. Any
    /// `completed` value is accepted; the flag has no transition rules.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateAppointment,
    ) -> Result<Appointment, CoreError> {
        validate_required("reason", &input.reason)?;
        validate_duration(input.duration)?;

        let query = format!(
            "UPDATE appointments SET
                pet_id = $2,
                date = $3,
                reason = $4,
                notes = $5,
                duration = $6,
                completed = $7,
                updated_at = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(input.pet_id)
            .bind(input.date)
            .bind(&input.reason)
            .bind(&input.notes)
            .bind(input.duration)
            .bind(input.completed)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(CoreError::NotFound {
                entity: "Appointment",
                id,
            })
    }

    /// Physically delete an appointment by id.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: "Appointment",
                id,
            });
        }
        Ok(())
    }
}
