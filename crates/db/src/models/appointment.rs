//! Appointment entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vetclinic_core::types::{DbId, Timestamp};

/// An appointment row from the `appointments` table.
///
/// `completed` is a plain flag with no transition rules; any value is
/// accepted on create or update. Overlapping appointments for the same pet
/// or slot are accepted silently.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Appointment {
    pub id: DbId,
    /// Must reference an existing pet; enforced by foreign key.
    pub pet_id: DbId,
    pub date: Timestamp,
    pub reason: String,
    pub notes: Option<String>,
    /// Duration in minutes.
    pub duration: i64,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new appointment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppointment {
    pub pet_id: DbId,
    pub date: Timestamp,
    pub reason: String,
    pub notes: Option<String>,
    /// Duration in minutes; must be positive.
    pub duration: i64,
    /// Defaults to `false` if omitted.
    #[serde(default)]
    pub completed: bool,
}

/// DTO for replacing an existing appointment. Full-replace semantics; the
/// id comes from the request path.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAppointment {
    pub pet_id: DbId,
    pub date: Timestamp,
    pub reason: String,
    pub notes: Option<String>,
    pub duration: i64,
    #[serde(default)]
    pub completed: bool,
}
