//! Pet entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vetclinic_core::types::{DbId, Timestamp};

/// A pet row from the `pets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pet {
    pub id: DbId,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub weight: Option<f64>,
    pub description: Option<String>,
    /// Must reference an existing client; enforced by foreign key.
    pub client_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new pet.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePet {
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub weight: Option<f64>,
    pub description: Option<String>,
    pub client_id: DbId,
}

/// DTO for replacing an existing pet. Full-replace semantics; the id comes
/// from the request path. A changed `client_id` moves the pet to another
/// client, subject to the foreign-key check.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePet {
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub weight: Option<f64>,
    pub description: Option<String>,
    pub client_id: DbId,
}
