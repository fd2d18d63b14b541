//! Repository for the `pets` table.

use chrono::Utc;

use vetclinic_core::error::CoreError;
use vetclinic_core::types::DbId;
use vetclinic_core::validation::validate_required;

use crate::models::pet::{CreatePet, Pet, UpdatePet};
use crate::{map_sqlx_error, DbPool};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, species, breed, birth_date, weight, description, client_id, created_at, updated_at";

/// Provides CRUD operations for pets plus the client-scoped listing.
pub struct PetRepo;

impl PetRepo {
    /// List all pets, ordered by id ascending.
    pub async fn list(pool: &DbPool) -> Result<Vec<Pet>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM pets ORDER BY id ASC");
        sqlx::query_as::<_, Pet>(&query)
            .fetch_all(pool)
            .await
            .map_err(map_sqlx_error)
    }

    /// Find a pet by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Pet, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE id = $1");
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(CoreError::NotFound { entity: "Pet", id })
    }

    /// List all pets belonging to a client, in insertion order.
    ///
    /// Returns an empty vec both for a client with no pets and for a
    /// client id that does not exist; callers who need to distinguish the
    /// two must check the client separately.
    pub async fn list_by_client(pool: &DbPool, client_id: DbId) -> Result<Vec<Pet>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE client_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Pet>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
            .map_err(map_sqlx_error)
    }

    /// Insert a new pet, returning the created row.
    ///
    /// A `client_id` that references no existing client is rejected by the
    /// foreign key as [`CoreError::Constraint`]. There is no separate
    /// existence pre-check; the constraint at insert time is the sole
    /// enforcement.
    pub async fn create(pool: &DbPool, input: &CreatePet) -> Result<Pet, CoreError> {
        validate_required("name", &input.name)?;
        validate_required("species", &input.species)?;

        let now = Utc::now();
        let query = format!(
            "INSERT INTO pets (name, species, breed, birth_date, weight, description, client_id,
                               created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(&input.name)
            .bind(&input.species)
            .bind(&input.breed)
            .bind(input.birth_date)
            .bind(input.weight)
            .bind(&input.description)
            .bind(input.client_id)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
            .map_err(map_sqlx_error)
    }

    /// Replace every mutable field of an existing pet, including
    /// `client_id` (moving the pet to another client is subject to the
    /// same foreign-key check as create).
    pub async fn update(pool: &DbPool, id: DbId, input: &UpdatePet) -> Result<Pet, CoreError> {
        validate_required("name", &input.name)?;
        validate_required("species", &input.species)?;

        let query = format!(
            "UPDATE pets SET
                name = $2,
                species = $3,
                breed = $4,
                birth_date = $5,
                weight = $6,
                description = $7,
                client_id = $8,
                updated_at = $9
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.species)
            .bind(&input.breed)
            .bind(input.birth_date)
            .bind(input.weight)
            .bind(&input.description)
            .bind(input.client_id)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(CoreError::NotFound { entity: "Pet", id })
    }

    /// Physically delete a pet by id.
    ///
    /// A pet that still has appointments cannot be deleted (RESTRICT).
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM pets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound { entity: "Pet", id });
        }
        Ok(())
    }
}
