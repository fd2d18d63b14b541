//! Repository for the `clients` table.

use chrono::Utc;

use vetclinic_core::error::CoreError;
use vetclinic_core::types::DbId;
use vetclinic_core::validation::{validate_email, validate_required};

use crate::models::client::{Client, ClientWithPets, CreateClient, UpdateClient};
use crate::repositories::PetRepo;
use crate::{map_sqlx_error, DbPool};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, address, created_at, updated_at";

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// List all clients, ordered by id ascending. Returns an empty vec
    /// (not an error) when the table is empty.
    pub async fn list(pool: &DbPool) -> Result<Vec<Client>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY id ASC");
        sqlx::query_as::<_, Client>(&query)
            .fetch_all(pool)
            .await
            .map_err(map_sqlx_error)
    }

    /// Find a client by id, eagerly loading its pets.
    ///
    /// This is the only lookup that loads a related collection; list
    /// queries return flat rows.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<ClientWithPets, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        let client = sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(CoreError::NotFound {
                entity: "Client",
                id,
            })?;

        let pets = PetRepo::list_by_client(pool, id).await?;

        Ok(ClientWithPets { client, pets })
    }

    /// Insert a new client, returning the created row with store-assigned
    /// id and timestamps.
    ///
    /// A duplicate email surfaces as [`CoreError::Constraint`] via the
    /// unique index; a malformed email is rejected before the insert.
    pub async fn create(pool: &DbPool, input: &CreateClient) -> Result<Client, CoreError> {
        validate_required("name", &input.name)?;
        validate_required("phone", &input.phone)?;
        validate_email(&input.email)?;

        let now = Utc::now();
        let query = format!(
            "INSERT INTO clients (name, email, phone, address, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
            .map_err(map_sqlx_error)
    }

    /// Replace every mutable field of an existing client. The id comes
    /// from the request path, never from the body. `updated_at` is
    /// refreshed; `created_at` is untouched.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateClient,
    ) -> Result<Client, CoreError> {
        validate_required("name", &input.name)?;
        validate_required("phone", &input.phone)?;
        validate_email(&input.email)?;

        let query = format!(
            "UPDATE clients SET
                name = $2,
                email = $3,
                phone = $4,
                address = $5,
                updated_at = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(CoreError::NotFound {
                entity: "Client",
                id,
            })
    }

    /// Physically delete a client by id.
    ///
    /// A client that still owns pets cannot be deleted: the RESTRICT
    /// foreign key rejects it with [`CoreError::Constraint`].
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: "Client",
                id,
            });
        }
        Ok(())
    }
}
