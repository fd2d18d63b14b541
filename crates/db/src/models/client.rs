//! Client entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vetclinic_core::types::{DbId, Timestamp};

use crate::models::pet::Pet;

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    /// Globally unique; enforced by the `uq_clients_email` index.
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A client together with its pets, returned by the by-id lookup only.
#[derive(Debug, Clone, Serialize)]
pub struct ClientWithPets {
    #[serde(flatten)]
    pub client: Client,
    pub pets: Vec<Pet>,
}

/// DTO for creating a new client. Ids and timestamps are store-assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
}

/// DTO for replacing an existing client. Full-replace semantics: every
/// mutable field is overwritten; the id comes from the request path.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
}
