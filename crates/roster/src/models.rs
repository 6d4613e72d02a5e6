use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

/// A directory entry. The `address` field is free text in Japanese postal
/// order; no format is enforced beyond non-emptiness at the API boundary.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub address: String,
    pub created_at: OffsetDateTime,
}

impl User {
    pub fn new(name: String, email: String, address: String) -> Self {
        let id = Uuid::new_v4();
        let created_at = OffsetDateTime::now_utc();
        Self {
            id,
            name,
            email,
            address,
            created_at,
        }
    }
}
