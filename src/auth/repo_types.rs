use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::role::Role;

/// Application-side user record. The id comes from the identity provider;
/// there is no credential column anywhere in this schema.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,             // identity-provider-issued
    pub email: String,
    pub display_name: String, // company name or personal name, per role
    pub role: Role,           // immutable after signup
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
