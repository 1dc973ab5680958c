use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Posting lifecycle. Only `open` is ever written today; `closed` exists so
/// the feed query has a stable filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "job_status", rename_all = "lowercase")]
pub enum JobStatus {
    Open,
    Closed,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JobPosting {
    pub id: Uuid,
    pub employer_id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    /// Free-form fields the frontend sends along (salary range, perks, ...).
    pub details: Option<serde_json::Value>,
    pub status: JobStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub application_deadline: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}
