use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Employer-side extended data, one row per employer account.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EmployerProfile {
    pub user_id: Uuid,
    pub company_name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub contact_number: Option<String>,
    pub location: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Job-seeker-side extended data. `resume_key` points into object storage
/// and stays NULL until the upload flow attaches a file.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JobSeekerProfile {
    pub user_id: Uuid,
    pub resume_key: Option<String>,
    pub portfolio_url: Option<String>,
    pub skills: Vec<String>,
    pub education: Option<String>,
    pub work_experience: Option<String>,
    pub contact_number: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}
