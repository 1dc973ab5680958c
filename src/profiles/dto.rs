use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;

/// Upsert body for the employer profile. `company_name` is the only
/// required field; everything else overwrites whatever was stored.
#[derive(Debug, Deserialize)]
pub struct EmployerProfileInput {
    pub company_name: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub contact_number: Option<String>,
    pub location: Option<String>,
}

/// Upsert body for the job seeker profile. The resume is deliberately not
/// part of this: it only changes through the upload endpoint.
#[derive(Debug, Deserialize)]
pub struct JobSeekerProfileInput {
    pub portfolio_url: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub education: Option<String>,
    pub work_experience: Option<String>,
    pub contact_number: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
}

/// Resume upload body: raw file bytes plus an optional content type.
#[derive(Debug, Deserialize)]
pub struct ResumeUploadRequest {
    pub file: ByteBuf,
    #[serde(default = "default_resume_content_type")]
    pub content_type: String,
}

fn default_resume_content_type() -> String {
    "application/pdf".into()
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
