use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::jobs::repo_types::JobPosting;

/// Body of POST /employer/jobs. `em_id` and `applicationDeadline` are
/// required but optional here so the handler can answer with the error
/// taxonomy instead of a deserializer message.
#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub em_id: Option<Uuid>,
    #[serde(
        rename = "applicationDeadline",
        default,
        with = "time::serde::rfc3339::option"
    )]
    pub application_deadline: Option<OffsetDateTime>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct JobRecommendations {
    #[serde(rename = "jobRecommendations")]
    pub job_recommendations: Vec<JobPosting>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    20
}
