use axum::{
    extract::{Query, State},
    routing::get,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument};

use crate::auth::jwt::AuthUser;
use crate::auth::role::Role;
use crate::error::ApiResult;
use crate::jobs::dto::{CreateJobRequest, JobRecommendations, MessageResponse, Pagination};
use crate::jobs::repo_types::JobPosting;
use crate::jobs::services;
use crate::state::AppState;

pub fn seeker_routes() -> Router<AppState> {
    Router::new().route("/dashboard/seekerdashboard/jobs", get(seeker_job_feed))
}

pub fn employer_routes() -> Router<AppState> {
    Router::new().route("/employer/jobs", post(create_job).get(list_own_jobs))
}

#[instrument(skip(state, payload))]
pub async fn create_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateJobRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let job = services::validate_new_job(&auth, payload)?;
    let posting = JobPosting::insert(&state.db, &job).await?;
    info!(job_id = %posting.id, employer_id = %posting.employer_id, "job posted");
    Ok(Json(MessageResponse {
        message: "Job posted successfully".into(),
    }))
}

#[instrument(skip(state))]
pub async fn seeker_job_feed(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(p): Query<Pagination>,
) -> ApiResult<Json<JobRecommendations>> {
    auth.require_role(Role::JobSeeker)?;
    let jobs = JobPosting::list_open(&state.db, p.limit, p.offset).await?;
    Ok(Json(JobRecommendations {
        job_recommendations: jobs,
    }))
}

#[instrument(skip(state))]
pub async fn list_own_jobs(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(p): Query<Pagination>,
) -> ApiResult<Json<Vec<JobPosting>>> {
    let employer_id = auth.require_role(Role::Employer)?;
    let jobs = JobPosting::list_by_employer(&state.db, employer_id, p.limit, p.offset).await?;
    Ok(Json(jobs))
}
