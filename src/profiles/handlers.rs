use axum::{
    extract::State,
    response::Redirect,
    routing::get,
    Json, Router,
};
use bytes::Bytes;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::auth::jwt::AuthUser;
use crate::auth::role::Role;
use crate::error::{ApiError, ApiResult};
use crate::profiles::dto::{
    EmployerProfileInput, JobSeekerProfileInput, MessageResponse, ResumeUploadRequest,
};
use crate::profiles::repo_types::{EmployerProfile, JobSeekerProfile};
use crate::state::AppState;

const RESUME_URL_TTL_SECONDS: u64 = 600;

pub fn seeker_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/dashboard/seekerDashboard/profile",
            get(get_seeker_profile)
                .post(upsert_seeker_profile)
                .put(upsert_seeker_profile),
        )
        .route(
            "/dashboard/seekerDashboard/resume",
            get(download_resume).post(upload_resume),
        )
}

pub fn employer_routes() -> Router<AppState> {
    Router::new().route(
        "/employer/profile",
        get(get_employer_profile)
            .post(upsert_employer_profile)
            .put(upsert_employer_profile),
    )
}

#[instrument(skip(state))]
pub async fn get_seeker_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<JobSeekerProfile>> {
    let user_id = auth.require_role(Role::JobSeeker)?;
    let profile = JobSeekerProfile::get(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found".into()))?;
    Ok(Json(profile))
}

#[instrument(skip(state, payload))]
pub async fn upsert_seeker_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<JobSeekerProfileInput>,
) -> ApiResult<Json<JobSeekerProfile>> {
    let user_id = auth.require_role(Role::JobSeeker)?;
    let profile = JobSeekerProfile::upsert(&state.db, user_id, &payload).await?;
    info!(user_id = %user_id, "seeker profile updated");
    Ok(Json(profile))
}

#[instrument(skip(state))]
pub async fn get_employer_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<EmployerProfile>> {
    let user_id = auth.require_role(Role::Employer)?;
    let profile = EmployerProfile::get(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found".into()))?;
    Ok(Json(profile))
}

#[instrument(skip(state, payload))]
pub async fn upsert_employer_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<EmployerProfileInput>,
) -> ApiResult<Json<EmployerProfile>> {
    let user_id = auth.require_role(Role::Employer)?;
    let company_name = payload
        .company_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::Validation("company_name is required".into()))?
        .to_string();
    let profile = EmployerProfile::upsert(&state.db, user_id, &company_name, &payload).await?;
    info!(user_id = %user_id, "employer profile updated");
    Ok(Json(profile))
}

/// Attach a resume. The profile keeps only the object key; a replaced file
/// is deleted from storage after the new key is committed.
#[instrument(skip(state, payload))]
pub async fn upload_resume(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<ResumeUploadRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let user_id = auth.require_role(Role::JobSeeker)?;
    if payload.file.is_empty() {
        return Err(ApiError::Validation("file is required".into()));
    }

    let previous = JobSeekerProfile::get(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found".into()))?
        .resume_key;

    let key = format!("resumes/{}/{}", user_id, Uuid::new_v4());
    state
        .storage
        .put_object(&key, Bytes::from(payload.file.into_vec()), &payload.content_type)
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    JobSeekerProfile::set_resume_key(&state.db, user_id, &key).await?;

    if let Some(old) = previous {
        if let Err(e) = state.storage.delete_object(&old).await {
            warn!(error = %e, key = %old, "failed to delete replaced resume");
        }
    }

    info!(user_id = %user_id, "resume attached");
    Ok(Json(MessageResponse {
        message: "Resume uploaded".into(),
    }))
}

/// 307 to a presigned URL; the file itself never passes through here.
#[instrument(skip(state))]
pub async fn download_resume(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Redirect> {
    let user_id = auth.require_role(Role::JobSeeker)?;
    let profile = JobSeekerProfile::get(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found".into()))?;
    let key = profile
        .resume_key
        .ok_or_else(|| ApiError::NotFound("No resume attached".into()))?;
    let url = state
        .storage
        .presign_get(&key, RESUME_URL_TTL_SECONDS)
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;
    Ok(Redirect::temporary(&url))
}
