use axum::extract::FromRef;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{error, warn};

use crate::auth::dto::{PublicUser, SigninRequest, SignupRequest};
use crate::auth::jwt::JwtKeys;
use crate::auth::repo_types::User;
use crate::auth::role::Role;
use crate::error::ApiError;
use crate::identity::IdentityUser;
use crate::profiles::dto::{EmployerProfileInput, JobSeekerProfileInput};
use crate::profiles::repo_types::{EmployerProfile, JobSeekerProfile};
use crate::state::AppState;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Role parse plus role-dependent required fields. Runs before the identity
/// call, so a bad payload never creates a provider account.
fn validate_signup(payload: &SignupRequest) -> Result<(Role, String), ApiError> {
    let role: Role = payload.role.parse()?;
    let display_name = match role {
        Role::Employer => payload
            .company_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::Validation("company_name is required for employers".into()))?,
        Role::JobSeeker => payload
            .name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::Validation("name is required for job seekers".into()))?,
    };
    Ok((role, display_name.to_string()))
}

pub async fn register(state: &AppState, payload: SignupRequest) -> Result<PublicUser, ApiError> {
    let email = payload.email.trim().to_lowercase();
    if !is_valid_email(&email) {
        return Err(ApiError::Validation("Invalid email".into()));
    }
    if payload.password.len() < 8 {
        return Err(ApiError::Validation("Password too short".into()));
    }
    let (role, display_name) = validate_signup(&payload)?;

    let identity = state.identity.sign_up(&email, &payload.password).await?;

    match persist_signup(state, &identity, role, &display_name, &payload).await {
        Ok(user) => Ok(user),
        Err(e) => {
            // The provider account exists but the profile write failed.
            // Delete the identity again so no orphan is left behind.
            warn!(user_id = %identity.id, "signup write failed, rolling back identity");
            if let Err(del) = state.identity.delete_user(identity.id).await {
                error!(
                    error = %del,
                    user_id = %identity.id,
                    "identity rollback failed, account requires manual cleanup"
                );
            }
            Err(e)
        }
    }
}

/// User row and role-matching profile row commit in one transaction.
async fn persist_signup(
    state: &AppState,
    identity: &IdentityUser,
    role: Role,
    display_name: &str,
    payload: &SignupRequest,
) -> Result<PublicUser, ApiError> {
    let mut tx = state.db.begin().await?;

    let user = User::insert(&mut tx, identity.id, &identity.email, display_name, role).await?;

    match role {
        Role::Employer => {
            let input = EmployerProfileInput {
                company_name: payload.company_name.clone(),
                description: payload.company_description.clone(),
                logo_url: payload.company_logo.clone(),
                website_url: payload.website_url.clone(),
                contact_number: payload.contact_number.clone(),
                location: payload.location.clone(),
            };
            EmployerProfile::insert(&mut tx, user.id, display_name, &input).await?;
        }
        Role::JobSeeker => {
            let input = JobSeekerProfileInput {
                portfolio_url: payload.portfolio_url.clone(),
                skills: payload.skills.clone(),
                education: payload.education.clone(),
                work_experience: payload.work_experience.clone(),
                contact_number: payload.contact_number.clone(),
                location: payload.location.clone(),
                linkedin_url: payload.linkedin_url.clone(),
            };
            JobSeekerProfile::insert(&mut tx, user.id, &input).await?;
        }
    }

    tx.commit().await?;
    Ok(user.into())
}

pub async fn signin(state: &AppState, payload: SigninRequest) -> Result<(User, String), ApiError> {
    let email = payload.email.trim().to_lowercase();
    if !is_valid_email(&email) {
        return Err(ApiError::Validation("Invalid email".into()));
    }

    let identity = state.identity.sign_in(&email, &payload.password).await?;
    if !identity.email_confirmed {
        return Err(ApiError::Auth("Email not confirmed".into()));
    }

    let user = User::find_by_email(&state.db, &email)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    let keys = JwtKeys::from_ref(state);
    let token = keys.sign(user.id, user.role)?;
    Ok((user, token))
}
