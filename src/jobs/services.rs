use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::jwt::AuthUser;
use crate::auth::role::Role;
use crate::error::ApiError;
use crate::jobs::dto::CreateJobRequest;

/// A posting that passed intake validation.
#[derive(Debug)]
pub struct NewJob {
    pub employer_id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub details: Option<serde_json::Value>,
    pub application_deadline: OffsetDateTime,
}

/// Intake checks, all before any insert: the two required fields, the
/// caller owning `em_id`, and a future-dated deadline.
pub fn validate_new_job(auth: &AuthUser, payload: CreateJobRequest) -> Result<NewJob, ApiError> {
    auth.require_role(Role::Employer)?;

    let employer_id = payload
        .em_id
        .ok_or_else(|| ApiError::Validation("em_id is required".into()))?;
    let application_deadline = payload
        .application_deadline
        .ok_or_else(|| ApiError::Validation("applicationDeadline is required".into()))?;

    if employer_id != auth.user_id {
        return Err(ApiError::Auth(
            "em_id does not match the authenticated employer".into(),
        ));
    }
    if application_deadline <= OffsetDateTime::now_utc() {
        return Err(ApiError::Validation(
            "applicationDeadline must be in the future".into(),
        ));
    }

    Ok(NewJob {
        employer_id,
        title: payload.title,
        description: payload.description,
        location: payload.location,
        details: payload.details,
        application_deadline,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    fn employer(user_id: Uuid) -> AuthUser {
        AuthUser {
            user_id,
            role: Role::Employer,
        }
    }

    fn payload(em_id: Option<Uuid>, deadline: Option<OffsetDateTime>) -> CreateJobRequest {
        CreateJobRequest {
            em_id,
            application_deadline: deadline,
            title: Some("Backend Engineer".into()),
            description: None,
            location: None,
            details: None,
        }
    }

    #[test]
    fn accepts_owned_future_dated_posting() {
        let id = Uuid::new_v4();
        let deadline = OffsetDateTime::now_utc() + Duration::days(14);
        let job = validate_new_job(&employer(id), payload(Some(id), Some(deadline))).unwrap();
        assert_eq!(job.employer_id, id);
        assert_eq!(job.title.as_deref(), Some("Backend Engineer"));
    }

    #[test]
    fn rejects_missing_em_id_without_insert() {
        let id = Uuid::new_v4();
        let deadline = OffsetDateTime::now_utc() + Duration::days(14);
        let err = validate_new_job(&employer(id), payload(None, Some(deadline))).unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref m) if m.contains("em_id")));
    }

    #[test]
    fn rejects_missing_deadline() {
        let id = Uuid::new_v4();
        let err = validate_new_job(&employer(id), payload(Some(id), None)).unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref m) if m.contains("applicationDeadline")));
    }

    #[test]
    fn rejects_em_id_of_another_employer() {
        let id = Uuid::new_v4();
        let deadline = OffsetDateTime::now_utc() + Duration::days(14);
        let err =
            validate_new_job(&employer(id), payload(Some(Uuid::new_v4()), Some(deadline)))
                .unwrap_err();
        assert!(matches!(err, ApiError::Auth(_)));
    }

    #[test]
    fn rejects_past_deadline() {
        let id = Uuid::new_v4();
        let deadline = OffsetDateTime::now_utc() - Duration::days(1);
        let err = validate_new_job(&employer(id), payload(Some(id), Some(deadline))).unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref m) if m.contains("future")));
    }

    #[test]
    fn rejects_seeker_tokens() {
        let auth = AuthUser {
            user_id: Uuid::new_v4(),
            role: Role::JobSeeker,
        };
        let deadline = OffsetDateTime::now_utc() + Duration::days(14);
        let err = validate_new_job(&auth, payload(Some(auth.user_id), Some(deadline))).unwrap_err();
        assert!(matches!(err, ApiError::InvalidToken));
    }
}
