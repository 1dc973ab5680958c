use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::repo_types::User;
use crate::auth::role::Role;

/// Body of POST /signup. The role decides which of the optional profile
/// fields are required; resumes are attached later through the upload
/// endpoint, never at signup.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub role: String,

    // job seeker fields
    pub name: Option<String>,
    pub portfolio_url: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub education: Option<String>,
    pub work_experience: Option<String>,
    pub linkedin_url: Option<String>,

    // employer fields
    pub company_name: Option<String>,
    pub company_description: Option<String>,
    pub company_logo: Option<String>,
    pub website_url: Option<String>,

    // shared
    pub contact_number: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Public part of the user returned to the client. No credential data.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub role: Role,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            display_name: u.display_name,
            role: u.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct SigninResponse {
    pub message: String,
    pub role: Role,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: PublicUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_response_never_contains_a_password() {
        let response = SignupResponse {
            message: "Confirmation email sent!".into(),
            user: PublicUser {
                id: Uuid::new_v4(),
                email: "a@x.com".into(),
                display_name: "A".into(),
                role: Role::JobSeeker,
            },
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("a@x.com"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn signup_request_defaults_missing_skills_to_empty() {
        let body: SignupRequest = serde_json::from_str(
            r#"{"email":"a@x.com","password":"pw123456","role":"job_seeker","name":"A"}"#,
        )
        .unwrap();
        assert!(body.skills.is_empty());
        assert!(body.company_name.is_none());
    }
}
