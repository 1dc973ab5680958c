use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Account role, fixed at signup. Parsed from the request body exactly once;
/// everything downstream matches on the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
pub enum Role {
    Employer,
    JobSeeker,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Employer => "employer",
            Role::JobSeeker => "job_seeker",
        }
    }

    /// Frontend route the auth callback redirects to.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Employer => "/employer/dashboard",
            Role::JobSeeker => "/job-seeker/dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employer" => Ok(Role::Employer),
            "job_seeker" => Ok(Role::JobSeeker),
            _ => Err(ApiError::Validation(
                "role must be employer or job_seeker".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles() {
        assert_eq!("employer".parse::<Role>().unwrap(), Role::Employer);
        assert_eq!("job_seeker".parse::<Role>().unwrap(), Role::JobSeeker);
    }

    #[test]
    fn rejects_anything_else() {
        for bad in ["admin", "Employer", "jobseeker", ""] {
            assert!(bad.parse::<Role>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn serde_uses_snake_case() {
        assert_eq!(serde_json::to_string(&Role::JobSeeker).unwrap(), "\"job_seeker\"");
        let role: Role = serde_json::from_str("\"employer\"").unwrap();
        assert_eq!(role, Role::Employer);
    }
}
