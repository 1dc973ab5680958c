use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::role::Role;

/// JWT payload proving a prior successful signin. Never persisted; validity
/// is purely signature plus expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,   // user ID issued by the identity provider
    pub role: Role,  // employer or job_seeker
    pub iat: usize,  // issued at (unix timestamp)
    pub exp: usize,  // expires at (unix timestamp)
    pub iss: String, // issuer
    pub aud: String, // audience
}
