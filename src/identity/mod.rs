use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

mod gotrue;

pub use gotrue::GoTrueClient;

/// Account as held by the external identity provider. The provider owns
/// the credentials and the confirmation state; we only keep the id.
#[derive(Debug, Clone)]
pub struct IdentityUser {
    pub id: Uuid,
    pub email: String,
    pub email_confirmed: bool,
}

#[derive(Debug, Error)]
pub enum IdentityError {
    /// The provider refused the request (duplicate email, invalid
    /// credentials, weak password). The message is client-safe.
    #[error("{0}")]
    Rejected(String),

    #[error("identity provider returned {status}: {body}")]
    Unexpected { status: u16, body: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Credential gateway. All password handling happens behind this trait;
/// the application never sees or stores a password hash.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> Result<IdentityUser, IdentityError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<IdentityUser, IdentityError>;

    /// Remove an account again. Only used to compensate a signup whose
    /// profile write failed, so the provider is not left with an orphan.
    async fn delete_user(&self, id: Uuid) -> Result<(), IdentityError>;
}
