use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use crate::config::IdentityConfig;
use crate::identity::{IdentityError, IdentityProvider, IdentityUser};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for a GoTrue-style identity API (Supabase Auth and
/// compatible services).
pub struct GoTrueClient {
    http: Client,
    config: IdentityConfig,
}

/// User object as the provider returns it. Confirmation shows up either as
/// `email_confirmed_at` or the older `confirmed_at`, both null until the
/// confirmation link is clicked.
#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: Uuid,
    email: String,
    #[serde(default)]
    email_confirmed_at: Option<String>,
    #[serde(default)]
    confirmed_at: Option<String>,
}

impl From<ProviderUser> for IdentityUser {
    fn from(u: ProviderUser) -> Self {
        let email_confirmed = u.email_confirmed_at.is_some() || u.confirmed_at.is_some();
        Self {
            id: u.id,
            email: u.email,
            email_confirmed,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    user: ProviderUser,
}

/// Error bodies vary between GoTrue versions; take whichever field is set.
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ProviderErrorBody {
    fn message(self) -> String {
        self.msg
            .or(self.error_description)
            .or(self.error)
            .unwrap_or_else(|| "identity request rejected".into())
    }
}

impl GoTrueClient {
    pub fn new(config: IdentityConfig) -> Result<Self, IdentityError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, config })
    }

    async fn rejection(response: Response) -> IdentityError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ProviderErrorBody>(&body) {
            Ok(parsed) => IdentityError::Rejected(parsed.message()),
            Err(_) => IdentityError::Unexpected { status, body },
        }
    }

    async fn into_user(response: Response) -> Result<ProviderUser, IdentityError> {
        response
            .json::<ProviderUser>()
            .await
            .map_err(|e| IdentityError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl IdentityProvider for GoTrueClient {
    async fn sign_up(&self, email: &str, password: &str) -> Result<IdentityUser, IdentityError> {
        let url = format!("{}/signup", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.config.api_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let user = Self::into_user(response).await?;
            debug!(user_id = %user.id, "identity created");
            Ok(user.into())
        } else if status.is_client_error() {
            Err(Self::rejection(response).await)
        } else {
            Err(IdentityError::Unexpected {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<IdentityUser, IdentityError> {
        let url = format!("{}/token?grant_type=password", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.config.api_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body = response
                .json::<TokenResponse>()
                .await
                .map_err(|e| IdentityError::InvalidResponse(e.to_string()))?;
            debug!(user_id = %body.user.id, "identity authenticated");
            Ok(body.user.into())
        } else if status.is_client_error() {
            Err(Self::rejection(response).await)
        } else {
            Err(IdentityError::Unexpected {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }

    async fn delete_user(&self, id: Uuid) -> Result<(), IdentityError> {
        let url = format!("{}/admin/users/{}", self.config.base_url, id);
        let response = self
            .http
            .delete(&url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.service_key)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else if status.is_client_error() {
            Err(Self::rejection(response).await)
        } else {
            Err(IdentityError::Unexpected {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GoTrueClient {
        GoTrueClient::new(IdentityConfig {
            base_url: server.uri(),
            api_key: "anon-key".into(),
            service_key: "service-key".into(),
        })
        .expect("client should construct")
    }

    #[tokio::test]
    async fn sign_up_returns_unconfirmed_identity() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/signup"))
            .and(header("apikey", "anon-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "5a2f1d66-4b8a-4b7e-9d3e-0c6a1a64d001",
                "email": "a@x.com",
                "email_confirmed_at": null
            })))
            .mount(&server)
            .await;

        let user = client_for(&server).sign_up("a@x.com", "pw123456").await.unwrap();
        assert_eq!(user.email, "a@x.com");
        assert!(!user.email_confirmed);
    }

    #[tokio::test]
    async fn sign_up_propagates_provider_rejection_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/signup"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "code": 400,
                "msg": "User already registered"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .sign_up("a@x.com", "pw123456")
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::Rejected(ref m) if m == "User already registered"));
    }

    #[tokio::test]
    async fn sign_in_reads_confirmation_from_token_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "provider-token",
                "token_type": "bearer",
                "user": {
                    "id": "5a2f1d66-4b8a-4b7e-9d3e-0c6a1a64d001",
                    "email": "a@x.com",
                    "email_confirmed_at": "2026-01-10T09:30:00Z"
                }
            })))
            .mount(&server)
            .await;

        let user = client_for(&server).sign_in("a@x.com", "pw123456").await.unwrap();
        assert!(user.email_confirmed);
    }

    #[tokio::test]
    async fn sign_in_rejection_uses_error_description() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "invalid_grant",
                "error_description": "Invalid login credentials"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .sign_in("a@x.com", "nope")
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::Rejected(ref m) if m == "Invalid login credentials"));
    }

    #[tokio::test]
    async fn delete_user_hits_admin_endpoint_with_service_key() {
        let server = MockServer::start().await;
        let id = Uuid::new_v4();
        Mock::given(method("DELETE"))
            .and(path(format!("/admin/users/{id}")))
            .and(header("authorization", "Bearer service-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).delete_user(id).await.unwrap();
    }

    #[tokio::test]
    async fn server_errors_are_not_reported_as_rejections() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/signup"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .sign_up("a@x.com", "pw123456")
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::Unexpected { status: 503, .. }));
    }
}
