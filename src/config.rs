use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

/// External identity provider (account of record for credentials and
/// email confirmation).
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    pub base_url: String,
    pub api_key: String,
    /// Privileged key, needed only for the signup rollback path.
    pub service_key: String,
}

/// S3-compatible object storage holding uploaded resumes.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub endpoint: String,
    pub bucket: String,
    pub access_key: String,
    pub secret_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub frontend_origin: String,
    pub jwt: JwtConfig,
    pub identity: IdentityConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let frontend_origin =
            std::env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".into());

        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "jobboard".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "jobboard-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
        };

        let api_key = std::env::var("IDENTITY_API_KEY")?;
        let identity = IdentityConfig {
            base_url: std::env::var("IDENTITY_URL")?,
            service_key: std::env::var("IDENTITY_SERVICE_KEY")
                .unwrap_or_else(|_| api_key.clone()),
            api_key,
        };

        let storage = StorageConfig {
            endpoint: std::env::var("MINIO_ENDPOINT")?,
            bucket: std::env::var("MINIO_BUCKET").unwrap_or_else(|_| "resumes".into()),
            access_key: std::env::var("MINIO_ACCESS_KEY")?,
            secret_key: std::env::var("MINIO_SECRET_KEY")?,
        };

        Ok(Self {
            database_url,
            frontend_origin,
            jwt,
            identity,
            storage,
        })
    }
}
