use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::auth::repo_types::User;
use crate::auth::role::Role;

impl User {
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, display_name, role, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, display_name, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Insert the linking record inside the signup transaction, so the user
    /// row and its profile row commit or fail together.
    pub async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        email: &str,
        display_name: &str,
        role: Role,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, display_name, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, display_name, role, created_at
            "#,
        )
        .bind(id)
        .bind(email)
        .bind(display_name)
        .bind(role)
        .fetch_one(&mut **tx)
        .await?;
        Ok(user)
    }
}
