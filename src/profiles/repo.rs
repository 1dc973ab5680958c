use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::profiles::dto::{EmployerProfileInput, JobSeekerProfileInput};
use crate::profiles::repo_types::{EmployerProfile, JobSeekerProfile};

impl EmployerProfile {
    pub async fn get(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<EmployerProfile>> {
        let profile = sqlx::query_as::<_, EmployerProfile>(
            r#"
            SELECT user_id, company_name, description, logo_url, website_url,
                   contact_number, location, updated_at
            FROM employer_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(profile)
    }

    /// Signup-time insert, part of the same transaction as the user row.
    pub async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        company_name: &str,
        input: &EmployerProfileInput,
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO employer_profiles
                (user_id, company_name, description, logo_url, website_url,
                 contact_number, location)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user_id)
        .bind(company_name)
        .bind(&input.description)
        .bind(&input.logo_url)
        .bind(&input.website_url)
        .bind(&input.contact_number)
        .bind(&input.location)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    /// Idempotent: repeating the same call leaves the same stored state.
    pub async fn upsert(
        db: &PgPool,
        user_id: Uuid,
        company_name: &str,
        input: &EmployerProfileInput,
    ) -> anyhow::Result<EmployerProfile> {
        let profile = sqlx::query_as::<_, EmployerProfile>(
            r#"
            INSERT INTO employer_profiles
                (user_id, company_name, description, logo_url, website_url,
                 contact_number, location)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id) DO UPDATE
            SET company_name = EXCLUDED.company_name,
                description = EXCLUDED.description,
                logo_url = EXCLUDED.logo_url,
                website_url = EXCLUDED.website_url,
                contact_number = EXCLUDED.contact_number,
                location = EXCLUDED.location,
                updated_at = now()
            RETURNING user_id, company_name, description, logo_url, website_url,
                      contact_number, location, updated_at
            "#,
        )
        .bind(user_id)
        .bind(company_name)
        .bind(&input.description)
        .bind(&input.logo_url)
        .bind(&input.website_url)
        .bind(&input.contact_number)
        .bind(&input.location)
        .fetch_one(db)
        .await?;
        Ok(profile)
    }
}

impl JobSeekerProfile {
    pub async fn get(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<JobSeekerProfile>> {
        let profile = sqlx::query_as::<_, JobSeekerProfile>(
            r#"
            SELECT user_id, resume_key, portfolio_url, skills, education,
                   work_experience, contact_number, location, linkedin_url, updated_at
            FROM job_seeker_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(profile)
    }

    pub async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        input: &JobSeekerProfileInput,
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO job_seeker_profiles
                (user_id, portfolio_url, skills, education, work_experience,
                 contact_number, location, linkedin_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user_id)
        .bind(&input.portfolio_url)
        .bind(&input.skills)
        .bind(&input.education)
        .bind(&input.work_experience)
        .bind(&input.contact_number)
        .bind(&input.location)
        .bind(&input.linkedin_url)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    /// Idempotent upsert over the scalar fields. Does not touch
    /// `resume_key`; that column belongs to the upload flow.
    pub async fn upsert(
        db: &PgPool,
        user_id: Uuid,
        input: &JobSeekerProfileInput,
    ) -> anyhow::Result<JobSeekerProfile> {
        let profile = sqlx::query_as::<_, JobSeekerProfile>(
            r#"
            INSERT INTO job_seeker_profiles
                (user_id, portfolio_url, skills, education, work_experience,
                 contact_number, location, linkedin_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (user_id) DO UPDATE
            SET portfolio_url = EXCLUDED.portfolio_url,
                skills = EXCLUDED.skills,
                education = EXCLUDED.education,
                work_experience = EXCLUDED.work_experience,
                contact_number = EXCLUDED.contact_number,
                location = EXCLUDED.location,
                linkedin_url = EXCLUDED.linkedin_url,
                updated_at = now()
            RETURNING user_id, resume_key, portfolio_url, skills, education,
                      work_experience, contact_number, location, linkedin_url, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&input.portfolio_url)
        .bind(&input.skills)
        .bind(&input.education)
        .bind(&input.work_experience)
        .bind(&input.contact_number)
        .bind(&input.location)
        .bind(&input.linkedin_url)
        .fetch_one(db)
        .await?;
        Ok(profile)
    }

    pub async fn set_resume_key(db: &PgPool, user_id: Uuid, key: &str) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE job_seeker_profiles
            SET resume_key = $2, updated_at = now()
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(key)
        .execute(db)
        .await?;
        Ok(())
    }
}
