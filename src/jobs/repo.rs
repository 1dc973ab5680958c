use sqlx::PgPool;
use uuid::Uuid;

use crate::jobs::repo_types::JobPosting;
use crate::jobs::services::NewJob;

impl JobPosting {
    /// Insert with status `open` and server-assigned timestamps.
    pub async fn insert(db: &PgPool, job: &NewJob) -> anyhow::Result<JobPosting> {
        let posting = sqlx::query_as::<_, JobPosting>(
            r#"
            INSERT INTO job_postings
                (employer_id, title, description, location, details, application_deadline)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, employer_id, title, description, location, details,
                      status, application_deadline, created_at, updated_at
            "#,
        )
        .bind(job.employer_id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.location)
        .bind(&job.details)
        .bind(job.application_deadline)
        .fetch_one(db)
        .await?;
        Ok(posting)
    }

    /// Open postings, newest first. This is the seeker dashboard feed.
    pub async fn list_open(db: &PgPool, limit: i64, offset: i64) -> anyhow::Result<Vec<JobPosting>> {
        let rows = sqlx::query_as::<_, JobPosting>(
            r#"
            SELECT id, employer_id, title, description, location, details,
                   status, application_deadline, created_at, updated_at
            FROM job_postings
            WHERE status = 'open'
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn list_by_employer(
        db: &PgPool,
        employer_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> anyhow::Result<Vec<JobPosting>> {
        let rows = sqlx::query_as::<_, JobPosting>(
            r#"
            SELECT id, employer_id, title, description, location, details,
                   status, application_deadline, created_at, updated_at
            FROM job_postings
            WHERE employer_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(employer_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
