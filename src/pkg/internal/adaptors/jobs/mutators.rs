use sqlx::PgConnection;
use uuid::Uuid;

use crate::pkg::internal::adaptors::jobs::spec::{JobEntry, JobPatch, NewJob};
use crate::prelude::Result;

pub struct JobMutator<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        JobMutator { conn }
    }

    pub async fn create(&mut self, job: NewJob) -> Result<JobEntry> {
        let row = sqlx::query_as::<_, JobEntry>(
            r#"
            INSERT INTO jobs (job_id, company, role, date_applied, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING job_id, company, role, date_applied, status, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&job.company)
        .bind(&job.role)
        .bind(job.date_applied)
        .bind(job.status)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(row)
    }

    pub async fn update(&mut self, id: &str, patch: JobPatch) -> Result<Option<JobEntry>> {
        let mut query = String::from("UPDATE jobs SET updated_at = CURRENT_TIMESTAMP");
        let mut param_count = 1;

        if patch.company.is_some() {
            param_count += 1;
            query.push_str(&format!(", company = ${}", param_count));
        }
        if patch.role.is_some() {
            param_count += 1;
            query.push_str(&format!(", role = ${}", param_count));
        }
        if patch.date_applied.is_some() {
            param_count += 1;
            query.push_str(&format!(", date_applied = ${}", param_count));
        }
        if patch.status.is_some() {
            param_count += 1;
            query.push_str(&format!(", status = ${}", param_count));
        }

        query.push_str(
            " WHERE job_id = $1 RETURNING job_id, company, role, date_applied, status, created_at, updated_at",
        );

        let mut q = sqlx::query_as::<_, JobEntry>(&query).bind(id);

        if let Some(company) = patch.company {
            q = q.bind(company);
        }
        if let Some(role) = patch.role {
            q = q.bind(role);
        }
        if let Some(date_applied) = patch.date_applied {
            q = q.bind(date_applied);
        }
        if let Some(status) = patch.status {
            q = q.bind(status);
        }
        let row = q.fetch_optional(&mut *self.conn).await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE job_id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
