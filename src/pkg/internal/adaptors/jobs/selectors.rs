use sqlx::PgConnection;

use crate::{pkg::internal::adaptors::jobs::spec::JobEntry, prelude::Result};

pub struct JobSelector<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> JobSelector<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        JobSelector { conn }
    }

    pub async fn get_by_id(&mut self, id: &str) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(
            "SELECT job_id, company, role, date_applied, status, created_at, updated_at
             FROM jobs WHERE job_id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(row)
    }

    pub async fn get_all(&mut self) -> Result<Vec<JobEntry>> {
        let rows = sqlx::query_as::<_, JobEntry>(
            "SELECT job_id, company, role, date_applied, status, created_at, updated_at
             FROM jobs ORDER BY date_applied DESC",
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(rows)
    }
}
