use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::Validate;

use crate::{
    pkg::{
        internal::adaptors::jobs::{
            mutators::JobMutator,
            selectors::JobSelector,
            spec::{JobEntry, JobPatch, JobStatus, NewJob},
        },
        server::state::{AppState, GetTxn},
    },
    prelude::{Error, Result},
};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobInput {
    #[validate(
        required(message = "Company is required"),
        length(min = 1, message = "Company is required")
    )]
    pub company: Option<String>,
    #[validate(
        required(message = "Role is required"),
        length(min = 1, message = "Role is required")
    )]
    pub role: Option<String>,
    pub date_applied: Option<NaiveDate>,
    pub status: Option<String>,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchJobInput {
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: Option<String>,
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: Option<String>,
    pub date_applied: Option<NaiveDate>,
    pub status: Option<String>,
}

/// Record shape on the wire; bookkeeping timestamps never leave the store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub company: String,
    pub role: String,
    pub date_applied: NaiveDate,
    pub status: JobStatus,
}

impl From<JobEntry> for Job {
    fn from(entry: JobEntry) -> Self {
        Job {
            id: entry.job_id,
            company: entry.company,
            role: entry.role,
            date_applied: entry.date_applied,
            status: entry.status,
        }
    }
}

fn parse_status(status: Option<&str>) -> Result<Option<JobStatus>> {
    match status {
        Some(raw) => {
            let status = raw
                .parse()
                .map_err(|_| Error::field("status", &format!("`{}` is not a valid status", raw)))?;
            Ok(Some(status))
        }
        None => Ok(None),
    }
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Job>>> {
    let mut conn = state.db_pool.acquire().await?;
    let entries = JobSelector::new(&mut conn).get_all().await?;
    let jobs: Vec<Job> = entries.into_iter().map(Job::from).collect();
    Ok(Json(jobs))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateJobInput>,
) -> Result<(StatusCode, Json<Job>)> {
    input.validate()?;
    let new_job = NewJob {
        company: input.company.unwrap_or_default(),
        role: input.role.unwrap_or_default(),
        date_applied: input
            .date_applied
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
        status: parse_status(input.status.as_deref())?.unwrap_or_default(),
    };

    let mut tx = state.db_pool.begin_txn().await?;
    let entry = JobMutator::new(&mut tx).create(new_job).await?;
    tx.commit().await?;

    tracing::info!("created job {} at {}", entry.job_id, entry.company);
    Ok((StatusCode::CREATED, Json(entry.into())))
}

pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Job>> {
    let mut conn = state.db_pool.acquire().await?;
    let entry = JobSelector::new(&mut conn)
        .get_by_id(&id)
        .await?
        .ok_or(Error::NotFound("Job"))?;
    Ok(Json(entry.into()))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<PatchJobInput>,
) -> Result<Json<Job>> {
    input.validate()?;
    let patch = JobPatch {
        company: input.company,
        role: input.role,
        date_applied: input.date_applied,
        status: parse_status(input.status.as_deref())?,
    };

    let mut tx = state.db_pool.begin_txn().await?;
    let entry = JobMutator::new(&mut tx)
        .update(&id, patch)
        .await?
        .ok_or(Error::NotFound("Job"))?;
    tx.commit().await?;

    tracing::debug!("updated job {}", entry.job_id);
    Ok(Json(entry.into()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let deleted = JobMutator::new(&mut tx).delete(&id).await?;
    tx.commit().await?;

    if !deleted {
        return Err(Error::NotFound("Job"));
    }
    tracing::info!("deleted job {}", id);
    Ok(Json(json!({"message": "Successfully deleted"})))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_company_fails_validation_with_field_message() {
        let input: CreateJobInput =
            serde_json::from_value(json!({"role": "Engineer"})).unwrap();
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        let company = fields.get("company").expect("company error");
        assert_eq!(
            company[0].message.as_deref(),
            Some("Company is required")
        );
        assert!(!fields.contains_key("role"));
    }

    #[test]
    fn empty_company_fails_validation_with_field_message() {
        let input: CreateJobInput =
            serde_json::from_value(json!({"company": "", "role": "Engineer"})).unwrap();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("company"));
    }

    #[test]
    fn patch_accepts_status_only_payloads() {
        let input: PatchJobInput =
            serde_json::from_value(json!({"status": "Interviewing"})).unwrap();
        input.validate().unwrap();
        let status = parse_status(input.status.as_deref()).unwrap();
        assert_eq!(status, Some(JobStatus::Interviewing));
        assert_eq!(input.company, None);
        assert_eq!(input.date_applied, None);
    }

    #[test]
    fn unknown_status_is_a_field_level_error() {
        let err = parse_status(Some("Ghosted")).unwrap_err();
        match err {
            Error::Validation(errors) => {
                assert!(errors.field_errors().contains_key("status"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn status_defaults_to_applied_when_omitted() {
        let status = parse_status(None).unwrap().unwrap_or_default();
        assert_eq!(status, JobStatus::Applied);
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let job = Job {
            id: "abc".into(),
            company: "Initech".into(),
            role: "Engineer".into(),
            date_applied: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            status: JobStatus::OfferReceived,
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "abc",
                "company": "Initech",
                "role": "Engineer",
                "dateApplied": "2025-03-04",
                "status": "Offer Received",
            })
        );
    }
}
