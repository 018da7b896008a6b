use chrono::{DateTime, NaiveDate};

use crate::{
    pkg::{
        board::client::CardPayload,
        internal::adaptors::jobs::spec::JobStatus,
        server::handlers::jobs::Job,
    },
    prelude::{Error, Result},
};

/// Add/edit form state for one card. An `id` means the submission is an
/// update; otherwise it creates.
#[derive(Debug, Clone, PartialEq)]
pub struct CardForm {
    pub id: Option<String>,
    pub company: String,
    pub role: String,
    pub date_applied: String,
    pub status: JobStatus,
}

impl CardForm {
    pub fn empty(today: NaiveDate) -> Self {
        CardForm {
            id: None,
            company: String::new(),
            role: String::new(),
            date_applied: today.format("%Y-%m-%d").to_string(),
            status: JobStatus::Applied,
        }
    }

    pub fn for_card(job: &Job) -> Self {
        CardForm {
            id: Some(job.id.clone()),
            company: job.company.clone(),
            role: job.role.clone(),
            date_applied: job.date_applied.format("%Y-%m-%d").to_string(),
            status: job.status,
        }
    }

    /// Accepts a plain date or an RFC3339 timestamp, canonicalized to a date.
    pub fn canonical_date(&self) -> Result<NaiveDate> {
        let raw = self.date_applied.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(date);
        }
        if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
            return Ok(stamp.date_naive());
        }
        Err(Error::field(
            "dateApplied",
            &format!("`{}` is not a valid date", raw),
        ))
    }

    pub fn payload(&self) -> Result<CardPayload> {
        Ok(CardPayload {
            company: self.company.clone(),
            role: self.role.clone(),
            date_applied: self.canonical_date()?,
            status: self.status,
        })
    }
}
