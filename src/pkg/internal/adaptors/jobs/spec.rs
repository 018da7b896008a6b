use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Column order on the board.
pub const STATUSES: [JobStatus; 4] = [
    JobStatus::Applied,
    JobStatus::Interviewing,
    JobStatus::OfferReceived,
    JobStatus::Rejected,
];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "job_status", rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Applied,
    Interviewing,
    #[serde(rename = "Offer Received")]
    OfferReceived,
    Rejected,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Interviewing => "Interviewing",
            Self::OfferReceived => "Offer Received",
            Self::Rejected => "Rejected",
        }
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Applied" => Ok(Self::Applied),
            "Interviewing" => Ok(Self::Interviewing),
            "Offer Received" => Ok(Self::OfferReceived),
            "Rejected" => Ok(Self::Rejected),
            _ => Err(format!("invalid status: {}", s)),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(FromRow, Debug, Clone)]
pub struct JobEntry {
    pub job_id: String,
    pub company: String,
    pub role: String,
    pub date_applied: NaiveDate,
    pub status: JobStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewJob {
    pub company: String,
    pub role: String,
    pub date_applied: NaiveDate,
    pub status: JobStatus,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct JobPatch {
    pub company: Option<String>,
    pub role: Option<String>,
    pub date_applied: Option<NaiveDate>,
    pub status: Option<JobStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wire_labels_roundtrip() {
        for status in STATUSES {
            let label = serde_json::to_value(status).unwrap();
            assert_eq!(label, status.as_str());
            let back: JobStatus = serde_json::from_value(label).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn offer_received_label_keeps_the_space() {
        assert_eq!(
            serde_json::to_string(&JobStatus::OfferReceived).unwrap(),
            r#""Offer Received""#
        );
    }

    #[test]
    fn parses_exact_labels_only() {
        assert_eq!("Applied".parse::<JobStatus>().unwrap(), JobStatus::Applied);
        assert_eq!(
            "Offer Received".parse::<JobStatus>().unwrap(),
            JobStatus::OfferReceived
        );
        assert!("applied".parse::<JobStatus>().is_err());
        assert!("Ghosted".parse::<JobStatus>().is_err());
    }

    #[test]
    fn default_status_is_applied() {
        assert_eq!(JobStatus::default(), JobStatus::Applied);
    }
}
