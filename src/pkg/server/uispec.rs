use askama::Template;

use crate::pkg::{
    board::state::group_by_status,
    internal::adaptors::jobs::spec::JobStatus,
    server::handlers::jobs::Job,
};

#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardPage {
    pub columns: Vec<BoardColumn>,
}

pub struct BoardColumn {
    pub status: JobStatus,
    pub jobs: Vec<Job>,
}

impl BoardColumn {
    pub fn accent(&self) -> &'static str {
        match self.status {
            JobStatus::Applied => "border-blue-500 bg-blue-50",
            JobStatus::Interviewing => "border-yellow-500 bg-yellow-50",
            JobStatus::OfferReceived => "border-green-500 bg-green-50",
            JobStatus::Rejected => "border-red-500 bg-red-50",
        }
    }
}

impl BoardPage {
    pub fn from_jobs(jobs: Vec<Job>) -> Self {
        let columns = group_by_status(&jobs)
            .into_iter()
            .map(|(status, jobs)| BoardColumn {
                status,
                jobs: jobs.into_iter().cloned().collect(),
            })
            .collect();
        BoardPage { columns }
    }
}
