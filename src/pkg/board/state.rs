use std::collections::HashMap;

use crate::{
    pkg::{
        board::{
            client::JobsApi,
            form::CardForm,
        },
        internal::adaptors::jobs::spec::{JobStatus, STATUSES},
        server::handlers::jobs::Job,
    },
    prelude::Result,
};

/// Where a dragged card was released: over a column, or over another card
/// (whose column it inherits).
#[derive(Debug, Clone, PartialEq)]
pub enum DropTarget {
    Column(JobStatus),
    Card(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    Moved(JobStatus),
    Unchanged,
}

/// Buckets cards into the four fixed columns, column order fixed, list order
/// preserved within a column.
pub fn group_by_status<'a>(jobs: &'a [Job]) -> Vec<(JobStatus, Vec<&'a Job>)> {
    let mut buckets: HashMap<JobStatus, Vec<&Job>> = HashMap::new();
    for job in jobs {
        buckets.entry(job.status).or_default().push(job);
    }
    STATUSES
        .iter()
        .map(|status| (*status, buckets.remove(status).unwrap_or_default()))
        .collect()
}

/// Client-side board state: the full card list plus the API used to persist
/// each mutation. Every operation is optimistic: local state changes first,
/// then the call goes out. A failed call leaves the optimistic state in
/// place and returns the error to the caller.
pub struct Board<A: JobsApi> {
    jobs: Vec<Job>,
    api: A,
}

impl<A: JobsApi> Board<A> {
    pub fn new(jobs: Vec<Job>, api: A) -> Self {
        Board { jobs, api }
    }

    pub async fn load(api: A) -> Result<Self> {
        let jobs = api.list().await?;
        Ok(Board { jobs, api })
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn card(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn columns(&self) -> Vec<(JobStatus, Vec<&Job>)> {
        group_by_status(&self.jobs)
    }

    /// Drag release: resolve the target to a column, then move the card. A
    /// drop resolving to the card's current column is a no-op with no call.
    pub async fn move_card(&mut self, id: &str, target: DropTarget) -> Result<MoveOutcome> {
        let Some(card) = self.card(id) else {
            return Ok(MoveOutcome::Unchanged);
        };
        let new_status = match target {
            DropTarget::Column(status) => Some(status),
            DropTarget::Card(over_id) => self.card(&over_id).map(|over| over.status),
        };
        let Some(new_status) = new_status else {
            return Ok(MoveOutcome::Unchanged);
        };
        if new_status == card.status {
            return Ok(MoveOutcome::Unchanged);
        }

        if let Some(job) = self.jobs.iter_mut().find(|job| job.id == id) {
            job.status = new_status;
        }
        if let Err(err) = self.api.move_to(id, new_status).await {
            tracing::warn!("failed to persist move of {}: {}", id, err);
            return Err(err);
        }
        Ok(MoveOutcome::Moved(new_status))
    }

    /// Form submission: create when the form has no id, update otherwise.
    /// Local state is reconciled with the record the server returns.
    pub async fn save(&mut self, form: CardForm) -> Result<Job> {
        let payload = form.payload()?;
        match form.id {
            Some(id) => {
                let saved = self.api.update(&id, &payload).await?;
                if let Some(job) = self.jobs.iter_mut().find(|job| job.id == saved.id) {
                    *job = saved.clone();
                }
                Ok(saved)
            }
            None => {
                let saved = self.api.create(&payload).await?;
                self.jobs.insert(0, saved.clone());
                Ok(saved)
            }
        }
    }

    /// Optimistic removal; the card is gone locally even if the delete call
    /// then fails, in which case the error is returned.
    pub async fn remove(&mut self, id: &str) -> Result<()> {
        self.jobs.retain(|job| job.id != id);
        if let Err(err) = self.api.delete(id).await {
            tracing::warn!("failed to delete {} on server: {}", id, err);
            return Err(err);
        }
        Ok(())
    }
}
