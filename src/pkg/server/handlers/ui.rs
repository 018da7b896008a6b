use askama::Template;
use axum::{extract::State, response::Html};

use crate::{
    pkg::{
        internal::adaptors::jobs::selectors::JobSelector,
        server::{handlers::jobs::Job, state::AppState, uispec::BoardPage},
    },
    prelude::Result,
};

pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let mut conn = state.db_pool.acquire().await?;
    let entries = JobSelector::new(&mut conn).get_all().await?;
    let jobs: Vec<Job> = entries.into_iter().map(Job::from).collect();
    tracing::debug!("rendering board with {} cards", jobs.len());

    let template = BoardPage::from_jobs(jobs);
    Ok(Html(template.render()?))
}
