use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::{
    pkg::{internal::adaptors::jobs::spec::JobStatus, server::handlers::jobs::Job},
    prelude::{Error, Result},
};

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardPayload {
    pub company: String,
    pub role: String,
    pub date_applied: NaiveDate,
    pub status: JobStatus,
}

/// Status-only patch sent when a card is dragged to another column.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StatusPatch {
    pub status: JobStatus,
}

#[async_trait]
pub trait JobsApi {
    async fn list(&self) -> Result<Vec<Job>>;
    async fn create(&self, card: &CardPayload) -> Result<Job>;
    async fn update(&self, id: &str, card: &CardPayload) -> Result<Job>;
    async fn move_to(&self, id: &str, status: JobStatus) -> Result<Job>;
    async fn delete(&self, id: &str) -> Result<()>;
}

pub struct HttpJobsApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpJobsApi {
    pub fn new(base_url: &str) -> Self {
        HttpJobsApi {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound("Job"));
        }
        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(Value::as_str)
                        .map(str::to_owned)
                })
                .unwrap_or_else(|| "no details".to_string());
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        Ok(Self::check(response).await?.json().await?)
    }
}

#[async_trait]
impl JobsApi for HttpJobsApi {
    async fn list(&self) -> Result<Vec<Job>> {
        let response = self.http.get(self.url("/jobs")).send().await?;
        Self::decode(response).await
    }

    async fn create(&self, card: &CardPayload) -> Result<Job> {
        let response = self.http.post(self.url("/jobs")).json(card).send().await?;
        Self::decode(response).await
    }

    async fn update(&self, id: &str, card: &CardPayload) -> Result<Job> {
        let response = self
            .http
            .put(self.url(&format!("/jobs/{}", id)))
            .json(card)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn move_to(&self, id: &str, status: JobStatus) -> Result<Job> {
        let response = self
            .http
            .put(self.url(&format!("/jobs/{}", id)))
            .json(&StatusPatch { status })
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/jobs/{}", id)))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
