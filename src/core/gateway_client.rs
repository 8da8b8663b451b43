// src/core/gateway_client.rs
//! HTTP client for the recruitment gateway - JSON in, JSON out.

use anyhow::{Context, Result};
use tracing::{error, trace};

use crate::types::{
    dto::{Application, Interview, Job, ScreeningResult, Slot},
    response::{ApplyResponse, JobCreateResponse},
};

const JOBS_ENDPOINT: &str = "/jobs";
const APPLY_ENDPOINT: &str = "/apply";
const SCREENING_ENDPOINT: &str = "/screening";
const SLOTS_ENDPOINT: &str = "/slots";
const APPLICATIONS_ENDPOINT: &str = "/applications";
const INTERVIEWS_ENDPOINT: &str = "/interviews";

pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    /// Create a new gateway client with a per-request timeout
    pub fn new(base_url: String, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Post a new job opening
    pub async fn create_job(
        &self,
        title: &str,
        company: &str,
        description: &str,
    ) -> Result<JobCreateResponse> {
        let payload = serde_json::json!({
            "title": title,
            "company": company,
            "description": description,
        });

        self.post_json(JOBS_ENDPOINT, &payload).await
    }

    pub async fn list_jobs(&self) -> Result<Vec<Job>> {
        self.get(JOBS_ENDPOINT).await
    }

    /// Submit an application for a job
    pub async fn apply(
        &self,
        job_id: i32,
        candidate_name: &str,
        candidate_email: &str,
        resume_text: &str,
    ) -> Result<ApplyResponse> {
        let payload = serde_json::json!({
            "jobId": job_id,
            "candidateName": candidate_name,
            "candidateEmail": candidate_email,
            "resumeText": resume_text,
        });

        self.post_json(APPLY_ENDPOINT, &payload).await
    }

    /// Look up the stored screening result for a candidate email
    pub async fn screening_result(&self, email: &str) -> Result<ScreeningResult> {
        let url = format!("{}{}", self.base_url, SCREENING_ENDPOINT);

        trace!("Calling screening lookup: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("email", email)])
            .send()
            .await
            .context("Failed to query screening result")?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<ScreeningResult>()
                .await
                .context("Failed to parse screening result")
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Screening lookup failed with status {}: {}", status, error_text)
        }
    }

    pub async fn list_slots(&self) -> Result<Vec<Slot>> {
        self.get(SLOTS_ENDPOINT).await
    }

    pub async fn list_applications(&self) -> Result<Vec<Application>> {
        self.get(APPLICATIONS_ENDPOINT).await
    }

    pub async fn list_interviews(&self) -> Result<Vec<Interview>> {
        self.get(INTERVIEWS_ENDPOINT).await
    }

    /// Generic POST request with JSON
    async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R>
    where
        T: serde::Serialize,
        R: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<R>()
                .await
                .context("Failed to parse JSON response")
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            error!("Gateway error response: {}", error_text);
            anyhow::bail!("HTTP {} error: {}", status, error_text)
        }
    }

    /// Generic GET request
    async fn get<R>(&self, endpoint: &str) -> Result<R>
    where
        R: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<R>()
                .await
                .context("Failed to parse JSON response")
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("HTTP {} error: {}", status, error_text)
        }
    }
}
