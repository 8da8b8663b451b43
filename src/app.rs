// src/app.rs
//! Action layer: one method per UI action. Each action builds its payload,
//! talks to the gateway, writes the outcome into a dashboard region, and
//! reloads the list views that depend on it.

use anyhow::Result;
use tracing::{error, info};

use crate::config::GatewayConfig;
use crate::core::{GatewayClient, StreamSubmitter};
use crate::render::Dashboard;

pub struct App {
    client: GatewayClient,
    screening: StreamSubmitter,
    scheduling: StreamSubmitter,
    pub dashboard: Dashboard,
}

impl App {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let client = GatewayClient::new(config.base_url.clone(), config.timeout_seconds)?;
        let ws_base = config.ws_base_url();

        Ok(Self {
            client,
            screening: StreamSubmitter::screening(&ws_base),
            scheduling: StreamSubmitter::scheduling(&ws_base),
            dashboard: Dashboard::new(),
        })
    }

    pub async fn load_jobs(&mut self) -> Result<()> {
        let jobs = self.client.list_jobs().await?;
        self.dashboard.replace_jobs(&jobs);
        Ok(())
    }

    pub async fn load_slots(&mut self) -> Result<()> {
        let slots = self.client.list_slots().await?;
        self.dashboard.replace_slots(&slots);
        Ok(())
    }

    pub async fn load_applications(&mut self) -> Result<()> {
        let applications = self.client.list_applications().await?;
        self.dashboard.replace_applications(&applications);
        Ok(())
    }

    pub async fn load_interviews(&mut self) -> Result<()> {
        let interviews = self.client.list_interviews().await?;
        self.dashboard.replace_interviews(&interviews);
        Ok(())
    }

    /// Everything the page loaded on open.
    pub async fn refresh_all(&mut self) -> Result<()> {
        self.load_jobs().await?;
        self.load_slots().await?;
        self.load_applications().await?;
        self.load_interviews().await?;
        Ok(())
    }

    /// Post a new job, then reload the job list.
    pub async fn create_job(&mut self, title: &str, company: &str, description: &str) -> Result<()> {
        match self.client.create_job(title, company, description).await {
            Ok(response) => {
                info!("Job created with id {}", response.job_id);
                self.dashboard.job_message = "Job created!".to_string();
                self.load_jobs().await?;
            }
            Err(e) => {
                error!("Job creation failed: {:#}", e);
                self.dashboard.job_message = format!("Error: {}", e);
            }
        }
        Ok(())
    }

    /// Apply for a job, show the gateway's message, reload applications.
    pub async fn apply(
        &mut self,
        job_id: i32,
        candidate_name: &str,
        candidate_email: &str,
        resume_text: &str,
    ) -> Result<()> {
        match self
            .client
            .apply(job_id, candidate_name, candidate_email, resume_text)
            .await
        {
            Ok(response) => {
                self.dashboard.apply_message = response.message;
                self.load_applications().await?;
            }
            Err(e) => {
                error!("Application failed: {:#}", e);
                self.dashboard.apply_message = format!("Error: {}", e);
            }
        }
        Ok(())
    }

    pub async fn check_screening(&mut self, email: &str) -> Result<()> {
        match self.client.screening_result(email).await {
            Ok(result) => {
                self.dashboard.screen_result =
                    format!("Score: {}, Feedback: {}", result.score, result.feedback);
            }
            Err(e) => {
                error!("Screening lookup failed: {:#}", e);
                self.dashboard.screen_result = format!("Error: {}", e);
            }
        }
        Ok(())
    }

    /// Stream a resume over the screening socket; the reply (or the
    /// transport error) lands in the screening status line.
    pub async fn submit_resume(&mut self, resume_text: &str) -> Result<()> {
        match self.screening.submit_resume(resume_text).await {
            Ok(reply) => {
                self.dashboard.screening_status = reply;
            }
            Err(e) => {
                error!("Resume submission failed: {:#}", e);
                self.dashboard.screening_status = format!("Error: {}", e);
            }
        }
        Ok(())
    }

    /// Schedule an interview over the scheduling socket. A confirmed reply
    /// reloads the slot list and the interview table; an error reloads
    /// nothing.
    pub async fn schedule(
        &mut self,
        candidate_name: &str,
        candidate_email: &str,
        slot_id: &str,
    ) -> Result<()> {
        match self
            .scheduling
            .submit_schedule(candidate_name, candidate_email, slot_id)
            .await
        {
            Ok(reply) => {
                self.dashboard.schedule_message = reply;
                self.load_slots().await?;
                self.load_interviews().await?;
            }
            Err(e) => {
                error!("Scheduling failed: {:#}", e);
                self.dashboard.schedule_message = format!("Error: {}", e);
            }
        }
        Ok(())
    }
}
