// src/cli.rs
use crate::app::App;
use crate::config::GatewayConfig;
use crate::render::Dashboard;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hirewire")]
#[command(about = "Terminal client for the recruitment gateway")]
pub struct RecruitCli {
    #[command(subcommand)]
    pub command: RecruitCommand,

    /// Gateway base URL; overrides GATEWAY_URL
    #[arg(long)]
    pub gateway: Option<String>,
}

#[derive(Subcommand)]
pub enum RecruitCommand {
    /// Post a new job opening
    CreateJob {
        title: String,
        company: String,
        description: String,
    },
    /// List open positions
    Jobs,
    /// Apply for a job with a resume file
    Apply {
        #[arg(long)]
        job_id: i32,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        resume: PathBuf,
    },
    /// Look up the stored screening result for a candidate email
    Screening { email: String },
    /// Stream a resume file to the screening service
    SubmitResume {
        #[arg(long)]
        resume: PathBuf,
    },
    /// List interview slots
    Slots,
    /// Schedule an interview over the scheduling stream
    Schedule {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        slot: String,
    },
    /// List submitted applications
    Applications,
    /// List scheduled interviews
    Interviews,
    /// Load every view at once
    Overview,
}

pub async fn handle_command(cli: RecruitCli) -> Result<()> {
    let mut config = GatewayConfig::load()?;
    if let Some(gateway) = cli.gateway {
        config.base_url = gateway.trim_end_matches('/').to_string();
    }

    let mut app = App::new(&config)?;

    match cli.command {
        RecruitCommand::CreateJob {
            title,
            company,
            description,
        } => {
            app.create_job(&title, &company, &description).await?;
            println!("{}", app.dashboard.job_message);
            print!("{}", app.dashboard.jobs.render());
        }

        RecruitCommand::Jobs => {
            app.load_jobs().await?;
            print!("{}", app.dashboard.jobs.render());
        }

        RecruitCommand::Apply {
            job_id,
            name,
            email,
            resume,
        } => {
            let resume_text = tokio::fs::read_to_string(&resume)
                .await
                .with_context(|| format!("Failed to read resume: {}", resume.display()))?;
            app.apply(job_id, &name, &email, &resume_text).await?;
            println!("{}", app.dashboard.apply_message);
            print!("{}", app.dashboard.applications.render());
        }

        RecruitCommand::Screening { email } => {
            app.check_screening(&email).await?;
            println!("{}", app.dashboard.screen_result);
        }

        RecruitCommand::SubmitResume { resume } => {
            let resume_text = tokio::fs::read_to_string(&resume)
                .await
                .with_context(|| format!("Failed to read resume: {}", resume.display()))?;
            app.submit_resume(&resume_text).await?;
            println!("{}", app.dashboard.screening_status);
        }

        RecruitCommand::Slots => {
            app.load_slots().await?;
            println!("Interview slots:");
            print!("{}", Dashboard::render_options(&app.dashboard.slot_options));
        }

        RecruitCommand::Schedule { name, email, slot } => {
            app.schedule(&name, &email, &slot).await?;
            println!("{}", app.dashboard.schedule_message);
            if !app.dashboard.schedule_message.starts_with("Error: ") {
                println!("Interview slots:");
                print!("{}", Dashboard::render_options(&app.dashboard.slot_options));
                print!("{}", app.dashboard.interviews.render());
            }
        }

        RecruitCommand::Applications => {
            app.load_applications().await?;
            print!("{}", app.dashboard.applications.render());
        }

        RecruitCommand::Interviews => {
            app.load_interviews().await?;
            print!("{}", app.dashboard.interviews.render());
        }

        RecruitCommand::Overview => {
            app.refresh_all().await?;
            print!("{}", app.dashboard.render_all());
        }
    }

    Ok(())
}
