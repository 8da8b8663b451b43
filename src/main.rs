use anyhow::Result;
use clap::Parser;
use recruit_client::cli::{handle_command, RecruitCli};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout belongs to the rendered views.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(
            EnvFilter::from_default_env()
                .add_directive("info".parse().expect("Invalid log directive")),
        )
        .init();

    let cli = RecruitCli::parse();
    handle_command(cli).await
}
