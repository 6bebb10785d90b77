mod args;
mod commands;
mod render;

use anyhow::Context;
use clap::Parser;
use docket_gateway::RestClient;
use docket_search::ViewStatus;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use args::{Args, Command};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout carries only results
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docket=info,docket_search=info,docket_gateway=info".into()),
        )
        .init();

    let args = Args::parse();
    let config = args.client_config().context("Invalid configuration")?;
    let client = Arc::new(RestClient::new(&config).context("Invalid configuration")?);
    tracing::debug!("Using regulations API at {}", client.base_url());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match args.command {
        Command::List => {
            let status = commands::list(client, &mut out).await?;
            exit_status(&status)
        }
        Command::Search { term } => {
            let status = commands::search(client, &term, &mut out).await?;
            exit_status(&status)
        }
        Command::Show { id } => {
            commands::show(client.as_ref(), id, &mut out).await?;
            0
        }
        Command::Ping => {
            let status = client
                .health()
                .await
                .with_context(|| format!("{} is not reachable", client.base_url()))?;
            writeln!(out, "{}", status.message)?;
            0
        }
        Command::Interactive => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            commands::interactive(client, stdin, &mut out).await?;
            0
        }
    };

    out.flush()?;
    Ok(ExitCode::from(code))
}

/// One-shot commands exit non-zero when the view settled as failed
fn exit_status(status: &ViewStatus) -> u8 {
    match status {
        ViewStatus::Failed(_) => 1,
        _ => 0,
    }
}
