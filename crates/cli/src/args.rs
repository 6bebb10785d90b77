use clap::{Parser, Subcommand};
use docket_core::DocketId;
use docket_gateway::{ClientConfig, ConfigError, load_config, load_default_config};
use std::path::PathBuf;

/// Search regulatory dockets served by the regulations API
#[derive(Debug, Parser)]
#[command(name = "docket", version, about)]
pub struct Args {
    /// Load client configuration from a JSON file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// API base URL, e.g. http://localhost:8000/api (overrides config and DOCKET_API_URL)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every regulation
    List,
    /// Search regulations by term
    Search {
        /// Free-text search term
        term: String,
    },
    /// Show a single regulation
    Show {
        /// Docket id
        id: DocketId,
    },
    /// Check that the API is reachable
    Ping,
    /// Read queries from stdin, one per line (`:q` to quit)
    Interactive,
}

impl Args {
    /// Resolve configuration: file (or embedded default), then environment, then flags
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => load_config(path)?,
            None => load_default_config()?,
        };
        let config = config.with_env_overrides();

        Ok(match &self.base_url {
            Some(url) => config.with_base_url(url.clone()),
            None => config,
        })
    }
}
