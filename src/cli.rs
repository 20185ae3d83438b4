use crate::domain::models::RepoSlug;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_ENV_FILE: &str = ".local.env";
pub const DEFAULT_MARKER: &str = "KAFKA_SCHEMA_REGISTRY_";
pub const DEFAULT_GATEWAY_REF: &str = "dev";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Parser, Debug)]
#[command(name = "schemasync", version, about = "Schema version sync check")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare schema declarations added to the local env file against the
    /// gateway's schema subjects and comment on the pull request on mismatch.
    Check {
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        github_token: String,
        #[arg(
            long,
            env = "KSP_REPO",
            help = "Gateway repository holding the reference document (owner/name)"
        )]
        ksp_repo: String,
        #[arg(
            long,
            env = "TOPICS_FILE_PATH",
            help = "Path of the reference document within the gateway repository"
        )]
        topics_file_path: String,
        #[arg(long, default_value = DEFAULT_GATEWAY_REF)]
        gateway_ref: String,
        #[arg(long, default_value = DEFAULT_ENV_FILE)]
        env_file: PathBuf,
        #[arg(
            long,
            default_value = DEFAULT_MARKER,
            help = "Substring identifying schema-registry declaration lines"
        )]
        marker: String,
    },
}

/// Run configuration built once at entry; stages never read ambient state.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub token: String,
    pub gateway_repo: RepoSlug,
    pub topics_path: String,
    pub gateway_ref: String,
    pub env_file: PathBuf,
    pub marker: String,
    pub api_base: String,
}

impl CheckConfig {
    pub fn from_command(command: &Commands) -> anyhow::Result<Self> {
        let Commands::Check {
            github_token,
            ksp_repo,
            topics_file_path,
            gateway_ref,
            env_file,
            marker,
        } = command;
        let gateway_repo: RepoSlug = ksp_repo.parse()?;
        let api_base = std::env::var("GITHUB_API_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Ok(CheckConfig {
            token: github_token.clone(),
            gateway_repo,
            topics_path: topics_file_path.clone(),
            gateway_ref: gateway_ref.clone(),
            env_file: env_file.clone(),
            marker: marker.clone(),
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }
}
