use crate::domain::models::{EventContext, RepoSlug};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum GithubError {
    #[error("pull request number missing from event context")]
    MissingPullRequest,
    #[error("unexpected content encoding: {0} (expected base64)")]
    UnexpectedEncoding(String),
}

pub fn event_context() -> Option<EventContext> {
    let repo: RepoSlug = std::env::var("GITHUB_REPOSITORY").ok()?.parse().ok()?;
    let path = std::env::var("GITHUB_EVENT_PATH").ok()?;
    let raw = std::fs::read_to_string(path).ok()?;
    let payload: serde_json::Value = serde_json::from_str(&raw).ok()?;
    let pull_request = payload.get("pull_request")?.get("number")?.as_u64()?;
    Some(EventContext { repo, pull_request })
}

#[derive(Deserialize)]
struct ContentResponse {
    content: String,
    encoding: String,
}

pub struct GithubClient {
    http: reqwest::blocking::Client,
    base: String,
    token: String,
}

impl GithubClient {
    pub fn new(base: &str, token: &str) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("schemasync/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(GithubClient {
            http,
            base: base.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Decoded text content of `path` in `repo` at `reference`.
    pub fn fetch_file(
        &self,
        repo: &RepoSlug,
        path: &str,
        reference: &str,
    ) -> anyhow::Result<String> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.base, repo.owner, repo.name, path
        );
        let resp: ContentResponse = self
            .http
            .get(url)
            .query(&[("ref", reference)])
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .send()?
            .error_for_status()?
            .json()?;
        if resp.encoding != "base64" {
            return Err(GithubError::UnexpectedEncoding(resp.encoding).into());
        }
        decode_content(&resp.content)
    }

    pub fn post_comment(&self, repo: &RepoSlug, number: u64, body: &str) -> anyhow::Result<()> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.base, repo.owner, repo.name, number
        );
        self.http
            .post(url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .json(&serde_json::json!({ "body": body }))
            .send()?
            .error_for_status()?;
        Ok(())
    }
}

/// The contents API wraps base64 at 60 columns; strip whitespace first.
fn decode_content(content: &str) -> anyhow::Result<String> {
    let compact: String = content.split_ascii_whitespace().collect();
    let bytes = BASE64.decode(compact.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}
