use crate::cli::CheckConfig;
use crate::domain::models::{EventContext, Outcome};
use crate::services::github::{GithubClient, GithubError};
use crate::services::{diff, reconcile, topics};

/// The four-stage pipeline: extract declared changes, fetch the reference
/// document, flatten its subjects, reconcile and report. Stages run strictly
/// in order; an empty extraction ends the run before any network call.
pub fn run(config: &CheckConfig, event: Option<&EventContext>) -> anyhow::Result<Outcome> {
    eprintln!("checking changes in {}", config.env_file.display());
    let changes = diff::collect_declared_changes(&config.env_file, &config.marker)?;
    if changes.is_empty() {
        eprintln!("no schema version changes detected");
        return Ok(Outcome::NoChanges);
    }
    eprintln!("found {} schema declaration change(s)", changes.len());
    for change in &changes {
        eprintln!("  {}={}", change.key, change.value);
    }

    eprintln!(
        "fetching {} from {} (ref {})",
        config.topics_path, config.gateway_repo, config.gateway_ref
    );
    let client = GithubClient::new(&config.api_base, &config.token)?;
    let document = client.fetch_file(
        &config.gateway_repo,
        &config.topics_path,
        &config.gateway_ref,
    )?;
    let subjects = topics::referenced_subjects(&document)?;

    let missing = reconcile::missing_entries(&changes, &subjects);
    if missing.is_empty() {
        eprintln!("all schema versions are correctly synced");
        return Ok(Outcome::Synced);
    }

    eprintln!(
        "{} schema subject(s) missing from {}",
        missing.len(),
        config.gateway_repo
    );
    let body = reconcile::render_report(&missing, config);
    let event = event.ok_or(GithubError::MissingPullRequest)?;
    client.post_comment(&event.repo, event.pull_request, &body)?;
    eprintln!("posted mismatch report on pull request #{}", event.pull_request);
    Ok(Outcome::Mismatch { missing })
}
