use crate::domain::models::DeclaredChange;
use std::path::Path;
use std::process::Command;

/// Added declaration lines for `env_file` between the previous and current
/// commit. When the two-sided diff fails (e.g. the repository has a single
/// commit and `HEAD^` does not exist), falls back once to the initial-commit
/// view; no further retries.
pub fn collect_declared_changes(
    env_file: &Path,
    marker: &str,
) -> anyhow::Result<Vec<DeclaredChange>> {
    let diff = match run_git(&["diff", "HEAD^", "HEAD", "--"], env_file) {
        Ok(out) => out,
        Err(_) => run_git(&["show", "--format=", "HEAD", "--"], env_file)?,
    };
    Ok(parse_added_declarations(&diff, marker))
}

fn run_git(args: &[&str], env_file: &Path) -> anyhow::Result<String> {
    let output = Command::new("git").args(args).arg(env_file).output()?;
    if !output.status.success() {
        anyhow::bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(String::from_utf8(output.stdout)?)
}

/// Classifies diff lines: keeps added lines carrying the marker substring
/// and splits each on its first `=`. Lines without `=` keep an empty value.
pub fn parse_added_declarations(diff: &str, marker: &str) -> Vec<DeclaredChange> {
    diff.lines()
        .filter(|line| line.starts_with('+') && line.contains(marker))
        .map(|line| {
            let line = line.trim_start_matches('+').trim();
            match line.split_once('=') {
                Some((key, value)) => DeclaredChange {
                    key: key.trim().to_string(),
                    value: value.trim().to_string(),
                },
                None => DeclaredChange {
                    key: line.to_string(),
                    value: String::new(),
                },
            }
        })
        .collect()
}
