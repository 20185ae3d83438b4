use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(thiserror::Error, Debug)]
pub enum SlugError {
    #[error("invalid repository slug: {0} (expected owner/name)")]
    Malformed(String),
}

/// An `owner/name` repository identifier, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoSlug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                Ok(RepoSlug {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(SlugError::Malformed(s.to_string())),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Pull request coordinates of the run that triggered the check, read from
/// the CI event payload at entry.
#[derive(Debug, Clone)]
pub struct EventContext {
    pub repo: RepoSlug,
    pub pull_request: u64,
}

/// A newly added declaration line from the local env file, split on its
/// first `=`. A line without `=` keeps an empty value; it can never match a
/// referenced subject and will surface as missing downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredChange {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingEntry {
    pub key: String,
    pub value: String,
}

#[derive(Debug)]
pub enum Outcome {
    NoChanges,
    Synced,
    Mismatch { missing: Vec<MissingEntry> },
}

#[derive(Serialize)]
pub struct CheckSummary {
    pub status: &'static str,
    pub missing: Vec<MissingEntry>,
}

impl Outcome {
    pub fn summary(&self) -> CheckSummary {
        match self {
            Outcome::NoChanges => CheckSummary {
                status: "no_changes",
                missing: vec![],
            },
            Outcome::Synced => CheckSummary {
                status: "synced",
                missing: vec![],
            },
            Outcome::Mismatch { missing } => CheckSummary {
                status: "mismatch",
                missing: missing.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RepoSlug;

    #[test]
    fn slug_parses_owner_and_name() {
        let slug: RepoSlug = "acme/gateway".parse().expect("valid slug");
        assert_eq!(slug.owner, "acme");
        assert_eq!(slug.name, "gateway");
        assert_eq!(slug.to_string(), "acme/gateway");
    }

    #[test]
    fn slug_rejects_missing_separator() {
        assert!("invalidformat".parse::<RepoSlug>().is_err());
    }

    #[test]
    fn slug_rejects_extra_segments_and_empty_parts() {
        assert!("a/b/c".parse::<RepoSlug>().is_err());
        assert!("/gateway".parse::<RepoSlug>().is_err());
        assert!("acme/".parse::<RepoSlug>().is_err());
    }
}
