use crate::cli::CheckConfig;
use crate::domain::models::{DeclaredChange, MissingEntry};
use std::collections::HashSet;
use std::fmt::Write;

/// Declared values absent from the referenced subject set, in declaration
/// order. Membership is exact string equality; no further normalization.
pub fn missing_entries(
    changes: &[DeclaredChange],
    subjects: &HashSet<String>,
) -> Vec<MissingEntry> {
    changes
        .iter()
        .filter(|c| !subjects.contains(&c.value))
        .map(|c| MissingEntry {
            key: c.key.clone(),
            value: c.value.clone(),
        })
        .collect()
}

/// The PR comment body: fixed header and framing sentences around one bullet
/// per missing entry.
pub fn render_report(missing: &[MissingEntry], config: &CheckConfig) -> String {
    let mut report = String::new();
    report.push_str("**Schema versions mismatch detected!**\n");
    let _ = writeln!(
        report,
        "The following schema versions were updated in `{}`, but were not found in `{}` of **{}**",
        config.env_file.display(),
        config.topics_path,
        config.gateway_repo.name,
    );
    for entry in missing {
        let _ = writeln!(report, "- **{}** should contain: `{}`", entry.key, entry.value);
    }
    let _ = write!(
        report,
        "\n**Please update the corresponding values in {}.**",
        config.gateway_repo.name,
    );
    report
}
