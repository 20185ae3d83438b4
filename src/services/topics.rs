use serde_yaml::Value;
use std::collections::HashSet;

/// Flattens `app.consumers.*.pipelines-config.schema-subject` into the set
/// of referenced subject identifiers. The scalar is a comma-separated list;
/// pieces are trimmed and empty pieces dropped. A missing key anywhere along
/// the path contributes nothing.
pub fn referenced_subjects(document: &str) -> anyhow::Result<HashSet<String>> {
    let root: Value = serde_yaml::from_str(document)?;
    Ok(flatten(&root))
}

fn flatten(root: &Value) -> HashSet<String> {
    let mut subjects = HashSet::new();
    let Some(consumers) = root
        .get("app")
        .and_then(|app| app.get("consumers"))
        .and_then(Value::as_mapping)
    else {
        return subjects;
    };
    for consumer in consumers.values() {
        let Some(subject) = consumer
            .get("pipelines-config")
            .and_then(|pc| pc.get("schema-subject"))
            .and_then(Value::as_str)
        else {
            continue;
        };
        for piece in subject.split(',') {
            let piece = piece.trim();
            if !piece.is_empty() {
                subjects.insert(piece.to_string());
            }
        }
    }
    subjects
}

#[cfg(test)]
mod tests {
    use super::referenced_subjects;

    #[test]
    fn flattens_comma_separated_subjects() {
        let doc = "\
app:
  consumers:
    orders:
      pipelines-config:
        schema-subject: \"a, b ,c\"
";
        let subjects = referenced_subjects(doc).expect("valid yaml");
        let expected: Vec<&str> = vec!["a", "b", "c"];
        assert_eq!(subjects.len(), 3);
        assert!(expected.iter().all(|s| subjects.contains(*s)));
    }

    #[test]
    fn collects_across_consumers_and_collapses_duplicates() {
        let doc = "\
app:
  consumers:
    orders:
      pipelines-config:
        schema-subject: orders-v1, shared-v1
    payments:
      pipelines-config:
        schema-subject: payments-v3, shared-v1
";
        let subjects = referenced_subjects(doc).expect("valid yaml");
        assert_eq!(subjects.len(), 3);
        assert!(subjects.contains("shared-v1"));
    }

    #[test]
    fn consumer_without_subject_contributes_nothing() {
        let doc = "\
app:
  consumers:
    orders:
      pipelines-config:
        other-field: x
    bare: {}
";
        let subjects = referenced_subjects(doc).expect("valid yaml");
        assert!(subjects.is_empty());
    }

    #[test]
    fn missing_app_key_yields_empty_set() {
        let subjects = referenced_subjects("server:\n  port: 8080\n").expect("valid yaml");
        assert!(subjects.is_empty());
    }

    #[test]
    fn trailing_commas_do_not_produce_empty_subjects() {
        let doc = "\
app:
  consumers:
    orders:
      pipelines-config:
        schema-subject: \"orders-v1,,\"
";
        let subjects = referenced_subjects(doc).expect("valid yaml");
        assert_eq!(subjects.len(), 1);
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(referenced_subjects("app: [unclosed").is_err());
    }
}
