//! Labeled dataset types and loading.
//!
//! A dataset is a sequence of [`Example`] values: a phrase plus the class it
//! belongs to. Dataset files are JSON arrays whose entries are either objects
//! (`{"text": "...", "label": true}`) or the two-element `["...", true]` pair
//! form; both shapes deserialize to the same type, and a malformed entry
//! fails the whole load.

use serde::{Deserialize, Serialize};

/// A labeled example: a phrase and its expected class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ExampleRepr")]
pub struct Example {
    /// Raw phrase text.
    pub text: String,
    /// Expected class: `true` for positive, `false` for negative.
    pub label: bool,
}

impl Example {
    /// Create a new labeled example.
    pub fn new<S: Into<String>>(text: S, label: bool) -> Self {
        Example {
            text: text.into(),
            label,
        }
    }
}

impl From<(String, bool)> for Example {
    fn from((text, label): (String, bool)) -> Self {
        Example { text, label }
    }
}

impl From<(&str, bool)> for Example {
    fn from((text, label): (&str, bool)) -> Self {
        Example::new(text, label)
    }
}

/// Accepted wire shapes for a dataset entry.
#[derive(Deserialize)]
#[serde(untagged)]
enum ExampleRepr {
    Object { text: String, label: bool },
    Pair(String, bool),
}

impl From<ExampleRepr> for Example {
    fn from(repr: ExampleRepr) -> Self {
        match repr {
            ExampleRepr::Object { text, label } => Example { text, label },
            ExampleRepr::Pair(text, label) => Example { text, label },
        }
    }
}

/// Load a labeled dataset from a JSON file.
pub fn load_dataset(path: &str) -> anyhow::Result<Vec<Example>> {
    let content = std::fs::read_to_string(path)?;
    let examples: Vec<Example> = serde_json::from_str(&content)?;
    Ok(examples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_form() {
        let examples: Vec<Example> =
            serde_json::from_str(r#"[{"text": "good great", "label": true}]"#).unwrap();
        assert_eq!(examples, vec![Example::new("good great", true)]);
    }

    #[test]
    fn test_pair_form() {
        let examples: Vec<Example> =
            serde_json::from_str(r#"[["bad terrible", false], ["good", true]]"#).unwrap();
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0], Example::new("bad terrible", false));
        assert_eq!(examples[1], Example::new("good", true));
    }

    #[test]
    fn test_malformed_entry_rejected() {
        // Three-element pair
        assert!(serde_json::from_str::<Vec<Example>>(r#"[["text", true, 1]]"#).is_err());
        // Non-boolean label
        assert!(serde_json::from_str::<Vec<Example>>(r#"[["text", "yes"]]"#).is_err());
        // Missing label field
        assert!(serde_json::from_str::<Vec<Example>>(r#"[{"text": "abc"}]"#).is_err());
    }

    #[test]
    fn test_load_dataset_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        std::fs::write(
            &path,
            r#"[{"text": "good great", "label": true}, ["bad terrible", false]]"#,
        )
        .unwrap();

        let examples = load_dataset(path.to_str().unwrap()).unwrap();
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0], Example::new("good great", true));
        assert_eq!(examples[1], Example::new("bad terrible", false));
    }

    #[test]
    fn test_load_dataset_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.json");
        assert!(load_dataset(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_load_dataset_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not a dataset").unwrap();
        assert!(load_dataset(path.to_str().unwrap()).is_err());
    }
}
