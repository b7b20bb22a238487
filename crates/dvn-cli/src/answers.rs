//! # Answers File
//!
//! YAML document holding questionnaire answers and ticked checklist items,
//! shared by `dvn assess` and `dvn checklist`:
//!
//! ```yaml
//! has_children: true
//! agree_on_terms: null      # unanswered
//! factors: [real-estate, retirement-accounts]
//! completed: [tax-returns, pay-stubs]
//! ```
//!
//! Every key is optional. Unknown keys are rejected so a misspelt question
//! does not silently read as unanswered.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use dvn_advisor::Questionnaire;
use dvn_core::Answer;

/// Parsed answers file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswersFile {
    #[serde(default)]
    pub has_children: Answer,
    #[serde(default)]
    pub agree_on_terms: Answer,
    #[serde(default)]
    pub factors: Vec<String>,
    #[serde(default)]
    pub completed: Vec<String>,
}

impl AnswersFile {
    /// Read and parse a YAML answers file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read answers file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("failed to parse answers file: {}", path.display()))
    }

    /// Parse YAML text. An empty document yields all defaults.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load `path` when given, otherwise start from defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                tracing::debug!(path = %p.display(), "loading answers file");
                Self::load(p)
            }
            None => Ok(Self::default()),
        }
    }

    /// The questionnaire portion of the file.
    pub fn questionnaire(&self) -> Questionnaire {
        Questionnaire {
            has_children: self.has_children,
            agree_on_terms: self.agree_on_terms,
            factors: self.factors.iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_full_document() {
        let file = AnswersFile::parse(
            "has_children: true\nagree_on_terms: null\nfactors: [real-estate]\ncompleted: [tax-returns]\n",
        )
        .unwrap();
        assert_eq!(file.has_children, Answer::Yes);
        assert_eq!(file.agree_on_terms, Answer::Unanswered);
        assert_eq!(file.factors, vec!["real-estate"]);
        assert_eq!(file.completed, vec!["tax-returns"]);
    }

    #[test]
    fn missing_keys_default_to_unanswered() {
        let file = AnswersFile::parse("factors: []\n").unwrap();
        assert_eq!(file.has_children, Answer::Unanswered);
        assert!(file.completed.is_empty());
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(AnswersFile::parse("  \n").unwrap(), AnswersFile::default());
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(AnswersFile::parse("has_kids: true\n").is_err());
    }

    #[test]
    fn load_reports_path_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let err = AnswersFile::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("absent.yaml"));
    }

    #[test]
    fn load_from_disk() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "agree_on_terms: false").unwrap();
        let file = AnswersFile::load(tmp.path()).unwrap();
        assert_eq!(file.agree_on_terms, Answer::No);
        assert_eq!(file.questionnaire().agree_on_terms, Answer::No);
    }
}
