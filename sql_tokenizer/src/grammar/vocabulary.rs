//! Vocabulary feed for the classification tables
//!
//! The standard T-SQL word lists ship with the crate; another dialect can be
//! supplied as a TOML document with the same five keys:
//!
//! ```toml
//! keywords = ["SELECT", "FROM"]
//! operators = ["AND", "OR"]
//! builtin_functions = ["COUNT"]
//! builtin_variables = ["@@ROWCOUNT"]
//! pseudo_columns = ["$ACTION"]
//! ```
use super::tsql;
use crate::logging::codes;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, thiserror::Error)]
pub enum VocabularyError {
    #[error("Failed to read vocabulary '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Invalid vocabulary TOML: {0}")]
    Parse(String),

    #[error("Vocabulary defines no keywords")]
    Empty,
}

impl VocabularyError {
    pub fn error_code(&self) -> codes::Code {
        match self {
            VocabularyError::Io { .. } => codes::vocabulary::VOCABULARY_IO_ERROR,
            VocabularyError::Parse(_) => codes::vocabulary::VOCABULARY_PARSE_ERROR,
            VocabularyError::Empty => codes::vocabulary::EMPTY_VOCABULARY,
        }
    }
}

/// Five flat word lists consumed by `ClassificationTables`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub keywords: Vec<String>,
    #[serde(default)]
    pub operators: Vec<String>,
    #[serde(default)]
    pub builtin_functions: Vec<String>,
    #[serde(default)]
    pub builtin_variables: Vec<String>,
    #[serde(default)]
    pub pseudo_columns: Vec<String>,
}

impl Vocabulary {
    /// The standard T-SQL vocabulary
    pub fn standard() -> Self {
        fn owned(list: &[&str]) -> Vec<String> {
            list.iter().map(|word| word.to_string()).collect()
        }

        Self {
            keywords: owned(tsql::keywords()),
            operators: owned(tsql::operators()),
            builtin_functions: owned(tsql::builtin_functions()),
            builtin_variables: owned(tsql::builtin_variables()),
            pseudo_columns: owned(tsql::pseudo_columns()),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, VocabularyError> {
        let vocabulary: Vocabulary =
            toml::from_str(content).map_err(|e| VocabularyError::Parse(e.to_string()))?;

        if vocabulary.keywords.is_empty() {
            return Err(VocabularyError::Empty);
        }

        Ok(vocabulary)
    }

    pub fn from_file(path: &Path) -> Result<Self, VocabularyError> {
        let content = fs::read_to_string(path).map_err(|e| VocabularyError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let vocabulary = Self::from_toml_str(&content)?;

        crate::log_success!(
            codes::success::VOCABULARY_LOADED,
            "Vocabulary loaded",
            "path" => path.display(),
            "keywords" => vocabulary.keywords.len()
        );

        Ok(vocabulary)
    }

    pub fn word_count(&self) -> usize {
        self.keywords.len()
            + self.operators.len()
            + self.builtin_functions.len()
            + self.builtin_variables.len()
            + self.pseudo_columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_standard_vocabulary_is_populated() {
        let vocabulary = Vocabulary::standard();
        assert!(vocabulary.keywords.iter().any(|k| k == "SELECT"));
        assert!(vocabulary.operators.iter().any(|o| o == "AND"));
        assert!(vocabulary.builtin_functions.iter().any(|f| f == "GETDATE"));
        assert!(vocabulary.builtin_variables.iter().any(|v| v == "@@ROWCOUNT"));
        assert_eq!(vocabulary.pseudo_columns.len(), 4);
    }

    #[test]
    fn test_from_toml_str_defaults_missing_lists() {
        let vocabulary = Vocabulary::from_toml_str("keywords = [\"MATCH\", \"RETURN\"]").unwrap();
        assert_eq!(vocabulary.keywords.len(), 2);
        assert!(vocabulary.operators.is_empty());
        assert_eq!(vocabulary.word_count(), 2);
    }

    #[test]
    fn test_from_toml_str_errors() {
        assert_matches!(
            Vocabulary::from_toml_str("keywords = []"),
            Err(VocabularyError::Empty)
        );
        assert_matches!(
            Vocabulary::from_toml_str("keywords = [1, 2"),
            Err(VocabularyError::Parse(_))
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "keywords = [\"SELECT\"]").unwrap();
        writeln!(file, "builtin_functions = [\"NOW\"]").unwrap();

        let vocabulary = Vocabulary::from_file(file.path()).unwrap();
        assert_eq!(vocabulary.builtin_functions, vec!["NOW".to_string()]);
    }

    #[test]
    fn test_missing_file_maps_to_io_code() {
        let err = Vocabulary::from_file(Path::new("/nonexistent/vocab.toml")).unwrap_err();
        assert_matches!(err, VocabularyError::Io { .. });
        assert_eq!(err.error_code(), codes::vocabulary::VOCABULARY_IO_ERROR);
    }
}
