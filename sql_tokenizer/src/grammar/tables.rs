//! Case-insensitive classification tables
use super::vocabulary::Vocabulary;
use crate::tokens::TokenCategory;
use std::collections::HashSet;

/// One of the five word tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Keywords,
    Operators,
    BuiltinVariables,
    BuiltinFunctions,
    PseudoColumns,
}

impl TableKind {
    /// Category assigned to a word found in this table
    pub fn category(&self) -> TokenCategory {
        match self {
            TableKind::Keywords => TokenCategory::Keyword,
            TableKind::Operators => TokenCategory::Operator,
            TableKind::BuiltinVariables
            | TableKind::BuiltinFunctions
            | TableKind::PseudoColumns => TokenCategory::Predefined,
        }
    }
}

/// Priority order for plain words; the first table that knows the word wins.
/// Pseudo-columns are only looked up for `$` words.
pub const WORD_CASCADE: &[TableKind] = &[
    TableKind::Keywords,
    TableKind::Operators,
    TableKind::BuiltinVariables,
    TableKind::BuiltinFunctions,
];

/// Cascade for `$name` words
pub const PSEUDO_COLUMN_CASCADE: &[TableKind] = &[TableKind::PseudoColumns];

/// Upper-cased word sets built once from a `Vocabulary`
#[derive(Debug, Clone, Default)]
pub struct ClassificationTables {
    keywords: HashSet<String>,
    operators: HashSet<String>,
    builtin_variables: HashSet<String>,
    builtin_functions: HashSet<String>,
    pseudo_columns: HashSet<String>,
}

impl ClassificationTables {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        fn fold(words: &[String]) -> HashSet<String> {
            words.iter().map(|word| word.to_ascii_uppercase()).collect()
        }

        Self {
            keywords: fold(&vocabulary.keywords),
            operators: fold(&vocabulary.operators),
            builtin_variables: fold(&vocabulary.builtin_variables),
            builtin_functions: fold(&vocabulary.builtin_functions),
            pseudo_columns: fold(&vocabulary.pseudo_columns),
        }
    }

    fn table(&self, kind: TableKind) -> &HashSet<String> {
        match kind {
            TableKind::Keywords => &self.keywords,
            TableKind::Operators => &self.operators,
            TableKind::BuiltinVariables => &self.builtin_variables,
            TableKind::BuiltinFunctions => &self.builtin_functions,
            TableKind::PseudoColumns => &self.pseudo_columns,
        }
    }

    /// Whether a word is in one table, ignoring case
    pub fn contains(&self, kind: TableKind, word: &str) -> bool {
        self.table(kind).contains(&word.to_ascii_uppercase())
    }

    /// Walk the cascade and return the category of the first table holding
    /// the word. `None` means the caller emits its default (identifier).
    pub fn classify(&self, word: &str, cascade: &[TableKind]) -> Option<TokenCategory> {
        let folded = word.to_ascii_uppercase();
        cascade
            .iter()
            .find(|kind| self.table(**kind).contains(&folded))
            .map(TableKind::category)
    }

    /// Full word cascade
    pub fn classify_word(&self, word: &str) -> Option<TokenCategory> {
        self.classify(word, WORD_CASCADE)
    }

    pub fn len(&self, kind: TableKind) -> usize {
        self.table(kind).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> ClassificationTables {
        ClassificationTables::new(&Vocabulary::standard())
    }

    #[test]
    fn test_lookup_ignores_case() {
        let tables = standard();
        for word in ["select", "SELECT", "Select"] {
            assert_eq!(tables.classify_word(word), Some(TokenCategory::Keyword));
        }
        assert_eq!(tables.classify_word("getdate"), Some(TokenCategory::Predefined));
        assert_eq!(tables.classify_word("@@rowcount"), Some(TokenCategory::Predefined));
    }

    #[test]
    fn test_cascade_priority() {
        let tables = standard();
        // Keyword table outranks operator and function tables
        assert_eq!(tables.classify_word("full"), Some(TokenCategory::Keyword));
        assert_eq!(tables.classify_word("update"), Some(TokenCategory::Keyword));
        assert_eq!(tables.classify_word("and"), Some(TokenCategory::Operator));
        assert_eq!(tables.classify_word("COUNT"), Some(TokenCategory::Predefined));
        assert_eq!(tables.classify_word("customer_id"), None);
        assert_eq!(tables.classify_word("@local"), None);
    }

    #[test]
    fn test_plain_words_skip_pseudo_columns() {
        let vocabulary = Vocabulary {
            keywords: vec!["select".to_string()],
            pseudo_columns: vec!["ROWID".to_string()],
            ..Default::default()
        };
        let tables = ClassificationTables::new(&vocabulary);

        assert_eq!(tables.classify_word("rowid"), None);
        assert_eq!(
            tables.classify("rowid", PSEUDO_COLUMN_CASCADE),
            Some(TokenCategory::Predefined)
        );
    }

    #[test]
    fn test_restricted_cascade() {
        let tables = standard();
        assert_eq!(
            tables.classify("$action", PSEUDO_COLUMN_CASCADE),
            Some(TokenCategory::Predefined)
        );
        assert_eq!(tables.classify("$other", PSEUDO_COLUMN_CASCADE), None);
        // Keywords are not consulted by the pseudo-column cascade
        assert_eq!(tables.classify("SELECT", PSEUDO_COLUMN_CASCADE), None);
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocabulary = Vocabulary {
            keywords: vec!["match".to_string()],
            operators: vec!["Match".to_string(), "xor".to_string()],
            ..Default::default()
        };
        let tables = ClassificationTables::new(&vocabulary);

        assert_eq!(tables.classify_word("MATCH"), Some(TokenCategory::Keyword));
        assert_eq!(tables.classify_word("XoR"), Some(TokenCategory::Operator));
        assert!(tables.contains(TableKind::Operators, "match"));
        assert_eq!(tables.len(TableKind::Operators), 2);
    }
}
