//! Grammar data for the SQL highlighter
//!
//! Holds everything the state machine consults but never changes: the
//! vocabulary lists, the case-insensitive classification tables built from
//! them, and the compiled per-state rule lists.

pub mod rules;
pub mod tables;
pub mod tsql;
pub mod vocabulary;

pub use rules::{Action, LexerState, Rule, RuleError, RuleRow, RuleSet, TSQL_RULES};
pub use tables::{ClassificationTables, TableKind, PSEUDO_COLUMN_CASCADE, WORD_CASCADE};
pub use vocabulary::{Vocabulary, VocabularyError};
