//! Lexer rule table
//!
//! Rules are declared as `(state, pattern, action)` rows and compiled once into
//! one ordered rule list per state. Within a state, row order is priority:
//! the first pattern matching a non-empty prefix of the remaining input wins.
use super::tables::{TableKind, PSEUDO_COLUMN_CASCADE, WORD_CASCADE};
use crate::lexical::state::StateName;
use crate::logging::codes;
use crate::tokens::TokenCategory;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;

/// What a matching rule does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Emit the match with a fixed category
    Emit(TokenCategory),
    /// Emit the match, then enter a state
    EmitAndPush(TokenCategory, StateName),
    /// Emit the match under the current state's body category, then leave it
    Pop,
    /// Emit the match with a fixed category, then leave the current state
    PopAndEmit(TokenCategory),
    /// Look the matched word up in the classification tables, in cascade
    /// order, falling back to `Identifier`
    Classify(&'static [TableKind]),
}

/// One row of the declarative rule table
#[derive(Debug, Clone, Copy)]
pub struct RuleRow {
    pub state: StateName,
    pub pattern: &'static str,
    pub action: Action,
}

const fn row(state: StateName, pattern: &'static str, action: Action) -> RuleRow {
    RuleRow {
        state,
        pattern,
        action,
    }
}

use Action::*;
use StateName as S;
use TokenCategory as C;

/// The T-SQL highlighting rules
///
/// Word characters are ASCII plus `@ # $`; `$name` words only consult the
/// pseudo-column table. Scope phrases must precede the plain word rule so
/// `BEGIN TRY` is one token rather than `BEGIN` followed by `TRY`.
pub static TSQL_RULES: &[RuleRow] = &[
    // comments
    row(S::Root, r"--+.*", Emit(C::Comment)),
    row(S::Root, r"/\*", EmitAndPush(C::CommentQuote, S::BlockComment)),
    // whitespace
    row(S::Root, r"\s+", Emit(C::Whitespace)),
    // pseudo-columns
    row(
        S::Root,
        r"\$[A-Za-z_][A-Za-z0-9_@#$]*",
        Classify(PSEUDO_COLUMN_CASCADE),
    ),
    // numbers
    row(S::Root, r"0x[0-9a-f]*", Emit(C::Number)),
    row(S::Root, r"\$[+-]*[0-9]*(\.[0-9]*)?", Emit(C::Number)),
    row(
        S::Root,
        r"(([0-9]+(\.[0-9]*)?)|(\.[0-9]+))(e[-+]?[0-9]+)?",
        Emit(C::Number),
    ),
    // strings
    row(S::Root, r"N'", EmitAndPush(C::String, S::String)),
    row(S::Root, r"'", EmitAndPush(C::String, S::String)),
    // complex identifiers
    row(S::Root, r"\[", EmitAndPush(C::IdentifierQuote, S::BracketedIdentifier)),
    row(S::Root, r#"""#, EmitAndPush(C::IdentifierQuote, S::QuotedIdentifier)),
    // scopes
    row(
        S::Root,
        r"BEGIN\s+(DISTRIBUTED\s+)?TRAN(SACTION)?\b",
        Emit(C::Keyword),
    ),
    row(S::Root, r"BEGIN\s+TRY\b", Emit(C::TryBlock)),
    row(S::Root, r"END\s+TRY\b", Emit(C::TryBlock)),
    row(S::Root, r"BEGIN\s+CATCH\b", Emit(C::CatchBlock)),
    row(S::Root, r"END\s+CATCH\b", Emit(C::CatchBlock)),
    row(S::Root, r"(BEGIN|CASE)\b", Emit(C::BlockOpen)),
    row(S::Root, r"END\b", Emit(C::BlockClose)),
    row(S::Root, r"WHEN\b", Emit(C::Choice)),
    row(S::Root, r"THEN\b", Emit(C::Choice)),
    // delimiters
    row(S::Root, r"[;,.]", Emit(C::Delimiter)),
    row(S::Root, r"[()]", Emit(C::DelimiterParenthesis)),
    // words
    row(S::Root, r"[A-Za-z0-9_@#$]+", Classify(WORD_CASCADE)),
    // symbol operators
    row(S::Root, r"[<>=!%&+\-*/|~^]", Emit(C::Operator)),
    // block comment body
    row(S::BlockComment, r"[^*/]+", Emit(C::Comment)),
    row(S::BlockComment, r"\*/", PopAndEmit(C::CommentQuote)),
    row(S::BlockComment, r"(?s).", Emit(C::Comment)),
    // string body
    row(S::String, r"[^']+", Emit(C::String)),
    row(S::String, r"''", Emit(C::String)),
    row(S::String, r"'", Pop),
    // [bracketed] identifier body
    row(S::BracketedIdentifier, r"[^\]]+", Emit(C::Identifier)),
    row(S::BracketedIdentifier, r"\]\]", Emit(C::Identifier)),
    row(S::BracketedIdentifier, r"\]", PopAndEmit(C::IdentifierQuote)),
    // "quoted" identifier body
    row(S::QuotedIdentifier, r#"[^"]+"#, Emit(C::Identifier)),
    row(S::QuotedIdentifier, r#""""#, Emit(C::Identifier)),
    row(S::QuotedIdentifier, r#"""#, PopAndEmit(C::IdentifierQuote)),
];

/// Body category of each state: what `Pop` emits and what a merged
/// construct is reported as
pub fn body_category(state: StateName) -> TokenCategory {
    match state {
        StateName::Root => TokenCategory::Identifier,
        StateName::BlockComment => TokenCategory::Comment,
        StateName::String => TokenCategory::String,
        StateName::BracketedIdentifier | StateName::QuotedIdentifier => TokenCategory::Identifier,
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid pattern '{pattern}' in state {state}: {message}")]
    InvalidPattern {
        state: StateName,
        pattern: String,
        message: String,
    },

    #[error("State {0} has no rules")]
    EmptyState(StateName),
}

impl RuleError {
    pub fn error_code(&self) -> codes::Code {
        codes::vocabulary::INVALID_RULE_PATTERN
    }
}

/// A compiled, anchored rule
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    pub action: Action,
}

impl Rule {
    /// Length in bytes of the match at the start of `input`, if non-empty
    pub fn match_len(&self, input: &str) -> Option<usize> {
        self.pattern
            .find(input)
            .map(|m| m.end())
            .filter(|len| *len > 0)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// A named state with its ordered rules
#[derive(Debug, Clone)]
pub struct LexerState {
    pub name: StateName,
    pub body: TokenCategory,
    pub rules: Vec<Rule>,
}

/// All states, compiled
#[derive(Debug, Clone)]
pub struct RuleSet {
    states: HashMap<StateName, LexerState>,
}

impl RuleSet {
    /// Compile a rule table. Every pattern is anchored at the current
    /// position and matched case-insensitively.
    pub fn compile(rows: &[RuleRow]) -> Result<Self, RuleError> {
        let mut states: HashMap<StateName, LexerState> = StateName::ALL
            .iter()
            .map(|name| {
                (
                    *name,
                    LexerState {
                        name: *name,
                        body: body_category(*name),
                        rules: Vec::new(),
                    },
                )
            })
            .collect();

        for row in rows {
            let pattern = RegexBuilder::new(&format!("^(?:{})", row.pattern))
                .case_insensitive(true)
                .build()
                .map_err(|e| RuleError::InvalidPattern {
                    state: row.state,
                    pattern: row.pattern.to_string(),
                    message: e.to_string(),
                })?;

            if let Some(state) = states.get_mut(&row.state) {
                state.rules.push(Rule {
                    pattern,
                    action: row.action,
                });
            }
        }

        for name in StateName::ALL {
            if states.get(&name).map_or(true, |s| s.rules.is_empty()) {
                return Err(RuleError::EmptyState(name));
            }
        }

        Ok(Self { states })
    }

    /// The standard T-SQL rule set
    pub fn tsql() -> Result<Self, RuleError> {
        Self::compile(TSQL_RULES)
    }

    pub fn state(&self, name: StateName) -> Option<&LexerState> {
        self.states.get(&name)
    }

    /// First rule of `state` matching the start of `input`
    pub fn first_match(&self, state: StateName, input: &str) -> Option<(&Rule, usize)> {
        self.states.get(&state).and_then(|lexer_state| {
            lexer_state
                .rules
                .iter()
                .find_map(|rule| rule.match_len(input).map(|len| (rule, len)))
        })
    }

    pub fn rule_count(&self) -> usize {
        self.states.values().map(|s| s.rules.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn rules() -> RuleSet {
        RuleSet::tsql().unwrap()
    }

    fn first(state: StateName, input: &str) -> (Action, usize) {
        let rules = rules();
        let (rule, len) = rules.first_match(state, input).unwrap();
        (rule.action, len)
    }

    #[test]
    fn test_table_compiles() {
        let rules = rules();
        assert_eq!(rules.rule_count(), TSQL_RULES.len());
        assert_eq!(
            rules.state(StateName::String).map(|s| s.body),
            Some(TokenCategory::String)
        );
    }

    #[test]
    fn test_line_comment_stops_at_newline() {
        assert_eq!(first(S::Root, "-- note\nSELECT"), (Emit(C::Comment), 7));
        assert_eq!(first(S::Root, "---x"), (Emit(C::Comment), 4));
    }

    #[test]
    fn test_scope_phrases_outrank_single_words() {
        assert_eq!(first(S::Root, "begin   try x"), (Emit(C::TryBlock), 11));
        assert_eq!(first(S::Root, "END CATCH;"), (Emit(C::CatchBlock), 9));
        assert_eq!(
            first(S::Root, "BEGIN DISTRIBUTED TRANSACTION"),
            (Emit(C::Keyword), 29)
        );
        assert_eq!(first(S::Root, "BEGIN TRAN;"), (Emit(C::Keyword), 10));
        assert_eq!(first(S::Root, "BEGIN;"), (Emit(C::BlockOpen), 5));
        assert_eq!(first(S::Root, "case when"), (Emit(C::BlockOpen), 4));
    }

    #[test]
    fn test_scope_words_need_boundary() {
        assert_eq!(first(S::Root, "BEGINNING"), (Classify(WORD_CASCADE), 9));
        assert_eq!(first(S::Root, "ENDPOINT"), (Classify(WORD_CASCADE), 8));
        assert_eq!(first(S::Root, "BEGIN TRYING"), (Emit(C::BlockOpen), 5));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(first(S::Root, "0x1F "), (Emit(C::Number), 4));
        assert_eq!(first(S::Root, "0X1f"), (Emit(C::Number), 4));
        assert_eq!(first(S::Root, "$12.50"), (Emit(C::Number), 6));
        assert_eq!(first(S::Root, "1.5e-3"), (Emit(C::Number), 6));
        assert_eq!(first(S::Root, ".5"), (Emit(C::Number), 2));
        assert_eq!(first(S::Root, ".x"), (Emit(C::Delimiter), 1));
    }

    #[test]
    fn test_pseudo_column_rule_precedes_money() {
        assert_eq!(first(S::Root, "$action"), (Classify(PSEUDO_COLUMN_CASCADE), 7));
        assert_eq!(first(S::Root, "$5"), (Emit(C::Number), 2));
    }

    #[test]
    fn test_string_openers_ignore_case() {
        assert_eq!(first(S::Root, "N'x'"), (EmitAndPush(C::String, S::String), 2));
        assert_eq!(first(S::Root, "n'x'"), (EmitAndPush(C::String, S::String), 2));
        assert_eq!(first(S::Root, "Nx"), (Classify(WORD_CASCADE), 2));
    }

    #[test]
    fn test_state_bodies() {
        assert_eq!(first(S::String, "it''s'"), (Emit(C::String), 2));
        assert_eq!(first(S::String, "''s'"), (Emit(C::String), 2));
        assert_eq!(first(S::String, "'"), (Pop, 1));
        assert_eq!(first(S::BracketedIdentifier, "]]b]"), (Emit(C::Identifier), 2));
        assert_eq!(
            first(S::BracketedIdentifier, "]"),
            (PopAndEmit(C::IdentifierQuote), 1)
        );
        assert_eq!(first(S::QuotedIdentifier, "\"\"x\""), (Emit(C::Identifier), 2));
        assert_eq!(first(S::BlockComment, " a -- b */"), (Emit(C::Comment), 8));
        assert_eq!(first(S::BlockComment, "*/"), (PopAndEmit(C::CommentQuote), 2));
        assert_eq!(first(S::BlockComment, "*x"), (Emit(C::Comment), 1));
    }

    #[test]
    fn test_no_rule_matches_unknown_character() {
        let rules = rules();
        assert!(rules.first_match(S::Root, "`x").is_none());
        assert!(rules.first_match(S::Root, "é").is_none());
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let rows = [row(S::Root, r"(", Emit(C::Operator))];
        assert_matches!(
            RuleSet::compile(&rows),
            Err(RuleError::InvalidPattern { state: StateName::Root, .. })
        );
    }

    #[test]
    fn test_state_without_rules_is_rejected() {
        let rows = [row(S::Root, r"\s+", Emit(C::Whitespace))];
        assert_matches!(RuleSet::compile(&rows), Err(RuleError::EmptyState(_)));
    }
}
