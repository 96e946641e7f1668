//! Token stream producer
//!
//! Runs the state machine, merges the fragments of each quoted construct into
//! one token, computes line/column spans and collects metrics.
use super::machine::{MachineRun, RawToken, StateMachine};
use super::state::StateStack;
use crate::config::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::grammar::{RuleError, Vocabulary, VocabularyError};
use crate::logging::codes;
use crate::tokens::{Token, TokenCategory, TokenStream, TokenStreamBuilder};
use crate::{log_debug, log_success, log_warning};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Failures building a tokenizer; tokenizing itself never fails
#[derive(Debug, Clone, thiserror::Error)]
pub enum LexerError {
    #[error(transparent)]
    Rules(#[from] RuleError),

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::Rules(e) => e.error_code(),
            LexerError::Vocabulary(e) => e.error_code(),
        }
    }
}

/// Per-pass lexical metrics
#[derive(Debug, Default, Clone, Serialize)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    /// Rule-level tokens before merging
    pub raw_fragments: usize,
    pub by_category: BTreeMap<TokenCategory, usize>,
    pub unrecognized: usize,
    pub refused_pushes: usize,
    pub max_stack_depth: usize,
    pub bytes: usize,
    pub lines: u32,
    pub unterminated: bool,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;

        if token.category == TokenCategory::Unrecognized {
            self.unrecognized += 1;
        }

        if preferences.collect_detailed_metrics
            && (preferences.include_trivia_in_counts || token.is_significant())
        {
            *self.by_category.entry(token.category).or_insert(0) += 1;
        }
    }

    pub(crate) fn record_run(&mut self, run: &MachineRun, input: &str) {
        self.raw_fragments = run.tokens.len();
        self.refused_pushes = run.tokens.iter().filter(|t| t.push_refused).count();
        self.max_stack_depth = run.max_depth;
        self.unterminated = run.end_state.is_unterminated();
        self.bytes = input.len();
        self.lines = input.matches('\n').count() as u32 + 1;
    }

    pub fn count(&self, category: TokenCategory) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }
}

/// Tokens plus the state the next input should start in
#[derive(Debug, Clone, Serialize)]
pub struct TokenizeOutput {
    pub tokens: Vec<Token>,
    pub end_state: StateStack,
    #[serde(skip)]
    pub metrics: LexicalMetrics,
}

impl TokenizeOutput {
    pub fn into_stream(self) -> TokenStream {
        TokenStream::new(self.tokens)
    }
}

/// Tokenizer bound to one vocabulary; cheap to clone and safe to share
#[derive(Debug, Clone)]
pub struct Tokenizer {
    machine: Arc<StateMachine>,
    preferences: LexicalPreferences,
}

impl Tokenizer {
    /// Standard T-SQL tokenizer with preferences from the environment
    pub fn new() -> Result<Self, LexerError> {
        Self::with_preferences(LexicalPreferences::default())
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Result<Self, LexerError> {
        Ok(Self {
            machine: StateMachine::standard()?,
            preferences,
        })
    }

    /// Tokenizer for another dialect's word lists, same rules
    pub fn with_vocabulary(
        vocabulary: &Vocabulary,
        preferences: LexicalPreferences,
    ) -> Result<Self, LexerError> {
        Ok(Self {
            machine: Arc::new(StateMachine::new(vocabulary)?),
            preferences,
        })
    }

    pub fn from_vocabulary_file(
        path: &Path,
        preferences: LexicalPreferences,
    ) -> Result<Self, LexerError> {
        let vocabulary = Vocabulary::from_file(path)?;
        Self::with_vocabulary(&vocabulary, preferences)
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    pub fn set_preferences(&mut self, preferences: LexicalPreferences) {
        self.preferences = preferences;
    }

    pub fn machine(&self) -> &StateMachine {
        &self.machine
    }

    /// Tokenize `input` starting in `start_state`
    ///
    /// Never fails: unknown characters become `Unrecognized` tokens and an
    /// open construct at the end shows up in `end_state`.
    pub fn tokenize(&self, input: &str, start_state: &StateStack) -> TokenizeOutput {
        let run = self.machine.run(input, start_state);

        let mut metrics = LexicalMetrics::default();
        metrics.record_run(&run, input);

        let tokens = if self.preferences.merge_fragments {
            merge_constructs(input, &run.tokens)
        } else {
            raw_tokens(input, &run.tokens)
        };

        let mut unrecognized_reports = 0;
        for token in &tokens {
            metrics.record_token(token, &self.preferences);

            if token.category == TokenCategory::Unrecognized
                && self.preferences.log_unrecognized
                && unrecognized_reports < MAX_UNRECOGNIZED_REPORTS
            {
                unrecognized_reports += 1;
                log_warning!(code = codes::lexical::UNRECOGNIZED_CHARACTER,
                    "Unrecognized character",
                    span = token.span,
                    "text" => format!("{:?}", token.text)
                );
            }
        }

        if metrics.refused_pushes > 0 {
            log_warning!(code = codes::lexical::STATE_STACK_OVERFLOW,
                "State stack depth limit reached; constructs left unnested",
                "refused" => metrics.refused_pushes,
                "max_depth" => MAX_STATE_STACK_DEPTH
            );
        }

        if tokens.len() > MAX_TOKEN_COUNT {
            log_warning!(code = codes::lexical::TOKEN_LIMIT_EXCEEDED,
                "Token count exceeds configured limit",
                "count" => tokens.len(),
                "max_tokens" => MAX_TOKEN_COUNT
            );
        }

        log_debug!("Tokenization pass finished",
            "tokens" => tokens.len(),
            "fragments" => metrics.raw_fragments,
            "start_state" => start_state,
            "end_state" => &run.end_state
        );

        TokenizeOutput {
            tokens,
            end_state: run.end_state,
            metrics,
        }
    }

    /// Tokenize a whole document from the root state
    pub fn tokenize_document(&self, input: &str) -> TokenizeOutput {
        let output = self.tokenize(input, &StateStack::root());

        if let Some(state) = output.end_state.outermost_construct() {
            log_warning!(code = codes::lexical::UNTERMINATED_CONSTRUCT,
                "Document ends inside an unterminated construct",
                "state" => state,
                "end_state" => &output.end_state
            );
        }

        log_success!(codes::success::TOKENIZATION_COMPLETE,
            "Tokenization completed",
            "tokens" => output.metrics.total_tokens,
            "lines" => output.metrics.lines,
            "unrecognized" => output.metrics.unrecognized
        );

        output
    }
}

/// One token per construct; tokens outside constructs pass through
fn merge_constructs(input: &str, raw: &[RawToken]) -> Vec<Token> {
    let mut builder = TokenStreamBuilder::new();
    let mut index = 0;

    while index < raw.len() {
        let first = &raw[index];
        let mut end = first.end;
        let mut category = first.category;

        if let Some(construct) = first.construct {
            category = construct.category;
            while index + 1 < raw.len()
                && raw[index + 1].construct.map(|c| c.id) == Some(construct.id)
            {
                index += 1;
                end = raw[index].end;
            }
        }

        builder.push(category, &input[first.start..end]);
        index += 1;
    }

    builder.into_tokens()
}

fn raw_tokens(input: &str, raw: &[RawToken]) -> Vec<Token> {
    let mut builder = TokenStreamBuilder::new();
    for token in raw {
        builder.push(token.category, &input[token.start..token.end]);
    }
    builder.into_tokens()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::state::StateName;
    use crate::tokens::validation;
    use crate::tokens::TokenCategory as C;

    fn tokenizer() -> Tokenizer {
        Tokenizer::with_preferences(LexicalPreferences {
            merge_fragments: true,
            collect_detailed_metrics: true,
            log_unrecognized: false,
            include_trivia_in_counts: false,
        })
        .unwrap()
    }

    fn pairs(output: &TokenizeOutput) -> Vec<(C, &str)> {
        output
            .tokens
            .iter()
            .map(|t| (t.category, t.text.as_str()))
            .collect()
    }

    #[test]
    fn test_keywords_ignore_case_and_keep_text() {
        for word in ["select", "SELECT", "Select"] {
            let output = tokenizer().tokenize(word, &StateStack::root());
            assert_eq!(pairs(&output), vec![(C::Keyword, word)]);
        }
    }

    #[test]
    fn test_block_comment_hides_line_comment() {
        let output = tokenizer().tokenize("/* a -- b */ SELECT", &StateStack::root());
        assert_eq!(
            pairs(&output),
            vec![
                (C::Comment, "/* a -- b */"),
                (C::Whitespace, " "),
                (C::Keyword, "SELECT"),
            ]
        );
    }

    #[test]
    fn test_doubled_quote_stays_in_one_string() {
        let output = tokenizer().tokenize("'it''s'", &StateStack::root());
        assert_eq!(pairs(&output), vec![(C::String, "'it''s'")]);
        assert!(output.end_state.is_root());
    }

    #[test]
    fn test_doubled_bracket_stays_in_one_identifier() {
        let output = tokenizer().tokenize("[a]]b]", &StateStack::root());
        assert_eq!(pairs(&output), vec![(C::Identifier, "[a]]b]")]);
    }

    #[test]
    fn test_adjacent_constructs_are_not_merged() {
        let output = tokenizer().tokenize("[a].[b]''", &StateStack::root());
        assert_eq!(
            pairs(&output),
            vec![
                (C::Identifier, "[a]"),
                (C::Delimiter, "."),
                (C::Identifier, "[b]"),
                (C::String, "''"),
            ]
        );
    }

    #[test]
    fn test_scope_phrase_vs_bare_begin() {
        let output = tokenizer().tokenize("BEGIN TRY\nBEGIN\nEND\nEND TRY", &StateStack::root());
        let significant: Vec<(C, &str)> = pairs(&output)
            .into_iter()
            .filter(|(c, _)| *c != C::Whitespace)
            .collect();
        assert_eq!(
            significant,
            vec![
                (C::TryBlock, "BEGIN TRY"),
                (C::BlockOpen, "BEGIN"),
                (C::BlockClose, "END"),
                (C::TryBlock, "END TRY"),
            ]
        );
    }

    #[test]
    fn test_phrase_does_not_span_other_tokens() {
        let output = tokenizer().tokenize("BEGIN /* x */ TRY", &StateStack::root());
        assert_eq!(output.tokens[0].category, C::BlockOpen);
        assert_eq!(output.tokens[0].text, "BEGIN");
        assert_eq!(output.tokens[2].category, C::Comment);
        assert_eq!(output.tokens[4].text, "TRY");
        assert_ne!(output.tokens[4].category, C::TryBlock);
    }

    #[test]
    fn test_unterminated_string_resumes_on_next_line() {
        let tokenizer = tokenizer();
        let first = tokenizer.tokenize("'abc", &StateStack::root());
        assert_eq!(pairs(&first), vec![(C::String, "'abc")]);
        assert_eq!(first.end_state.top(), StateName::String);
        assert!(first.metrics.unterminated);

        let second = tokenizer.tokenize("def' SELECT", &first.end_state);
        assert_eq!(
            pairs(&second),
            vec![
                (C::String, "def'"),
                (C::Whitespace, " "),
                (C::Keyword, "SELECT"),
            ]
        );
        assert!(second.end_state.is_root());
    }

    #[test]
    fn test_unterminated_comment_resumes() {
        let tokenizer = tokenizer();
        let first = tokenizer.tokenize("x /* open", &StateStack::root());
        assert_eq!(first.end_state.to_string(), "root/blockComment");

        let second = tokenizer.tokenize("still */ x", &first.end_state);
        assert_eq!(second.tokens[0].category, C::Comment);
        assert_eq!(second.tokens[0].text, "still */");
    }

    #[test]
    fn test_unterminated_bracketed_identifier_resumes() {
        let tokenizer = tokenizer();
        let first = tokenizer.tokenize("[abc", &StateStack::root());
        assert_eq!(pairs(&first), vec![(C::Identifier, "[abc")]);
        assert_eq!(first.end_state.top(), StateName::BracketedIdentifier);
        assert!(first.metrics.unterminated);

        let second = tokenizer.tokenize("def]] x] y", &first.end_state);
        assert_eq!(
            pairs(&second),
            vec![
                (C::Identifier, "def]] x]"),
                (C::Whitespace, " "),
                (C::Identifier, "y"),
            ]
        );
        assert!(second.end_state.is_root());
    }

    #[test]
    fn test_unterminated_quoted_identifier_resumes() {
        let tokenizer = tokenizer();
        let first = tokenizer.tokenize("\"abc", &StateStack::root());
        assert_eq!(pairs(&first), vec![(C::Identifier, "\"abc")]);
        assert_eq!(first.end_state.top(), StateName::QuotedIdentifier);
        assert!(first.metrics.unterminated);

        let second = tokenizer.tokenize("def\"\" x\" y", &first.end_state);
        assert_eq!(
            pairs(&second),
            vec![
                (C::Identifier, "def\"\" x\""),
                (C::Whitespace, " "),
                (C::Identifier, "y"),
            ]
        );
        assert!(second.end_state.is_root());
    }

    #[test]
    fn test_coverage_on_mixed_input() {
        let input = "SELECT N'x', [a b], \"q\"\"q\", 0x1F, $1.5, @@ROWCOUNT\n\
                     FROM t -- trailing\n/* multi\nline */ WHERE a <> 1 ` é;";
        let output = tokenizer().tokenize(input, &StateStack::root());

        assert!(validation::validate_coverage(&output.tokens, input).is_ok());
        assert!(validation::validate_span_order(&output.tokens).is_ok());
        assert_eq!(output.metrics.unrecognized, 2);

        let last = output.tokens.last().unwrap();
        assert_eq!(last.end_position(), crate::format::full_range(input).end);
    }

    #[test]
    fn test_raw_mode_keeps_quote_glyphs() {
        let raw = Tokenizer::with_preferences(LexicalPreferences {
            merge_fragments: false,
            collect_detailed_metrics: false,
            log_unrecognized: false,
            include_trivia_in_counts: false,
        })
        .unwrap();

        let output = raw.tokenize("[a]", &StateStack::root());
        assert_eq!(
            pairs(&output),
            vec![
                (C::IdentifierQuote, "["),
                (C::Identifier, "a"),
                (C::IdentifierQuote, "]"),
            ]
        );
        assert_eq!(output.metrics.raw_fragments, 3);
        assert!(output.metrics.by_category.is_empty());

        let mut tokenizer = raw;
        tokenizer.set_preferences(LexicalPreferences {
            merge_fragments: true,
            ..tokenizer.preferences().clone()
        });
        let stream = tokenizer.tokenize("[a] b", &StateStack::root()).into_stream();
        assert_eq!(stream.len(), 3);
        assert_eq!(stream.significant_len(), 2);
        assert_eq!(stream.iter_significant().next().map(|t| t.text.as_str()), Some("[a]"));
    }

    #[test]
    fn test_metrics() {
        let output = tokenizer().tokenize("SELECT a, b FROM t", &StateStack::root());
        let metrics = &output.metrics;

        assert_eq!(metrics.count(C::Keyword), 2);
        assert_eq!(metrics.count(C::Identifier), 3);
        assert_eq!(metrics.count(C::Whitespace), 0);
        assert_eq!(metrics.lines, 1);
        assert!(!metrics.unterminated);
    }

    #[test]
    fn test_spans_track_lines() {
        let output = tokenizer().tokenize("SELECT\n  x", &StateStack::root());
        let x = output.tokens.last().unwrap();
        assert_eq!(x.span.start.line, 2);
        assert_eq!(x.span.start.column, 3);
        assert_eq!(x.start(), 9);
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocabulary = Vocabulary::from_toml_str(
            "keywords = [\"MATCH\", \"RETURN\"]\nbuiltin_functions = [\"labels\"]",
        )
        .unwrap();
        let tokenizer =
            Tokenizer::with_vocabulary(&vocabulary, LexicalPreferences::default()).unwrap();

        let output = tokenizer.tokenize("MATCH labels SELECT", &StateStack::root());
        assert_eq!(output.tokens[0].category, C::Keyword);
        assert_eq!(output.tokens[2].category, C::Predefined);
        assert_eq!(output.tokens[4].category, C::Identifier);
    }

    #[test]
    fn test_pseudo_columns_need_dollar_prefix() {
        let vocabulary = Vocabulary::from_toml_str(
            "keywords = [\"SELECT\"]\npseudo_columns = [\"ROWID\", \"$ACTION\"]",
        )
        .unwrap();
        let tokenizer =
            Tokenizer::with_vocabulary(&vocabulary, LexicalPreferences::default()).unwrap();

        let output = tokenizer.tokenize("rowid $action", &StateStack::root());
        assert_eq!(
            pairs(&output),
            vec![
                (C::Identifier, "rowid"),
                (C::Whitespace, " "),
                (C::Predefined, "$action"),
            ]
        );
    }

    #[test]
    fn test_missing_vocabulary_file() {
        let err = Tokenizer::from_vocabulary_file(
            Path::new("/nonexistent/dialect.toml"),
            LexicalPreferences::default(),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), codes::vocabulary::VOCABULARY_IO_ERROR);
    }
}
