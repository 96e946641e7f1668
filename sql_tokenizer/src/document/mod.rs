//! Line-cached document for incremental highlighting
//!
//! Each line is tokenized on its own, starting in the end state of the line
//! above. After an edit only the edited lines are relexed, plus any following
//! lines whose start state changed; relexing stops at the first untouched line
//! whose cached start state still matches.
use crate::config::compile_time::document::MAX_CACHED_LINES;
use crate::config::runtime::{DocumentPreferences, LexicalPreferences};
use crate::grammar::rules::body_category;
use crate::lexical::{LexerError, StateStack, Tokenizer};
use crate::logging::codes;
use crate::tokens::{Token, TokenCategory};
use crate::utils::{Position, Span};
use crate::{log_success, log_warning};
use serde::Serialize;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DocumentError {
    #[error("Edit of {removed} line(s) at line {first_line} is outside a document of {line_count} line(s)")]
    EditOutOfRange {
        first_line: usize,
        removed: usize,
        line_count: usize,
    },

    #[error("Line {index} does not exist")]
    NoSuchLine { index: usize },

    #[error(transparent)]
    Lexer(#[from] LexerError),
}

impl DocumentError {
    pub fn error_code(&self) -> codes::Code {
        match self {
            DocumentError::EditOutOfRange { .. } | DocumentError::NoSuchLine { .. } => {
                codes::document::EDIT_OUT_OF_RANGE
            }
            DocumentError::Lexer(e) => e.error_code(),
        }
    }
}

/// Cached lexing result of one line
#[derive(Debug, Clone)]
struct Line {
    text: String,
    start_state: StateStack,
    end_state: StateStack,
    /// Spans relative to the start of the line
    tokens: Vec<Token>,
}

/// What an edit caused to be relexed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelexReport {
    pub first_line: usize,
    pub lines_relexed: usize,
    /// First line found still valid, if relexing stopped early
    pub converged_at: Option<usize>,
    pub end_state_changed: bool,
}

impl RelexReport {
    /// Lines whose tokens were recomputed
    pub fn relexed_range(&self) -> std::ops::Range<usize> {
        self.first_line..self.first_line + self.lines_relexed
    }
}

pub struct LineDocument {
    lines: Vec<Line>,
    tokenizer: Tokenizer,
    preferences: DocumentPreferences,
    cache_warning_logged: bool,
}

impl LineDocument {
    pub fn new(text: &str) -> Result<Self, DocumentError> {
        Self::with_preferences(text, DocumentPreferences::default())
    }

    pub fn with_preferences(
        text: &str,
        preferences: DocumentPreferences,
    ) -> Result<Self, DocumentError> {
        let tokenizer = Tokenizer::with_preferences(LexicalPreferences {
            merge_fragments: preferences.merge_fragments,
            ..LexicalPreferences::default()
        })?;
        Ok(Self::with_tokenizer(text, tokenizer, preferences))
    }

    pub fn with_tokenizer(
        text: &str,
        tokenizer: Tokenizer,
        preferences: DocumentPreferences,
    ) -> Self {
        let mut document = Self {
            lines: Vec::new(),
            tokenizer,
            preferences,
            cache_warning_logged: false,
        };
        document.set_text(text);
        document
    }

    /// Replace the whole text and relex every line
    pub fn set_text(&mut self, text: &str) -> RelexReport {
        let previous_end = self.lines.last().map(|line| line.end_state.clone());
        self.lines = text.split('\n').map(Self::unlexed_line).collect();
        let mut report = self.relex_from(0, self.lines.len());
        report.end_state_changed = previous_end.as_ref() != Some(self.end_state());
        report
    }

    /// Replace `removed` lines starting at `first_line` with `inserted`
    pub fn apply_edit(
        &mut self,
        first_line: usize,
        removed: usize,
        inserted: &[&str],
    ) -> Result<RelexReport, DocumentError> {
        let line_count = self.lines.len();
        if first_line > line_count || removed > line_count - first_line {
            return Err(DocumentError::EditOutOfRange {
                first_line,
                removed,
                line_count,
            });
        }

        let previous_end = self.end_state().clone();

        self.lines.splice(
            first_line..first_line + removed,
            inserted.iter().map(|text| Self::unlexed_line(text)),
        );
        if self.lines.is_empty() {
            self.lines.push(Self::unlexed_line(""));
        }

        let first_line = first_line.min(self.lines.len() - 1);
        let edited = inserted.len().max(1);
        let mut report = self.relex_from(first_line, edited);
        report.end_state_changed = &previous_end != self.end_state();

        if self.preferences.log_relex_reports {
            log_success!(codes::success::DOCUMENT_RELEXED,
                "Document relexed",
                "first_line" => report.first_line,
                "lines_relexed" => report.lines_relexed,
                "converged" => report.converged_at.is_some()
            );
        }

        self.check_cache_limit();
        Ok(report)
    }

    /// Replace the text of one line
    pub fn edit_line(&mut self, index: usize, text: &str) -> Result<RelexReport, DocumentError> {
        if index >= self.lines.len() {
            return Err(DocumentError::NoSuchLine { index });
        }
        self.apply_edit(index, 1, &[text])
    }

    fn unlexed_line(text: &str) -> Line {
        Line {
            text: text.to_string(),
            start_state: StateStack::root(),
            end_state: StateStack::root(),
            tokens: Vec::new(),
        }
    }

    /// Relex from `first`; the first `edited` lines are always relexed, later
    /// ones only until a cached start state matches
    fn relex_from(&mut self, first: usize, edited: usize) -> RelexReport {
        let mut state = match first {
            0 => StateStack::root(),
            n => self.lines[n - 1].end_state.clone(),
        };

        let mut report = RelexReport {
            first_line: first,
            lines_relexed: 0,
            converged_at: None,
            end_state_changed: false,
        };

        for index in first..self.lines.len() {
            let line = &mut self.lines[index];
            if index >= first + edited && line.start_state == state {
                report.converged_at = Some(index);
                break;
            }

            let output = self.tokenizer.tokenize(&line.text, &state);
            line.start_state = state;
            line.tokens = output.tokens;
            line.end_state = output.end_state;
            state = line.end_state.clone();
            report.lines_relexed += 1;
        }

        report
    }

    fn check_cache_limit(&mut self) {
        if self.lines.len() > MAX_CACHED_LINES && !self.cache_warning_logged {
            self.cache_warning_logged = true;
            log_warning!(code = codes::document::LINE_CACHE_LIMIT,
                "Document line count exceeds the cache limit",
                "lines" => self.lines.len(),
                "max_lines" => MAX_CACHED_LINES
            );
        }
    }

    // === QUERIES ===

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn line_text(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|line| line.text.as_str())
    }

    /// Tokens of one line with line-relative spans
    pub fn line_tokens(&self, index: usize) -> Option<&[Token]> {
        self.lines.get(index).map(|line| line.tokens.as_slice())
    }

    pub fn line_start_state(&self, index: usize) -> Option<&StateStack> {
        self.lines.get(index).map(|line| &line.start_state)
    }

    pub fn line_end_state(&self, index: usize) -> Option<&StateStack> {
        self.lines.get(index).map(|line| &line.end_state)
    }

    pub fn end_state(&self) -> &StateStack {
        // A document always holds at least one line
        &self.lines[self.lines.len() - 1].end_state
    }

    pub fn is_unterminated(&self) -> bool {
        self.end_state().is_unterminated()
    }

    /// Document-wide tokens with absolute spans
    ///
    /// Line breaks appear as their own tokens: whitespace between lines, or
    /// the body category of a construct left open across the break.
    pub fn tokens(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut origin = Position::start();

        for (index, line) in self.lines.iter().enumerate() {
            tokens.extend(line.tokens.iter().map(|token| Token {
                span: token.span.relative_to(origin),
                ..token.clone()
            }));
            origin = origin.advance_str(&line.text);

            if index + 1 < self.lines.len() {
                let category = line
                    .end_state
                    .outermost_construct()
                    .map(body_category)
                    .unwrap_or(TokenCategory::Whitespace);
                let end = origin.advance('\n');
                tokens.push(Token::new(category, "\n", Span::new(origin, end)));
                origin = end;
            }
        }

        tokens
    }
}
