//! Lexical analysis for SQL highlighting
//!
//! `tokenize(text, start_state)` is the whole outward surface: it returns the
//! tokens of `text` and the state stack the next chunk (usually the next
//! line) must start in. Passes share only the read-only grammar, so they may
//! run concurrently.

pub mod analyzer;
pub mod machine;
pub mod state;

use crate::config::compile_time::lexical::*;
use crate::tokens::{Token, TokenCategory};

pub use analyzer::{LexerError, LexicalMetrics, TokenizeOutput, Tokenizer};
pub use machine::{Construct, MachineRun, RawToken, StateMachine};
pub use state::{StateName, StateStack, StateStackError};

// ============================================================================
// MODULE API
// ============================================================================

/// Tokenize with the standard T-SQL grammar and environment preferences
pub fn tokenize(text: &str, start_state: &StateStack) -> Result<TokenizeOutput, LexerError> {
    Ok(Tokenizer::new()?.tokenize(text, start_state))
}

/// Tokenize a complete document from the root state
pub fn tokenize_document(text: &str) -> Result<TokenizeOutput, LexerError> {
    Ok(Tokenizer::new()?.tokenize_document(text))
}

// ============================================================================
// MODULE INITIALIZATION AND VALIDATION
// ============================================================================

/// Check that lexical codes are registered and the standard rules compile
pub fn validate_tokenization() -> Result<(), String> {
    let lexical_codes = [
        crate::logging::codes::lexical::UNRECOGNIZED_CHARACTER,
        crate::logging::codes::lexical::UNTERMINATED_CONSTRUCT,
        crate::logging::codes::lexical::STATE_STACK_OVERFLOW,
        crate::logging::codes::lexical::INVALID_STATE_STACK,
        crate::logging::codes::lexical::TOKEN_LIMIT_EXCEEDED,
    ];

    for code in &lexical_codes {
        if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    if MAX_STATE_STACK_DEPTH < 2 {
        return Err("MAX_STATE_STACK_DEPTH must allow at least one nested state".to_string());
    }
    if MAX_TOKEN_COUNT == 0 {
        return Err("MAX_TOKEN_COUNT cannot be zero".to_string());
    }

    StateMachine::standard().map_err(|e| e.to_string())?;

    crate::log_debug!("Lexical limits initialized",
        "max_state_stack_depth" => MAX_STATE_STACK_DEPTH,
        "max_token_count" => MAX_TOKEN_COUNT,
        "max_unrecognized_reports" => MAX_UNRECOGNIZED_REPORTS
    );

    Ok(())
}

// ============================================================================
// ANALYSIS HELPERS
// ============================================================================

/// Token distribution summary for a token list
pub fn get_token_counts(tokens: &[Token]) -> TokenCounts {
    let mut counts = TokenCounts::default();

    for token in tokens {
        counts.total += 1;
        match token.category {
            category if category.is_keyword_like() => counts.keywords += 1,
            TokenCategory::Identifier => counts.identifiers += 1,
            TokenCategory::Predefined => counts.predefined += 1,
            TokenCategory::Operator => counts.operators += 1,
            TokenCategory::Number => counts.numbers += 1,
            TokenCategory::String => counts.strings += 1,
            TokenCategory::Comment | TokenCategory::CommentQuote => counts.comments += 1,
            TokenCategory::Whitespace => counts.whitespace += 1,
            TokenCategory::Delimiter | TokenCategory::DelimiterParenthesis => {
                counts.delimiters += 1
            }
            TokenCategory::Unrecognized => counts.unrecognized += 1,
            _ => {}
        }
    }

    counts
}

#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TokenCounts {
    pub total: usize,
    pub keywords: usize,
    pub identifiers: usize,
    pub predefined: usize,
    pub operators: usize,
    pub numbers: usize,
    pub strings: usize,
    pub comments: usize,
    pub whitespace: usize,
    pub delimiters: usize,
    pub unrecognized: usize,
}

impl TokenCounts {
    pub fn significant_tokens(&self) -> usize {
        self.total - self.whitespace - self.comments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_tokenize_returns_end_state() {
        let output = tokenize("SELECT 'open", &StateStack::root()).unwrap();
        assert_eq!(output.end_state.top(), StateName::String);

        let next = tokenize("done'", &output.end_state).unwrap();
        assert!(next.end_state.is_root());
        assert_eq!(next.tokens.len(), 1);
    }

    #[test]
    fn test_whole_document() {
        let output = tokenize_document("SELECT 1;").unwrap();
        assert!(output.end_state.is_root());
        assert_eq!(output.tokens.len(), 4);
    }

    #[test]
    fn test_validate_tokenization() {
        assert!(validate_tokenization().is_ok());
    }

    #[test]
    fn test_token_counts() {
        let output = tokenize_document(
            "BEGIN TRY SELECT COUNT(*), 'x' FROM t -- c\nEND TRY",
        )
        .unwrap();
        let counts = get_token_counts(&output.tokens);

        assert_eq!(counts.keywords, 4);
        assert_eq!(counts.predefined, 1);
        assert_eq!(counts.operators, 1);
        assert_eq!(counts.strings, 1);
        assert_eq!(counts.comments, 1);
        assert_eq!(counts.identifiers, 1);
        assert_eq!(counts.delimiters, 3);
        assert_eq!(
            counts.significant_tokens(),
            counts.total - counts.whitespace - 1
        );
    }
}
