//! Token stream with a significant-token view
//!
//! The full stream keeps whitespace and comments so the input can be rebuilt
//! exactly; the significant view skips them for consumers that only care
//! about code (bracket matching, outline, statistics).
use super::token::{Token, TokenCategory};
use crate::utils::{Position, Span};

#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    /// All tokens in source order
    tokens: Vec<Token>,
    /// Indices into `tokens` of the significant ones
    significant_indices: Vec<usize>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let significant_indices = tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.is_significant())
            .map(|(i, _)| i)
            .collect();

        Self {
            tokens,
            significant_indices,
        }
    }

    /// Number of tokens, trivia included
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn significant_len(&self) -> usize {
        self.significant_indices.len()
    }

    pub fn all_tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn iter_significant(&self) -> impl Iterator<Item = &Token> {
        self.significant_indices.iter().map(|&i| &self.tokens[i])
    }

    /// Concatenated token text; equals the tokenized input
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Token covering a byte offset
    pub fn token_at_offset(&self, offset: usize) -> Option<&Token> {
        let index = self
            .tokens
            .partition_point(|token| token.span.end.offset <= offset);
        self.tokens
            .get(index)
            .filter(|token| token.span.contains_offset(offset))
    }
}

/// Builds a stream from `(category, text)` pairs, computing spans as it goes
#[derive(Debug)]
pub struct TokenStreamBuilder {
    tokens: Vec<Token>,
    current_position: Position,
}

impl TokenStreamBuilder {
    pub fn new() -> Self {
        Self::starting_at(Position::start())
    }

    pub fn starting_at(position: Position) -> Self {
        Self {
            tokens: Vec::new(),
            current_position: position,
        }
    }

    pub fn push_token(mut self, category: TokenCategory, text: &str) -> Self {
        self.push(category, text);
        self
    }

    /// In-place variant of `push_token`
    pub fn push(&mut self, category: TokenCategory, text: &str) {
        let start = self.current_position;
        let end = start.advance_str(text);
        self.tokens.push(Token::new(category, text, Span::new(start, end)));
        self.current_position = end;
    }

    pub fn position(&self) -> Position {
        self.current_position
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn build(self) -> TokenStream {
        TokenStream::new(self.tokens)
    }
}

impl Default for TokenStreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Stream integrity checks
pub mod validation {
    use super::*;

    /// Spans are contiguous: each token starts where the previous one ended
    pub fn validate_span_order(tokens: &[Token]) -> Result<(), String> {
        for window in tokens.windows(2) {
            let current = window[0].span;
            let next = window[1].span;

            if current.end != next.start {
                return Err(format!(
                    "Span gap or overlap: token ending at {} followed by token starting at {}",
                    current.end.offset, next.start.offset
                ));
            }
        }
        Ok(())
    }

    /// Token texts concatenate back to `input` and no token is empty
    pub fn validate_coverage(tokens: &[Token], input: &str) -> Result<(), String> {
        let mut offset = 0;
        for token in tokens {
            if token.is_empty() {
                return Err(format!("Empty token at offset {}", offset));
            }
            if !input[offset..].starts_with(token.text.as_str()) {
                return Err(format!(
                    "Token {:?} does not match input at offset {}",
                    token.text, offset
                ));
            }
            offset += token.len();
        }

        if offset != input.len() {
            return Err(format!(
                "Tokens cover {} of {} bytes",
                offset,
                input.len()
            ));
        }
        Ok(())
    }

    pub fn validate_token_stream(stream: &TokenStream, input: &str) -> Result<(), String> {
        validate_span_order(stream.all_tokens())?;
        validate_coverage(stream.all_tokens(), input)?;

        if stream.text() != input {
            return Err("Stream text differs from input".to_string());
        }
        Ok(())
    }
}
