//! Token categories and classified tokens
use crate::utils::{Position, Span};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highlighting category of a token
///
/// The serialized form is the dotted tag understood by editor themes, so a
/// theme rule for `keyword` also colours `keyword.try` and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenCategory {
    #[serde(rename = "keyword")]
    Keyword,
    #[serde(rename = "operator")]
    Operator,
    #[serde(rename = "predefined")]
    Predefined,
    #[serde(rename = "identifier")]
    Identifier,
    /// The `[` `]` `"` glyphs around a quoted identifier
    #[serde(rename = "identifier.quote")]
    IdentifierQuote,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "comment")]
    Comment,
    /// The `/*` `*/` glyphs around a block comment
    #[serde(rename = "comment.quote")]
    CommentQuote,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "delimiter")]
    Delimiter,
    #[serde(rename = "delimiter.parenthesis")]
    DelimiterParenthesis,
    #[serde(rename = "white")]
    Whitespace,
    /// `BEGIN` / `CASE`
    #[serde(rename = "keyword.block.open")]
    BlockOpen,
    /// `END`
    #[serde(rename = "keyword.block.close")]
    BlockClose,
    /// `BEGIN TRY` / `END TRY`
    #[serde(rename = "keyword.try")]
    TryBlock,
    /// `BEGIN CATCH` / `END CATCH`
    #[serde(rename = "keyword.catch")]
    CatchBlock,
    /// `WHEN` / `THEN`
    #[serde(rename = "keyword.choice")]
    Choice,
    #[serde(rename = "invalid")]
    Unrecognized,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 18] = [
        TokenCategory::Keyword,
        TokenCategory::Operator,
        TokenCategory::Predefined,
        TokenCategory::Identifier,
        TokenCategory::IdentifierQuote,
        TokenCategory::String,
        TokenCategory::Comment,
        TokenCategory::CommentQuote,
        TokenCategory::Number,
        TokenCategory::Delimiter,
        TokenCategory::DelimiterParenthesis,
        TokenCategory::Whitespace,
        TokenCategory::BlockOpen,
        TokenCategory::BlockClose,
        TokenCategory::TryBlock,
        TokenCategory::CatchBlock,
        TokenCategory::Choice,
        TokenCategory::Unrecognized,
    ];

    /// Dotted theme tag
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Keyword => "keyword",
            TokenCategory::Operator => "operator",
            TokenCategory::Predefined => "predefined",
            TokenCategory::Identifier => "identifier",
            TokenCategory::IdentifierQuote => "identifier.quote",
            TokenCategory::String => "string",
            TokenCategory::Comment => "comment",
            TokenCategory::CommentQuote => "comment.quote",
            TokenCategory::Number => "number",
            TokenCategory::Delimiter => "delimiter",
            TokenCategory::DelimiterParenthesis => "delimiter.parenthesis",
            TokenCategory::Whitespace => "white",
            TokenCategory::BlockOpen => "keyword.block.open",
            TokenCategory::BlockClose => "keyword.block.close",
            TokenCategory::TryBlock => "keyword.try",
            TokenCategory::CatchBlock => "keyword.catch",
            TokenCategory::Choice => "keyword.choice",
            TokenCategory::Unrecognized => "invalid",
        }
    }

    /// Keyword-like categories, including the scope phrases
    pub fn is_keyword_like(&self) -> bool {
        matches!(
            self,
            TokenCategory::Keyword
                | TokenCategory::BlockOpen
                | TokenCategory::BlockClose
                | TokenCategory::TryBlock
                | TokenCategory::CatchBlock
                | TokenCategory::Choice
        )
    }

    /// Whitespace and comments
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenCategory::Whitespace | TokenCategory::Comment | TokenCategory::CommentQuote
        )
    }

    /// Quote glyphs of a quoted construct
    pub fn is_quote(&self) -> bool {
        matches!(
            self,
            TokenCategory::IdentifierQuote | TokenCategory::CommentQuote
        )
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenCategory::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("unknown token category '{}'", s))
    }
}

/// A classified slice of the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub category: TokenCategory,
    /// Exact source text, original casing preserved
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(category: TokenCategory, text: impl Into<String>, span: Span) -> Self {
        Self {
            category,
            text: text.into(),
            span,
        }
    }

    /// Byte offset of the first character
    pub fn start(&self) -> usize {
        self.span.start.offset
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn end_position(&self) -> Position {
        self.span.end
    }

    pub fn is_significant(&self) -> bool {
        !self.category.is_trivia()
    }

    /// Case-insensitive comparison against a word, as the classification tables do
    pub fn text_eq_ignore_case(&self, word: &str) -> bool {
        self.text.eq_ignore_ascii_case(word)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.span, self.category, self.text)
    }
}
