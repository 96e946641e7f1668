// Internal modules
pub mod config;
pub mod document;
pub mod format;
pub mod grammar;
pub mod language;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod session;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use document::{DocumentError, LineDocument, RelexReport};
pub use grammar::{Vocabulary, VocabularyError};
pub use lexical::{
    tokenize, tokenize_document, LexerError, StateName, StateStack, TokenizeOutput, Tokenizer,
};
pub use tokens::{Token, TokenCategory, TokenStream};
