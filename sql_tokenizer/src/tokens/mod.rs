//! Token model for the SQL highlighter
//!
//! A token is a classified, contiguous slice of the input. Categories form a
//! closed set whose dotted tags (`keyword.try`, `identifier.quote`, ...) are
//! what editor themes key on.

pub mod token;
pub mod token_stream;

pub use token::{Token, TokenCategory};
pub use token_stream::{validation, TokenStream, TokenStreamBuilder};

pub use crate::utils::{Position, Span};
