//! Whole-document formatting hook
//!
//! The crate does not format SQL itself. A `DocumentFormatter` supplies the
//! replacement text and `format_document` turns it into the single edit an
//! editor applies over the full document range.
use crate::logging::codes;
use crate::utils::{Position, Span};
use crate::{log_error, log_success};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Formatter '{formatter}' failed: {message}")]
    Failed { formatter: String, message: String },
}

impl FormatError {
    pub fn error_code(&self) -> codes::Code {
        codes::format::FORMATTER_FAILURE
    }
}

/// Replacement of a span of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub range: Span,
    pub new_text: String,
}

pub trait DocumentFormatter {
    fn name(&self) -> &str;

    fn format(&self, text: &str) -> Result<String, FormatError>;
}

/// Returns the text unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFormatter;

impl DocumentFormatter for IdentityFormatter {
    fn name(&self) -> &str {
        "identity"
    }

    fn format(&self, text: &str) -> Result<String, FormatError> {
        Ok(text.to_string())
    }
}

/// Span from the first character to just past the last one
pub fn full_range(text: &str) -> Span {
    let start = Position::start();
    Span::new(start, start.advance_str(text))
}

/// Run `formatter` and wrap its output in one edit covering the whole text
pub fn format_document(
    formatter: &dyn DocumentFormatter,
    text: &str,
) -> Result<Vec<TextEdit>, FormatError> {
    let formatted = formatter.format(text).map_err(|error| {
        log_error!(error.error_code(), &error.to_string(),
            "formatter" => formatter.name()
        );
        error
    })?;

    log_success!(codes::success::FORMAT_COMPLETE,
        "Document formatted",
        "formatter" => formatter.name(),
        "changed" => (formatted != text)
    );

    Ok(vec![TextEdit {
        range: full_range(text),
        new_text: formatted,
    }])
}
