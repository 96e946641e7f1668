//! Error and success codes with their classification metadata
//!
//! Single source of truth for every code the tokenizer logs.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Lexical analysis codes
pub mod lexical {
    use super::Code;

    pub const UNRECOGNIZED_CHARACTER: Code = Code::new("E020");
    pub const UNTERMINATED_CONSTRUCT: Code = Code::new("E021");
    pub const STATE_STACK_OVERFLOW: Code = Code::new("E022");
    pub const INVALID_STATE_STACK: Code = Code::new("E023");
    pub const TOKEN_LIMIT_EXCEEDED: Code = Code::new("E024");
}

/// Vocabulary and rule table codes
pub mod vocabulary {
    use super::Code;

    pub const VOCABULARY_IO_ERROR: Code = Code::new("E030");
    pub const VOCABULARY_PARSE_ERROR: Code = Code::new("E031");
    pub const EMPTY_VOCABULARY: Code = Code::new("E032");
    pub const INVALID_RULE_PATTERN: Code = Code::new("E033");
}

/// Incremental document codes
pub mod document {
    use super::Code;

    pub const EDIT_OUT_OF_RANGE: Code = Code::new("E040");
    pub const LINE_CACHE_LIMIT: Code = Code::new("E041");
}

/// Formatting hook codes
pub mod format {
    use super::Code;

    pub const FORMATTER_FAILURE: Code = Code::new("E050");
}

/// Language client session codes
pub mod session {
    use super::Code;

    pub const CLIENT_START_FAILURE: Code = Code::new("E060");
    pub const RETRIES_EXHAUSTED: Code = Code::new("E061");
    pub const CLIENT_NOT_CONNECTED: Code = Code::new("E062");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const VOCABULARY_LOADED: Code = Code::new("I021");
    pub const DOCUMENT_RELEXED: Code = Code::new("I030");
    pub const FORMAT_COMPLETE: Code = Code::new("I040");
    pub const SERVICES_INSTALLED: Code = Code::new("I050");
    pub const CLIENT_CONNECTED: Code = Code::new("I051");
    pub const CLIENT_DISPOSED: Code = Code::new("I052");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static METADATA: &[ErrorMetadata] = &[
    // System
    ErrorMetadata::new(
        "ERR001",
        "System",
        Severity::Critical,
        false,
        "Critical internal error",
        "File a bug report with the input that triggered it",
    ),
    ErrorMetadata::new(
        "ERR002",
        "System",
        Severity::Critical,
        false,
        "Initialization failure",
        "Check the build profile and logging preferences",
    ),
    // Lexical
    ErrorMetadata::new(
        "E020",
        "Lexical",
        Severity::Low,
        true,
        "Character not matched by any rule of the active state",
        "Character is emitted as an unrecognized token",
    ),
    ErrorMetadata::new(
        "E021",
        "Lexical",
        Severity::Low,
        true,
        "Comment, string or quoted identifier still open at end of input",
        "Seed the next tokenization call with the returned end state",
    ),
    ErrorMetadata::new(
        "E022",
        "Lexical",
        Severity::Medium,
        true,
        "State stack depth limit reached",
        "Raise max_state_stack_depth in the build profile",
    ),
    ErrorMetadata::new(
        "E023",
        "Lexical",
        Severity::Medium,
        false,
        "Restored state stack is malformed",
        "Use a state stack produced by a previous tokenization",
    ),
    ErrorMetadata::new(
        "E024",
        "Lexical",
        Severity::Medium,
        true,
        "Token count exceeds configured limit",
        "Tokenize the document incrementally by line",
    ),
    // Vocabulary
    ErrorMetadata::new(
        "E030",
        "Vocabulary",
        Severity::High,
        false,
        "Vocabulary file could not be read",
        "Check the vocabulary file path and permissions",
    ),
    ErrorMetadata::new(
        "E031",
        "Vocabulary",
        Severity::High,
        false,
        "Vocabulary file is not valid TOML",
        "Fix the vocabulary file syntax",
    ),
    ErrorMetadata::new(
        "E032",
        "Vocabulary",
        Severity::High,
        false,
        "Vocabulary defines no keywords",
        "Provide at least one keyword",
    ),
    ErrorMetadata::new(
        "E033",
        "Vocabulary",
        Severity::Critical,
        false,
        "Rule pattern failed to compile",
        "Fix the rule table pattern",
    ),
    // Document
    ErrorMetadata::new(
        "E040",
        "Document",
        Severity::Medium,
        false,
        "Edit range lies outside the document",
        "Resynchronize the document text",
    ),
    ErrorMetadata::new(
        "E041",
        "Document",
        Severity::Low,
        true,
        "Line cache exceeds configured size",
        "Raise max_cached_lines in the build profile",
    ),
    // Format
    ErrorMetadata::new(
        "E050",
        "Format",
        Severity::Medium,
        true,
        "Formatting collaborator failed",
        "Leave the document unchanged",
    ),
    // Session
    ErrorMetadata::new(
        "E060",
        "Session",
        Severity::High,
        true,
        "Language client failed to start",
        "Reconnect after the policy delay",
    ),
    ErrorMetadata::new(
        "E061",
        "Session",
        Severity::High,
        false,
        "Reconnection attempts exhausted",
        "Check that the language server is reachable",
    ),
    ErrorMetadata::new(
        "E062",
        "Session",
        Severity::Low,
        true,
        "No language client is connected",
        "Wait for the connection to open",
    ),
    // Success
    ErrorMetadata::new(
        "I004",
        "System",
        Severity::Low,
        true,
        "Logging initialized",
        "None",
    ),
    ErrorMetadata::new(
        "I020",
        "Lexical",
        Severity::Low,
        true,
        "Tokenization completed",
        "None",
    ),
    ErrorMetadata::new(
        "I021",
        "Vocabulary",
        Severity::Low,
        true,
        "Vocabulary loaded",
        "None",
    ),
    ErrorMetadata::new(
        "I030",
        "Document",
        Severity::Low,
        true,
        "Document lines relexed",
        "None",
    ),
    ErrorMetadata::new(
        "I040",
        "Format",
        Severity::Low,
        true,
        "Document formatted",
        "None",
    ),
    ErrorMetadata::new(
        "I050",
        "Session",
        Severity::Low,
        true,
        "Editor services installed",
        "None",
    ),
    ErrorMetadata::new(
        "I051",
        "Session",
        Severity::Low,
        true,
        "Language client connected",
        "None",
    ),
    ErrorMetadata::new(
        "I052",
        "Session",
        Severity::Low,
        true,
        "Language client disposed",
        "None",
    ),
];

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, &'static ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, &'static ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| METADATA.iter().map(|m| (m.code, m)).collect())
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code).copied()
}

/// Get severity from code
pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_metadata(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Get human-readable description for code
pub fn get_description(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for code
pub fn get_action(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
