// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalPreferences {
    /// Whether adjacent fragments of one construct are merged into a single token
    pub merge_fragments: bool,

    /// Whether to collect per-category token metrics
    pub collect_detailed_metrics: bool,

    /// Whether to log a warning for each unrecognized character
    pub log_unrecognized: bool,

    /// Whether to include whitespace and comments in token counts
    pub include_trivia_in_counts: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            merge_fragments: env::var(env_vars::LEXICAL_MERGE_FRAGMENTS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            collect_detailed_metrics: env::var(env_vars::LEXICAL_DETAILED_METRICS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_unrecognized: env::var(env_vars::LEXICAL_LOG_UNRECOGNIZED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            include_trivia_in_counts: env::var(env_vars::LEXICAL_INCLUDE_TRIVIA)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentPreferences {
    /// Whether to log a debug event for every incremental relex
    pub log_relex_reports: bool,

    /// Whether fragments are merged in cached line tokens
    pub merge_fragments: bool,
}

impl Default for DocumentPreferences {
    fn default() -> Self {
        Self {
            log_relex_reports: env::var(env_vars::DOCUMENT_LOG_RELEX)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            merge_fragments: env::var(env_vars::LEXICAL_MERGE_FRAGMENTS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to enable console output
    pub enable_console_logging: bool,

    /// Preferred minimum log level
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var(env_vars::LOGGING_ENABLE_CONSOLE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "trace" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub lexical: LexicalPreferences,
    pub document: DocumentPreferences,
    pub logging: LoggingPreferences,
}

/// Environment variable names for configuration
pub mod env_vars {
    // Lexical
    pub const LEXICAL_MERGE_FRAGMENTS: &str = "SQLTOK_LEXICAL_MERGE_FRAGMENTS";
    pub const LEXICAL_DETAILED_METRICS: &str = "SQLTOK_LEXICAL_DETAILED_METRICS";
    pub const LEXICAL_LOG_UNRECOGNIZED: &str = "SQLTOK_LEXICAL_LOG_UNRECOGNIZED";
    pub const LEXICAL_INCLUDE_TRIVIA: &str = "SQLTOK_LEXICAL_INCLUDE_TRIVIA";

    // Document
    pub const DOCUMENT_LOG_RELEX: &str = "SQLTOK_DOCUMENT_LOG_RELEX";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "SQLTOK_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "SQLTOK_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "SQLTOK_LOGGING_MIN_LEVEL";
}
