//! Command line front end for the SQL tokenizer
//!
//! Argument definitions, the bridge from tokenizer log events to the `log`
//! crate, and one render function per subcommand. Render functions return
//! the text to print so they can be tested without a terminal.
use clap::{Parser, Subcommand};
use serde::Serialize;
use sql_tokenizer::config::runtime::{DocumentPreferences, LexicalPreferences};
use sql_tokenizer::lexical::{get_token_counts, LexicalMetrics, StateStackError, TokenCounts};
use sql_tokenizer::logging::{LogEvent, LogLevel, Logger, LoggingService};
use sql_tokenizer::{
    language, LexerError, LineDocument, StateStack, Token, Tokenizer,
};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "sqltok")]
#[command(about = "Context-sensitive T-SQL tokenizer for syntax highlighting")]
#[command(version)]
pub struct Cli {
    /// TOML vocabulary replacing the built-in T-SQL word lists
    #[arg(long, global = true)]
    pub vocabulary: Option<PathBuf>,

    /// Log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tokens of a file (stdin when no file is given)
    Tokenize {
        file: Option<PathBuf>,

        /// Emit JSON instead of one token per line
        #[arg(long)]
        json: bool,

        /// Keep rule-level fragments instead of one token per construct
        #[arg(long)]
        raw: bool,

        /// Tokenize line by line, carrying the state stack across lines
        #[arg(long)]
        lines: bool,

        /// Skip whitespace and comments
        #[arg(long)]
        significant: bool,

        /// Start state such as `root/blockComment`; line mode always starts at root
        #[arg(long, default_value = "root", conflicts_with = "lines")]
        start_state: String,
    },

    /// Print token counts and lexical metrics
    Stats {
        file: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// Print the editor registration manifest as JSON
    Language,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error("Invalid start state: {0}")]
    StartState(#[from] StateStackError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// LOG BRIDGE
// ============================================================================

/// Forwards tokenizer log events to the `log` facade
pub struct LogBridge;

impl LogBridge {
    pub fn level(level: LogLevel) -> log::Level {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warning => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
        }
    }

    /// Most verbose tokenizer level the `log` filter lets through
    pub fn min_level(filter: log::LevelFilter) -> LogLevel {
        match filter {
            log::LevelFilter::Off | log::LevelFilter::Error => LogLevel::Error,
            log::LevelFilter::Warn => LogLevel::Warning,
            log::LevelFilter::Info => LogLevel::Info,
            log::LevelFilter::Debug | log::LevelFilter::Trace => LogLevel::Debug,
        }
    }

    pub fn service() -> Arc<LoggingService> {
        Arc::new(LoggingService::new(
            Arc::new(LogBridge),
            Self::min_level(log::max_level()),
        ))
    }
}

impl Logger for LogBridge {
    fn log(&self, event: &LogEvent) {
        log::log!(target: "sql_tokenizer", Self::level(event.level), "{}", event.format());
    }
}

/// Default `log` filter for a `-v` count
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

// ============================================================================
// INPUT
// ============================================================================

pub fn read_input(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(text)
        }
    }
}

pub fn build_tokenizer(vocabulary: Option<&Path>, raw: bool) -> Result<Tokenizer, CliError> {
    let preferences = LexicalPreferences {
        merge_fragments: !raw,
        ..LexicalPreferences::default()
    };

    let tokenizer = match vocabulary {
        Some(path) => Tokenizer::from_vocabulary_file(path, preferences)?,
        None => Tokenizer::with_preferences(preferences)?,
    };
    Ok(tokenizer)
}

// ============================================================================
// RENDERING
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct TokenizeOptions {
    pub json: bool,
    pub lines: bool,
    pub significant: bool,
}

#[derive(Serialize)]
struct LineOutput<'a> {
    line: usize,
    start_state: &'a StateStack,
    end_state: &'a StateStack,
    tokens: Vec<&'a Token>,
}

#[derive(Serialize)]
struct StreamOutput<'a> {
    tokens: Vec<&'a Token>,
    end_state: &'a StateStack,
}

#[derive(Serialize)]
struct StatsOutput<'a> {
    counts: &'a TokenCounts,
    metrics: &'a LexicalMetrics,
    end_state: &'a StateStack,
}

fn keep(token: &Token, options: &TokenizeOptions) -> bool {
    !options.significant || token.is_significant()
}

fn render_tokens<'a>(tokens: impl Iterator<Item = &'a Token>, out: &mut String) {
    for token in tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
}

pub fn render_tokenize(
    tokenizer: &Tokenizer,
    text: &str,
    start_state: &StateStack,
    options: TokenizeOptions,
) -> Result<String, CliError> {
    if options.lines {
        return render_lines(tokenizer, text, options);
    }

    let output = if start_state.is_root() {
        tokenizer.tokenize_document(text)
    } else {
        tokenizer.tokenize(text, start_state)
    };

    let end_state = output.end_state.clone();
    let stream = output.into_stream();
    let selected: Vec<&Token> = if options.significant {
        stream.iter_significant().collect()
    } else {
        stream.all_tokens().iter().collect()
    };

    if options.json {
        return Ok(serde_json::to_string_pretty(&StreamOutput {
            tokens: selected,
            end_state: &end_state,
        })?);
    }

    let mut out = String::new();
    render_tokens(selected.into_iter(), &mut out);
    out.push_str(&format!("end state: {}\n", end_state));
    Ok(out)
}

fn render_lines(
    tokenizer: &Tokenizer,
    text: &str,
    options: TokenizeOptions,
) -> Result<String, CliError> {
    let document = LineDocument::with_tokenizer(
        text,
        tokenizer.clone(),
        DocumentPreferences {
            merge_fragments: tokenizer.preferences().merge_fragments,
            ..DocumentPreferences::default()
        },
    );

    let mut lines = Vec::with_capacity(document.line_count());
    for index in 0..document.line_count() {
        let (Some(start_state), Some(end_state), Some(tokens)) = (
            document.line_start_state(index),
            document.line_end_state(index),
            document.line_tokens(index),
        ) else {
            continue;
        };

        lines.push(LineOutput {
            line: index + 1,
            start_state,
            end_state,
            tokens: tokens.iter().filter(|t| keep(t, &options)).collect(),
        });
    }

    if options.json {
        return Ok(serde_json::to_string_pretty(&lines)?);
    }

    let mut out = String::new();
    for line in &lines {
        out.push_str(&format!("line {} [{}]\n", line.line, line.start_state));
        for token in &line.tokens {
            out.push_str(&format!("  {} {:?}\n", token.category, token.text));
        }
    }
    if let Some(last) = lines.last() {
        out.push_str(&format!("end state: {}\n", last.end_state));
    }
    Ok(out)
}

pub fn render_stats(tokenizer: &Tokenizer, text: &str, json: bool) -> Result<String, CliError> {
    let output = tokenizer.tokenize_document(text);
    let counts = get_token_counts(&output.tokens);

    if json {
        return Ok(serde_json::to_string_pretty(&StatsOutput {
            counts: &counts,
            metrics: &output.metrics,
            end_state: &output.end_state,
        })?);
    }

    let metrics = &output.metrics;
    let mut out = String::new();
    out.push_str(&format!("tokens:       {}\n", counts.total));
    out.push_str(&format!("significant:  {}\n", counts.significant_tokens()));
    out.push_str(&format!("keywords:     {}\n", counts.keywords));
    out.push_str(&format!("identifiers:  {}\n", counts.identifiers));
    out.push_str(&format!("predefined:   {}\n", counts.predefined));
    out.push_str(&format!("operators:    {}\n", counts.operators));
    out.push_str(&format!("numbers:      {}\n", counts.numbers));
    out.push_str(&format!("strings:      {}\n", counts.strings));
    out.push_str(&format!("comments:     {}\n", counts.comments));
    out.push_str(&format!("unrecognized: {}\n", counts.unrecognized));
    out.push_str(&format!("lines:        {}\n", metrics.lines));
    out.push_str(&format!("max depth:    {}\n", metrics.max_stack_depth));
    out.push_str(&format!("end state:    {}\n", output.end_state));
    Ok(out)
}

pub fn render_language() -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(&language::manifest())?)
}

/// Execute a parsed command line and return what to print
pub fn run(cli: &Cli) -> Result<String, CliError> {
    match &cli.command {
        Commands::Tokenize {
            file,
            json,
            raw,
            lines,
            significant,
            start_state,
        } => {
            let start_state: StateStack = start_state.parse()?;
            let tokenizer = build_tokenizer(cli.vocabulary.as_deref(), *raw)?;
            let text = read_input(file.as_deref())?;
            render_tokenize(
                &tokenizer,
                &text,
                &start_state,
                TokenizeOptions {
                    json: *json,
                    lines: *lines,
                    significant: *significant,
                },
            )
        }
        Commands::Stats { file, json } => {
            let tokenizer = build_tokenizer(cli.vocabulary.as_deref(), false)?;
            let text = read_input(file.as_deref())?;
            render_stats(&tokenizer, &text, *json)
        }
        Commands::Language => render_language(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::ffi::OsString;
    use std::io::Write;

    fn tokenizer() -> Tokenizer {
        build_tokenizer(None, false).unwrap()
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from([
            "sqltok",
            "tokenize",
            "query.sql",
            "--json",
            "--start-state",
            "root/string",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_matches!(
            cli.command,
            Commands::Tokenize { json: true, raw: false, ref start_state, .. }
                if start_state == "root/string"
        );
        assert!(Cli::try_parse_from(["sqltok", "explode"]).is_err());
    }

    #[test]
    fn test_start_state_conflicts_with_lines() {
        let err = Cli::try_parse_from([
            "sqltok",
            "tokenize",
            "--lines",
            "--start-state",
            "root/string",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        let cli = Cli::try_parse_from(["sqltok", "tokenize", "--lines"]).unwrap();
        assert_matches!(
            cli.command,
            Commands::Tokenize { lines: true, ref start_state, .. } if start_state == "root"
        );
    }

    #[test]
    fn test_render_tokens_as_text() {
        let out = render_tokenize(
            &tokenizer(),
            "SELECT 'a''b'",
            &StateStack::root(),
            TokenizeOptions::default(),
        )
        .unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "1:1-7 keyword \"SELECT\"");
        assert_eq!(lines[2], "1:8-14 string \"'a''b'\"");
        assert_eq!(lines[3], "end state: root");
    }

    #[test]
    fn test_render_tokens_as_json() {
        let out = render_tokenize(
            &tokenizer(),
            "BEGIN TRY -- x",
            &StateStack::root(),
            TokenizeOptions {
                json: true,
                significant: true,
                ..TokenizeOptions::default()
            },
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["tokens"].as_array().map(Vec::len), Some(1));
        assert_eq!(value["tokens"][0]["category"], "keyword.try");
        assert_eq!(value["end_state"][0], "root");
    }

    #[test]
    fn test_significant_tokens_as_text() {
        let out = render_tokenize(
            &tokenizer(),
            "SELECT /* c */ x",
            &StateStack::root(),
            TokenizeOptions {
                significant: true,
                ..TokenizeOptions::default()
            },
        )
        .unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "1:1-7 keyword \"SELECT\"",
                "1:16-17 identifier \"x\"",
                "end state: root",
            ]
        );
    }

    #[test]
    fn test_render_lines_carries_state() {
        let out = render_tokenize(
            &tokenizer(),
            "SELECT /* a\nb */ 1",
            &StateStack::root(),
            TokenizeOptions {
                lines: true,
                ..TokenizeOptions::default()
            },
        )
        .unwrap();

        assert!(out.contains("line 2 [root/blockComment]"));
        assert!(out.contains("  comment \"b */\""));
        assert!(out.ends_with("end state: root\n"));
    }

    #[test]
    fn test_continuation_start_state() {
        let start: StateStack = "root/string".parse().unwrap();
        let out = render_tokenize(&tokenizer(), "x' y", &start, TokenizeOptions::default())
            .unwrap();
        assert!(out.starts_with("1:1-3 string \"x'\""));
    }

    #[test]
    fn test_render_stats() {
        let out = render_stats(&tokenizer(), "SELECT 1 FROM t", false).unwrap();
        assert!(out.contains("keywords:     2"));
        assert!(out.contains("numbers:      1"));

        let json = render_stats(&tokenizer(), "SELECT 'x", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["metrics"]["unterminated"], true);
        assert_eq!(value["counts"]["strings"], 1);
    }

    #[test]
    fn test_language_manifest() {
        let value: serde_json::Value = serde_json::from_str(&render_language().unwrap()).unwrap();
        assert_eq!(value["registration"]["id"], "sql");
        assert_eq!(value["definition"]["tokenPostfix"], ".sql");
    }

    #[test]
    fn test_vocabulary_file_and_input_file() {
        let mut vocabulary = tempfile::NamedTempFile::new().unwrap();
        writeln!(vocabulary, "keywords = [\"MATCH\"]").unwrap();
        let mut query = tempfile::NamedTempFile::new().unwrap();
        write!(query, "MATCH SELECT").unwrap();

        let args: Vec<OsString> = vec![
            "sqltok".into(),
            "tokenize".into(),
            query.path().into(),
            "--vocabulary".into(),
            vocabulary.path().into(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        let out = run(&cli).unwrap();
        assert!(out.contains("keyword \"MATCH\""));
        assert!(out.contains("identifier \"SELECT\""));
    }

    #[test]
    fn test_errors() {
        assert_matches!(
            read_input(Some(Path::new("/nonexistent/query.sql"))),
            Err(CliError::Io { .. })
        );

        let cli = Cli::try_parse_from(["sqltok", "tokenize", "--start-state", "string"]).unwrap();
        assert_matches!(run(&cli), Err(CliError::StartState(_)));
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(LogBridge::level(LogLevel::Warning), log::Level::Warn);
        assert_eq!(LogBridge::min_level(log::LevelFilter::Trace), LogLevel::Debug);
        assert_eq!(LogBridge::min_level(log::LevelFilter::Off), LogLevel::Error);
        assert_eq!(default_filter(0), "warn");
        assert_eq!(default_filter(5), "debug");
    }
}
