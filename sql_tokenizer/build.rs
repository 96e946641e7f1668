// build.rs - TOML-driven compile-time constant generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    lexical: LexicalLimits,
    document: DocumentLimits,
    session: SessionLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct LexicalLimits {
    max_state_stack_depth: usize,
    max_token_count: usize,
    max_unrecognized_reports: usize,
}

#[derive(serde::Deserialize)]
struct DocumentLimits {
    max_cached_lines: usize,
}

#[derive(serde::Deserialize)]
struct SessionLimits {
    min_reconnection_delay_ms: u64,
    max_reconnection_delay_ms: u64,
    reconnection_delay_grow_factor: f64,
    connection_timeout_ms: u64,
    max_retries: u32,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SQLTOK_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=SQLTOK_CONFIG_DIR");

    let profile = env::var("SQLTOK_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("SQLTOK_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Workspace root is the parent of the sql_tokenizer directory
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_limits(&config, &profile);
    generate_constants(&config, &profile);
}

fn validate_limits(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_STACK_DEPTH: usize = 1024;
    const ABSOLUTE_MAX_RETRIES: u32 = 1000;

    if config.lexical.max_state_stack_depth < 2 {
        panic!("LIMITS: max_state_stack_depth must allow at least one pushed state");
    }

    if config.lexical.max_state_stack_depth > ABSOLUTE_MAX_STACK_DEPTH {
        panic!("LIMITS: max_state_stack_depth exceeds absolute maximum");
    }

    if config.session.min_reconnection_delay_ms > config.session.max_reconnection_delay_ms {
        panic!("LIMITS: min_reconnection_delay_ms is larger than max_reconnection_delay_ms");
    }

    if config.session.reconnection_delay_grow_factor < 1.0 {
        panic!("LIMITS: reconnection_delay_grow_factor must be at least 1.0");
    }

    if config.session.max_retries > ABSOLUTE_MAX_RETRIES {
        panic!("LIMITS: max_retries exceeds absolute maximum");
    }

    if config.logging.log_buffer_size < 100 {
        panic!("LIMITS: log_buffer_size too small (min: 100)");
    }

    if profile == "production" && config.lexical.max_unrecognized_reports > 64 {
        panic!("PRODUCTION: max_unrecognized_reports too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod lexical {{
        pub const MAX_STATE_STACK_DEPTH: usize = {};
        pub const MAX_TOKEN_COUNT: usize = {};
        pub const MAX_UNRECOGNIZED_REPORTS: usize = {};
    }}

    pub mod document {{
        pub const MAX_CACHED_LINES: usize = {};
    }}

    pub mod session {{
        pub const MIN_RECONNECTION_DELAY_MS: u64 = {};
        pub const MAX_RECONNECTION_DELAY_MS: u64 = {};
        pub const RECONNECTION_DELAY_GROW_FACTOR: f64 = {:?};
        pub const CONNECTION_TIMEOUT_MS: u64 = {};
        pub const MAX_RETRIES: u32 = {};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
    }}
}}
"#,
        profile,
        // Lexical
        config.lexical.max_state_stack_depth,
        config.lexical.max_token_count,
        config.lexical.max_unrecognized_reports,
        // Document
        config.document.max_cached_lines,
        // Session
        config.session.min_reconnection_delay_ms,
        config.session.max_reconnection_delay_ms,
        config.session.reconnection_delay_grow_factor,
        config.session.connection_timeout_ms,
        config.session.max_retries,
        // Logging
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
    );

    fs::write(output_path, constants_code).unwrap();
}
