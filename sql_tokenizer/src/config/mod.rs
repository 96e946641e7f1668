//! Configuration module for the SQL tokenizer
//! Compile-time limits come from the TOML profile; runtime preferences come from the environment

// Generated by build.rs from config/<profile>.toml
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub mod runtime;

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the configuration profile used during build
    pub fn profile() -> &'static str {
        option_env!("SQLTOK_BUILD_PROFILE").unwrap_or("development")
    }

    /// Returns the configuration directory used during build
    pub fn config_dir() -> &'static str {
        option_env!("SQLTOK_CONFIG_DIR").unwrap_or("config")
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!("Generated from {}/{}.toml", config_dir(), profile())
    }
}

#[cfg(test)]
mod tests {
    use super::compile_time;

    #[test]
    fn test_generated_limits_are_sane() {
        assert!(compile_time::lexical::MAX_STATE_STACK_DEPTH >= 2);
        assert!(compile_time::lexical::MAX_TOKEN_COUNT > 0);
        assert!(
            compile_time::session::MIN_RECONNECTION_DELAY_MS
                <= compile_time::session::MAX_RECONNECTION_DELAY_MS
        );
        assert!(compile_time::session::RECONNECTION_DELAY_GROW_FACTOR >= 1.0);
        assert!(compile_time::logging::LOG_BUFFER_SIZE >= 100);
    }

    #[test]
    fn test_source_info_names_profile() {
        let info = super::build_info::source_info();
        assert!(info.contains(super::build_info::profile()));
        assert!(info.ends_with(".toml"));
    }
}
