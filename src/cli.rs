//! Command-line interface for matrix-notify using clap.
//!
//! The dispatcher normally runs the binary without arguments; the flags
//! exist for manual runs and debugging.

use clap::{Parser, ValueEnum};

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format (default).
    #[default]
    Text,
    /// Structured JSON format for log aggregation.
    Json,
}

/// Forward Checkmk notifications to a Matrix room.
#[derive(Parser, Debug)]
#[command(name = "matrix-notify")]
#[command(version)]
#[command(about = "Forward Checkmk notifications to a Matrix room")]
pub struct Cli {
    /// Log format: text or json.
    #[arg(long = "log-format", value_enum, default_value_t = LogFormat::Text, env = "LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Classify and render, print the request that would be sent, and exit.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// HTTP request timeout in seconds.
    #[arg(long = "timeout", default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn cli_defaults() {
        temp_env::with_var("LOG_FORMAT", None::<&str>, || {
            let cli = Cli::try_parse_from(["matrix-notify"]).unwrap();
            assert!(matches!(cli.log_format, LogFormat::Text));
            assert!(!cli.dry_run);
            assert_eq!(cli.timeout, DEFAULT_TIMEOUT_SECS);
        });
    }

    #[test]
    fn cli_dry_run_flag() {
        let cli = Cli::try_parse_from(["matrix-notify", "--dry-run"]).unwrap();
        assert!(cli.dry_run);
    }

    #[test]
    fn cli_timeout_option() {
        let cli = Cli::try_parse_from(["matrix-notify", "--timeout", "30"]).unwrap();
        assert_eq!(cli.timeout, 30);
    }

    #[test]
    fn cli_timeout_zero_rejected() {
        let result = Cli::try_parse_from(["matrix-notify", "--timeout", "0"]);
        assert!(result.is_err(), "Zero timeout should be rejected");
    }

    #[test]
    fn cli_log_format_json() {
        let cli = Cli::try_parse_from(["matrix-notify", "--log-format", "json"]).unwrap();
        assert!(matches!(cli.log_format, LogFormat::Json));
    }

    #[test]
    fn cli_log_format_invalid_rejected() {
        let result = Cli::try_parse_from(["matrix-notify", "--log-format", "invalid"]);
        assert!(result.is_err(), "Invalid log format should be rejected");
    }

    #[test]
    #[serial]
    fn cli_log_format_from_env() {
        temp_env::with_var("LOG_FORMAT", Some("json"), || {
            let cli = Cli::try_parse_from(["matrix-notify"]).unwrap();
            assert!(matches!(cli.log_format, LogFormat::Json));
        });
    }

    #[test]
    #[serial]
    fn cli_log_format_flag_overrides_env() {
        temp_env::with_var("LOG_FORMAT", Some("json"), || {
            let cli = Cli::try_parse_from(["matrix-notify", "--log-format", "text"]).unwrap();
            assert!(matches!(cli.log_format, LogFormat::Text));
        });
    }
}
