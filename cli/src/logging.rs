//! # Structured Logging
//!
//! Sets up `tracing` for the codec binary. A bare level such as `debug`
//! applies to `txcodec` and `ledger_transact` only; everything else stays at
//! `warn`. `RUST_LOG` and full filter strings override that.
//!
//! All log output is written to stderr; stdout carries only command output
//! so it can be piped into other tools.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable output.
    Pretty,
    /// Machine-parseable JSON lines.
    Json,
}

impl LogFormat {
    /// Parse a format string. Accepts "json" or "pretty" (case-insensitive).
    /// Returns `Pretty` for any unrecognized value.
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Crates whose events a bare `--log-level` turns up.
const CODEC_TARGETS: [&str; 2] = ["txcodec", "ledger_transact"];

/// Expands a bare level into per-crate directives. Anything that already
/// looks like a filter (`target=level` or a list) is passed through.
fn codec_directives(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }
    let mut directives = String::from("warn");
    for target in CODEC_TARGETS {
        directives.push_str(&format!(",{target}={level}"));
    }
    directives
}

/// Initialize the global tracing subscriber.
///
/// Call this exactly once, early in `main()`. `level` applies when
/// `RUST_LOG` is not set.
pub fn init_logging(level: &str, format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(codec_directives(level)));

    match format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .without_time(),
                )
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr).with_target(true))
                .init();
        }
    }

    tracing::debug!(?format, filter = level, "logging initialized");
}
