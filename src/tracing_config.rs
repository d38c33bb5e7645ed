//! Tracing setup for following rule decisions.
//!
//! The filter comes from `--log`, then `RXLINT_LOG`, then `RUST_LOG`;
//! `--verbose` alone turns on [`VERBOSE_DIRECTIVES`]. The output format comes
//! from `--logFormat`, then `RXLINT_LOG_FORMAT`:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: indented spans via `tracing-tree`, one span per rule run
//! - `json`: one JSON object per span or event
//!
//! ```bash
//! # Why was (or wasn't) a binding reported?
//! rxlint --log rxlint_checker=debug --logFormat tree --showConfig
//!
//! # Every nominal match the solver performs
//! RXLINT_LOG=rxlint_solver=trace RXLINT_LOG_FORMAT=json rxlint
//! ```
//!
//! Without a filter no subscriber is installed. Output always goes to
//! stderr.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Filter used by `--verbose`: rule decisions and linter runs, not the
/// solver's per-type trace.
pub const VERBOSE_DIRECTIVES: &str = "rxlint=debug,rxlint_checker=debug";

/// Tracing output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a format name; anything unrecognised is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Resolved logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TracingConfig {
    /// `EnvFilter` directives; `None` leaves tracing off.
    pub directives: Option<String>,
    pub format: LogFormat,
}

impl TracingConfig {
    /// Merge command-line settings with the process environment.
    pub fn resolve(log: Option<&str>, log_format: Option<&str>, verbose: bool) -> Self {
        Self::resolve_with(log, log_format, verbose, |key| std::env::var(key).ok())
    }

    /// Same as [`resolve`](Self::resolve) with an explicit variable lookup.
    pub fn resolve_with(
        log: Option<&str>,
        log_format: Option<&str>,
        verbose: bool,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let directives = log
            .map(str::to_string)
            .or_else(|| env("RXLINT_LOG"))
            .or_else(|| env("RUST_LOG"))
            .or_else(|| verbose.then(|| VERBOSE_DIRECTIVES.to_string()))
            .filter(|directives| !directives.trim().is_empty());
        let format = log_format
            .map(str::to_string)
            .or_else(|| env("RXLINT_LOG_FORMAT"))
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();
        Self { directives, format }
    }

    pub fn is_enabled(&self) -> bool {
        self.directives.is_some()
    }

    /// Install the global subscriber. A second call, or a call after another
    /// subscriber was installed, leaves the existing one in place.
    pub fn init(&self) {
        let Some(directives) = self.directives.as_deref() else {
            return;
        };
        let filter = EnvFilter::builder().parse_lossy(directives);
        let installed = match self.format {
            LogFormat::Tree => {
                let tree_layer = tracing_tree::HierarchicalLayer::default()
                    .with_indent_amount(2)
                    .with_indent_lines(true)
                    .with_deferred_spans(true)
                    .with_targets(true);
                Registry::default().with(filter).with(tree_layer).try_init()
            }
            LogFormat::Json => {
                let json_layer = fmt::layer().json().with_writer(std::io::stderr);
                Registry::default().with(filter).with(json_layer).try_init()
            }
            LogFormat::Text => {
                let text_layer = fmt::layer().with_writer(std::io::stderr);
                Registry::default().with(filter).with(text_layer).try_init()
            }
        };
        if installed.is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
    }
}
