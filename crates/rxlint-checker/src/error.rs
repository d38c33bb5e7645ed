//! Configuration errors.

/// Errors raised while loading or compiling lint configuration.
///
/// Type resolution never fails; only configuration does.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("unknown rule \"{0}\"")]
    UnknownRule(String),

    #[error("invalid options for rule \"{rule}\": {source}")]
    InvalidRuleOptions {
        rule: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid severity \"{0}\" (expected \"off\", \"warn\" or \"error\")")]
    InvalidSeverity(String),

    #[error("invalid type pattern /{pattern}/: {source}")]
    InvalidTypePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid suffix \"{suffix}\": {source}")]
    InvalidSuffix {
        suffix: String,
        #[source]
        source: regex::Error,
    },
}
