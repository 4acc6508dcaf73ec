use thiserror::Error;

/// Errors raised while reading, validating or writing a scenario record
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("body {index}: {reason}")]
    InvalidBody { index: usize, reason: String },

    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}
