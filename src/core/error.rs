//! Error types.
//!
//! Controller operations do not fail; errors only arise from invalid
//! configuration and from speech backends (which the controller logs and
//! swallows).

use thiserror::Error;

/// Invalid [`SessionConfig`](super::SessionConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a session needs at least one round")]
    NoRounds,

    #[error("number range {min}..={max} is empty or starts below 1")]
    EmptyRange { min: u8, max: u8 },

    #[error("a round needs at least one option")]
    NoOptions,

    #[error("{options} distinct options do not fit in {min}..={max}")]
    TooManyOptions { options: usize, min: u8, max: u8 },
}

/// Failure reported by a speech backend.
#[derive(Debug, Error)]
pub enum AnnounceError {
    #[error("failed to start speech program `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::TooManyOptions { options: 5, min: 1, max: 3 }.to_string(),
            "5 distinct options do not fit in 1..=3"
        );
        assert_eq!(
            ConfigError::EmptyRange { min: 4, max: 2 }.to_string(),
            "number range 4..=2 is empty or starts below 1"
        );
    }

    #[test]
    fn test_announce_error_keeps_source() {
        use std::error::Error as _;

        let err = AnnounceError::Spawn {
            program: "say".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(err.to_string().starts_with("failed to start speech program `say`"));
        assert!(err.source().is_some());
    }
}
