//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` and resolution outcomes to exit codes and user-facing
//! messages.

use docbridge_core::{CoreError, RepositoryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Internal error.
    #[error("{0}")]
    Core(String),

    /// Argument error, including an empty candidate list.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// A root was rejected.
    #[error("{0}")]
    InvalidRoot(String),

    /// No root held the document.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The document resolved but could not be opened.
    #[error("{0}")]
    Open(String),

    /// IO error reading or writing the configuration.
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,
            Self::InvalidRoot(_) => 65, // EX_DATAERR
            Self::NotFound(_) => 66,    // EX_NOINPUT
            Self::Open(_) => 71,        // EX_OSERR
            Self::Io(_) => 74,          // EX_IOERR
            Self::Config(_) => 78,      // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(msg) => Self::Arguments(msg),
            err @ CoreError::InvalidRoot { .. } => Self::InvalidRoot(err.to_string()),
            err @ CoreError::OpenFailure { .. } => Self::Open(err.to_string()),
            CoreError::Repository(RepositoryError::Serialization(msg)) => Self::Config(msg),
            CoreError::Repository(RepositoryError::Storage(msg)) => Self::Io(msg),
            CoreError::Internal(msg) => Self::Core(msg),
        }
    }
}

/// Exit code for an error surfaced from a command.
///
/// Looks through the `anyhow` chain for a `CliError` or `CoreError`; anything
/// else is a general failure.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli) = cause.downcast_ref::<CliError>() {
            return cli.exit_code();
        }
        if let Some(core) = cause.downcast_ref::<CoreError>() {
            return match core {
                CoreError::InvalidInput(_) => 2,
                CoreError::InvalidRoot { .. } => 65,
                CoreError::OpenFailure { .. } => 71,
                CoreError::Repository(RepositoryError::Storage(_)) => 74,
                CoreError::Repository(RepositoryError::Serialization(_)) => 78,
                CoreError::Internal(_) => 1,
            };
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_core_errors_map_to_distinct_codes() {
        let invalid: CliError = CoreError::InvalidInput("no candidates".into()).into();
        let open: CliError = CoreError::OpenFailure {
            path: PathBuf::from("/d/Policy.pdf"),
            reason: "no handler".into(),
        }
        .into();
        let corrupt: CliError =
            CoreError::Repository(RepositoryError::Serialization("eof".into())).into();

        assert_eq!(invalid.exit_code(), 2);
        assert_eq!(open.exit_code(), 71);
        assert_eq!(corrupt.exit_code(), 78);
        assert_eq!(CliError::NotFound("Policy.pdf".into()).exit_code(), 66);
    }

    #[test]
    fn test_exit_code_for_looks_through_context() {
        let err = anyhow::Error::new(CliError::NotFound("x".into())).context("resolve failed");
        assert_eq!(exit_code_for(&err), 66);

        let err = anyhow::Error::new(CoreError::InvalidRoot {
            path: PathBuf::from("/nope"),
            reason: "path does not exist".into(),
        });
        assert_eq!(exit_code_for(&err), 65);

        assert_eq!(exit_code_for(&anyhow::anyhow!("boom")), 1);
    }
}
