use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the server process.
///
/// These codes let process supervisors distinguish a bad invocation
/// from a failure at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Clean shutdown
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config, record store, bind failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for component resolution and its plumbing.
///
/// Version and range variants are raised by the domain services and abort
/// the whole resolution. Record store variants are raised by the store
/// adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Invalid version range: \"{range}\"\nDetails: {details}\n\n💡 Hint: Fix the range in the record store; it must be a semantic version constraint (e.g. \"<2.23.0\", \">=1.0, <2.0\", \"^1.2\")")]
    InvalidVersionRange { range: String, details: String },

    #[error("Invalid component version: \"{version}\"\nDetails: {details}\n\n💡 Hint: Component identifiers must end with a semantic version (e.g. \"pypi://requests:2.22.0\")")]
    InvalidVersion { version: String, details: String },

    #[error("Record store not found: {path}\n\n💡 Hint: Pass the path to the JSON record store as the second argument or set db_path in the config file")]
    RecordStoreNotFound { path: PathBuf },

    #[error("Failed to read record store: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    RecordStoreReadError { path: PathBuf, details: String },

    #[error("Failed to decode record store: {path}\nDetails: {details}\n\n💡 Hint: The record store must be a JSON array of component records")]
    RecordStoreDecodeError { path: PathBuf, details: String },

    #[error("Invalid request: {details}")]
    InvalidRequest { details: String },

    /// Validation error for configuration and arguments
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_invalid_version_range_display() {
        let error = ProviderError::InvalidVersionRange {
            range: ">>1.0".to_string(),
            details: "unexpected character".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid version range"));
        assert!(display.contains(">>1.0"));
        assert!(display.contains("unexpected character"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_invalid_version_display() {
        let error = ProviderError::InvalidVersion {
            version: "latest".to_string(),
            details: "unexpected character 'l'".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid component version"));
        assert!(display.contains("latest"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_record_store_not_found_display() {
        let error = ProviderError::RecordStoreNotFound {
            path: PathBuf::from("/data/db.json"),
        };
        let display = format!("{}", error);
        assert!(display.contains("Record store not found"));
        assert!(display.contains("/data/db.json"));
    }

    #[test]
    fn test_record_store_decode_error_display() {
        let error = ProviderError::RecordStoreDecodeError {
            path: PathBuf::from("db.json"),
            details: "expected value at line 1 column 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to decode record store"));
        assert!(display.contains("expected value"));
        assert!(display.contains("JSON array"));
    }

    #[test]
    fn test_security_error_display() {
        let error = ProviderError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Use a regular file instead"));
    }

    #[test]
    fn test_provider_error_downcasts_from_anyhow() {
        let err: anyhow::Error = ProviderError::InvalidRequest {
            details: "missing Components".to_string(),
        }
        .into();
        assert!(matches!(
            err.downcast_ref::<ProviderError>(),
            Some(ProviderError::InvalidRequest { .. })
        ));
    }
}
