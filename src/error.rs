//! Error types for `interview-guide`
//!
//! Per-file load failures are recoverable and only ever logged by the
//! index builder. Everything else aggregates into [`GuideError`], which
//! maps onto a process exit code.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `interview-guide` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (bad config file, invalid JSON/YAML)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Data error (no category files, nothing loaded, validation failed)
    pub const DATA_ERROR: i32 = 4;

    /// Marketing script error (invalid URL in UTM input)
    pub const MARKETING_ERROR: i32 = 5;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `interview-guide` operations.
#[derive(Debug, Error)]
pub enum GuideError {
    /// Configuration loading error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The question index could not be built
    #[error(transparent)]
    Index(#[from] IndexError),

    /// A single category file failed to load (surfaced by `validate`)
    #[error(transparent)]
    Load(#[from] LoadError),

    /// `validate` rejected at least one file
    #[error("{failed} of {total} category files failed validation")]
    ValidationFailed {
        /// Number of rejected files
        failed: usize,
        /// Number of files checked
        total: usize,
    },

    /// Sitemap or UTM generation failed
    #[error(transparent)]
    Marketing(#[from] MarketingError),

    /// Invalid command-line usage
    #[error("usage error: {0}")]
    Usage(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GuideError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Json(_) => ExitCode::CONFIG_ERROR,
            Self::Index(_) | Self::Load(_) | Self::ValidationFailed { .. } => {
                ExitCode::DATA_ERROR
            }
            Self::Marketing(_) => ExitCode::MARKETING_ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration file loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Configuration file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

// ============================================================================
// Category Load Errors
// ============================================================================

/// Failure to load one category file.
///
/// The index builder logs these and skips the file; they only become
/// fatal when no category loads at all.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not exist in the source
    #[error("{file}: not found")]
    NotFound {
        /// Category file name
        file: String,
    },

    /// The server answered with a non-success status
    #[error("{file}: HTTP {status}")]
    HttpStatus {
        /// Category file name
        file: String,
        /// HTTP status code
        status: u16,
    },

    /// The request did not complete within the fetch timeout
    #[error("{file}: timed out after {timeout_ms}ms")]
    Timeout {
        /// Category file name
        file: String,
        /// Timeout that elapsed, in milliseconds
        timeout_ms: u64,
    },

    /// Connection-level failure
    #[error("{file}: network error: {message}")]
    Network {
        /// Category file name
        file: String,
        /// Error reported by the HTTP client
        message: String,
    },

    /// Local read failure
    #[error("{file}: {source}")]
    Io {
        /// Category file name
        file: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file exceeds the configured size limit
    #[error("{file}: {size} bytes exceeds limit of {limit} bytes")]
    TooLarge {
        /// Category file name
        file: String,
        /// Actual size in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },

    /// The file is not a well-formed category document
    #[error("{file}: parse error: {message}")]
    Parse {
        /// Category file name
        file: String,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// The file parsed but failed validation
    #[error("{file}: validation failed ({})", summarize(.issues))]
    Invalid {
        /// Category file name
        file: String,
        /// Issues that caused the rejection
        issues: Vec<ValidationIssue>,
    },

    /// Another file already supplied this category slug
    #[error("{file}: category slug '{slug}' already loaded from {existing}")]
    DuplicateSlug {
        /// Category file name
        file: String,
        /// The conflicting slug
        slug: String,
        /// File that supplied the slug first
        existing: String,
    },
}

fn summarize(issues: &[ValidationIssue]) -> String {
    match issues {
        [] => "no issues recorded".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first}; and {} more", rest.len()),
    }
}

// ============================================================================
// Index Errors
// ============================================================================

/// Fatal failures while building the question index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Discovery found none of the candidate files
    #[error("no question files found in {source_name}")]
    NoFiles {
        /// Human-readable description of the source
        source_name: String,
    },

    /// Every discovered file failed to load
    #[error("failed to load any question categories ({attempted} attempted)")]
    NoData {
        /// Number of files that were attempted
        attempted: usize,
    },
}

// ============================================================================
// Marketing Errors
// ============================================================================

/// Sitemap and UTM link generation errors.
#[derive(Debug, Error)]
pub enum MarketingError {
    /// A URL could not be parsed or resolved
    #[error("invalid URL in row {row}: {message}")]
    InvalidUrl {
        /// 1-based data row number (0 for non-row inputs such as the site URL)
        row: usize,
        /// Parser error message
        message: String,
    },
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found in a category file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Path to the problematic field (e.g., "questions.Novice[2]")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} at {}", self.severity, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Rejects the category file
    Error,
    /// Reported but does not reject the file
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `interview-guide` operations.
pub type Result<T> = std::result::Result<T, GuideError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::CONFIG_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::DATA_ERROR, 4);
        assert_eq!(ExitCode::MARKETING_ERROR, 5);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
        assert_eq!(ExitCode::INTERRUPTED, 130);
    }

    #[test]
    fn test_index_error_exit_code() {
        let err: GuideError = IndexError::NoData { attempted: 3 }.into();
        assert_eq!(err.exit_code(), ExitCode::DATA_ERROR);
    }

    #[test]
    fn test_config_error_exit_code() {
        let err: GuideError = ConfigError::MissingFile {
            path: PathBuf::from("/test"),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::CONFIG_ERROR);
    }

    #[test]
    fn test_marketing_error_exit_code() {
        let err: GuideError = MarketingError::InvalidUrl {
            row: 2,
            message: "relative URL without a base".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::MARKETING_ERROR);
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: GuideError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_usage_error_exit_code() {
        let err = GuideError::Usage("bad flag".to_string());
        assert_eq!(err.exit_code(), ExitCode::USAGE_ERROR);
    }

    #[test]
    fn test_validation_issue_display() {
        let issue = ValidationIssue {
            path: "questions.Novice[0]".to_string(),
            message: "question text is empty".to_string(),
            severity: Severity::Error,
        };
        assert_eq!(
            issue.to_string(),
            "error: question text is empty at questions.Novice[0]"
        );
    }

    #[test]
    fn test_validation_issue_warning_display() {
        let issue = ValidationIssue {
            path: "questions.Master".to_string(),
            message: "level has no questions".to_string(),
            severity: Severity::Warning,
        };
        assert_eq!(
            issue.to_string(),
            "warning: level has no questions at questions.Master"
        );
    }

    #[test]
    fn test_load_error_display() {
        let err = LoadError::HttpStatus {
            file: "q-rag.json".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "q-rag.json: HTTP 404");
    }

    #[test]
    fn test_invalid_load_error_summarizes_issues() {
        let issue = ValidationIssue {
            path: "category".to_string(),
            message: "category name is empty".to_string(),
            severity: Severity::Error,
        };
        let err = LoadError::Invalid {
            file: "q-bad.json".to_string(),
            issues: vec![issue.clone(), issue],
        };
        let text = err.to_string();
        assert!(text.contains("category name is empty"));
        assert!(text.contains("1 more"));
    }

    #[test]
    fn test_no_files_display() {
        let err = IndexError::NoFiles {
            source_name: "directory ./questions".to_string(),
        };
        assert!(err.to_string().contains("./questions"));
    }
}
