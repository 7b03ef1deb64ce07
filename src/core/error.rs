//! Error handling for deptree
//!
//! The reconciliation core never fails: ignorable snapshot input is skipped
//! and logged. Errors only arise at the boundary, when configuration,
//! catalogs and snapshots are loaded or when CLI arguments are invalid.
//!
//! # Architecture
//!
//! - [`DeptreeError`] - Enumerated error types for every boundary failure
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! Use [`user_friendly_error`] to convert any [`anyhow::Error`] into a
//! user-friendly format with contextual suggestions.
//!
//! # Examples
//!
//! ```rust,no_run
//! use deptree_cli::core::{DeptreeError, ErrorContext, user_friendly_error};
//!
//! let error = DeptreeError::InvalidFormat {
//!     format: "yaml".to_string(),
//! };
//! let context = ErrorContext::new(error).with_suggestion("Use one of: tree, json, text");
//! context.display();
//!
//! let friendly = user_friendly_error(anyhow::anyhow!("something went wrong"));
//! eprintln!("{friendly}");
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for deptree operations.
///
/// # Error Categories
///
/// ## Input Files
/// - [`SnapshotParseError`] - A snapshot file is not a valid project update
/// - [`CatalogParseError`] - A catalog file is not a valid rule catalog
/// - [`ConfigParseError`] - A provider configuration file is not valid TOML
///
/// ## Validation
/// - [`ConfigValidationError`] - Configuration content is inconsistent
/// - [`InvalidFormat`] - Unknown output format requested
///
/// ## System
/// - [`Other`] - Anything else
///
/// [`SnapshotParseError`]: DeptreeError::SnapshotParseError
/// [`CatalogParseError`]: DeptreeError::CatalogParseError
/// [`ConfigParseError`]: DeptreeError::ConfigParseError
/// [`ConfigValidationError`]: DeptreeError::ConfigValidationError
/// [`InvalidFormat`]: DeptreeError::InvalidFormat
/// [`Other`]: DeptreeError::Other
#[derive(Error, Debug, Clone)]
pub enum DeptreeError {
    /// Snapshot JSON could not be parsed into a project update.
    #[error("Invalid snapshot file {file}: {reason}")]
    SnapshotParseError {
        /// Path of the snapshot file
        file: String,
        /// Parser message
        reason: String,
    },

    /// Catalog JSON could not be parsed.
    #[error("Invalid catalog file {file}: {reason}")]
    CatalogParseError {
        /// Path of the catalog file
        file: String,
        /// Parser message
        reason: String,
    },

    /// Provider configuration TOML could not be parsed.
    #[error("Invalid provider configuration {file}: {reason}")]
    ConfigParseError {
        /// Path of the configuration file
        file: String,
        /// Parser message
        reason: String,
    },

    /// Provider configuration parsed but is inconsistent.
    #[error("Provider configuration validation failed: {reason}")]
    ConfigValidationError {
        /// What is wrong with the configuration
        reason: String,
    },

    /// An output format that the CLI does not know.
    #[error("Invalid output format: {format}")]
    InvalidFormat {
        /// The requested format
        format: String,
    },

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

/// Error wrapper that pairs a [`DeptreeError`] with guidance for the user.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: DeptreeError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context without suggestions or details.
    #[must_use]
    pub const fn new(error: DeptreeError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with suggestions.
///
/// Known error types found anywhere in the `anyhow` chain are mapped to a
/// specific [`DeptreeError`]. Everything else becomes
/// [`DeptreeError::Other`] carrying the full chain as its message.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(deptree_error) = error.downcast_ref::<DeptreeError>() {
        return create_error_context(deptree_error.clone());
    }

    for cause in error.chain() {
        if let Some(io_error) = cause.downcast_ref::<std::io::Error>() {
            match io_error.kind() {
                std::io::ErrorKind::NotFound => {
                    return ErrorContext::new(DeptreeError::Other {
                        message: format!("{error:#}"),
                    })
                    .with_suggestion("Check that the file exists and the path is correct");
                }
                std::io::ErrorKind::PermissionDenied => {
                    return ErrorContext::new(DeptreeError::Other {
                        message: format!("{error:#}"),
                    })
                    .with_suggestion("Check the file permissions");
                }
                _ => {}
            }
        }

        if let Some(json_error) = cause.downcast_ref::<serde_json::Error>() {
            return ErrorContext::new(DeptreeError::Other {
                message: format!("{error:#}"),
            })
            .with_suggestion("Check the JSON syntax of the snapshot or catalog file")
            .with_details(format!(
                "Parsing stopped at line {}, column {}",
                json_error.line(),
                json_error.column()
            ));
        }

        if cause.downcast_ref::<toml::de::Error>().is_some() {
            return ErrorContext::new(DeptreeError::Other {
                message: format!("{error:#}"),
            })
            .with_suggestion(
                "Check the TOML syntax of the provider configuration. Verify quotes and brackets",
            );
        }
    }

    ErrorContext::new(DeptreeError::Other {
        message: format!("{error:#}"),
    })
}

fn create_error_context(error: DeptreeError) -> ErrorContext {
    match &error {
        DeptreeError::SnapshotParseError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Snapshots need a top-level \"ProjectChanges\" object keyed by rule name")
            .with_details("AnyChanges may be a boolean or the string \"true\"/\"false\""),
        DeptreeError::CatalogParseError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("A catalog is a JSON object mapping rule names to item types"),
        DeptreeError::ConfigParseError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the TOML syntax of the provider configuration"),
        DeptreeError::ConfigValidationError {
            ..
        } => ErrorContext::new(error).with_suggestion(
            "Each rule may be listed as resolved or unresolved, but not both",
        ),
        DeptreeError::InvalidFormat {
            ..
        } => ErrorContext::new(error).with_suggestion("Valid formats are: tree, json, text"),
        _ => ErrorContext::new(error),
    }
}
