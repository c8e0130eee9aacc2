//! Error types and handling for update-graphql-schema
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Errors fall into two categories, checked with [`BundlerError::is_io_error`] and
//! [`BundlerError::is_parse_error`]:
//! - [`fs`]: reading or writing a document failed
//! - [`format`]: a document could not be detected, parsed, serialized or merged

pub mod format;
pub mod fs;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for schema bundling operations
#[derive(Error, Diagnostic, Debug)]
pub enum BundlerError {
    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(
        code(bundler::fs::not_found),
        help("Check that the path is correct and the file exists")
    )]
    FileNotFound { path: String },

    #[error("Failed to read file {path}: {reason}")]
    #[diagnostic(code(bundler::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file {path}: {reason}")]
    #[diagnostic(code(bundler::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    // Format errors
    #[error("Failed to parse {format} document {path}: {reason}")]
    #[diagnostic(code(bundler::format::parse_failed))]
    ParseFailed {
        path: String,
        format: String,
        reason: String,
    },

    #[error("Failed to serialize {format} document {path}: {reason}")]
    #[diagnostic(
        code(bundler::format::serialize_failed),
        help("Not every value can be represented in every format (e.g. TOML has no null)")
    )]
    SerializeFailed {
        path: String,
        format: String,
        reason: String,
    },

    #[error("Unable to detect the format of {path}")]
    #[diagnostic(
        code(bundler::format::unknown),
        help("Supported formats: json (.json), yaml (.yaml, .yml), toml (.toml)")
    )]
    UnknownFormat { path: String },

    #[error("A format named '{name}' is already registered")]
    #[diagnostic(code(bundler::format::duplicate))]
    #[allow(dead_code)]
    DuplicateFormat { name: String },

    // Bundle errors
    #[error("Bundle {path} must be a mapping at the top level, found {found}")]
    #[diagnostic(
        code(bundler::bundle::not_mapping),
        help("A bundle needs a top-level mapping so the schema can be set under its key")
    )]
    BundleNotMapping { path: String, found: String },

    #[error("{count} bundle(s) out of date: {paths}")]
    #[diagnostic(
        code(bundler::bundle::out_of_date),
        help("Run again without --check to rewrite the bundles")
    )]
    OutOfDate { count: usize, paths: String },
}

impl BundlerError {
    /// Missing, unreadable or unwritable file
    #[allow(dead_code)]
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            BundlerError::FileNotFound { .. }
                | BundlerError::FileReadFailed { .. }
                | BundlerError::FileWriteFailed { .. }
        )
    }

    /// Malformed or unusable document content
    #[allow(dead_code)]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            BundlerError::ParseFailed { .. }
                | BundlerError::UnknownFormat { .. }
                | BundlerError::BundleNotMapping { .. }
        )
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BundlerError>;
