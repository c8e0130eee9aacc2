//! File system errors

use std::io::ErrorKind;
use std::path::Path;

use super::BundlerError;

/// Classifies a failed read, reporting a missing file separately
pub fn read_failed(path: &Path, err: &std::io::Error) -> BundlerError {
    if err.kind() == ErrorKind::NotFound {
        return BundlerError::FileNotFound {
            path: path.display().to_string(),
        };
    }

    BundlerError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a write error for `path`
pub fn write_failed(path: &Path, reason: impl ToString) -> BundlerError {
    BundlerError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
