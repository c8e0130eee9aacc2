//! Format and bundle content errors

use std::path::Path;

use super::BundlerError;

pub fn parse_failed(path: &Path, format: &str, reason: impl ToString) -> BundlerError {
    BundlerError::ParseFailed {
        path: path.display().to_string(),
        format: format.to_string(),
        reason: reason.to_string(),
    }
}

pub fn serialize_failed(path: &Path, format: &str, reason: impl ToString) -> BundlerError {
    BundlerError::SerializeFailed {
        path: path.display().to_string(),
        format: format.to_string(),
        reason: reason.to_string(),
    }
}

pub fn unknown(path: &Path) -> BundlerError {
    BundlerError::UnknownFormat {
        path: path.display().to_string(),
    }
}

pub fn not_mapping(path: &Path, found: &str) -> BundlerError {
    BundlerError::BundleNotMapping {
        path: path.display().to_string(),
        found: found.to_string(),
    }
}

/// Lists every stale bundle in one error
pub fn out_of_date<P: AsRef<Path>>(paths: &[P]) -> BundlerError {
    BundlerError::OutOfDate {
        count: paths.len(),
        paths: paths
            .iter()
            .map(|p| p.as_ref().display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    }
}
