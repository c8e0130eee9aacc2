//! Embedding a schema document into bundle documents
//!
//! The schema file is parsed once. Each bundle is then, in the order given, loaded,
//! has its schema key set (replacing whatever was there) and is written back in the
//! format it was read in. The first error aborts the run: bundles already written stay
//! written and later bundles are not touched.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use crate::document::{Document, WriteMode};
use crate::error::{self, Result};
use crate::format::{FormatRegistry, value_kind};

/// Top-level bundle key the schema is stored under
pub const DEFAULT_KEY: &str = "graphql";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    pub key: String,
    pub write_mode: WriteMode,
    /// Compare only; fail if any bundle would change
    pub check: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            key: DEFAULT_KEY.to_string(),
            write_mode: WriteMode::InPlace,
            check: false,
        }
    }
}

/// Bundles processed by a run, split by whether their schema value changed
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub updated: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
}

/// Embed the schema at `schema_path` into every bundle using the built-in formats
pub fn run(
    schema_path: &Path,
    bundle_paths: &[PathBuf],
    options: &MergeOptions,
) -> Result<MergeSummary> {
    run_with_registry(
        schema_path,
        bundle_paths,
        options,
        &FormatRegistry::with_builtins(),
    )
}

pub fn run_with_registry(
    schema_path: &Path,
    bundle_paths: &[PathBuf],
    options: &MergeOptions,
    registry: &FormatRegistry,
) -> Result<MergeSummary> {
    let schema = Document::load(schema_path, registry)?.value;
    let mut summary = MergeSummary::default();

    for path in bundle_paths {
        let mut bundle = Document::load(path, registry)?;
        let changed = embed(&mut bundle, &options.key, &schema)?;

        if !options.check {
            bundle.store(options.write_mode)?;
        }

        if changed {
            info!(path = %path.display(), key = %options.key, "schema embedded");
            summary.updated.push(path.clone());
        } else {
            debug!(path = %path.display(), "schema already up to date");
            summary.unchanged.push(path.clone());
        }
    }

    if options.check && !summary.updated.is_empty() {
        return Err(error::format::out_of_date(&summary.updated));
    }

    Ok(summary)
}

/// Set `key` in the bundle's top-level mapping to `schema`
///
/// An existing entry keeps its position; a new entry is appended. Returns whether the
/// stored value changed.
pub fn embed(bundle: &mut Document, key: &str, schema: &Value) -> Result<bool> {
    let found = value_kind(&bundle.value);
    let Value::Object(map) = &mut bundle.value else {
        return Err(error::format::not_mapping(&bundle.path, found));
    };

    if map.get(key) == Some(schema) {
        return Ok(false);
    }
    map.insert(key.to_string(), schema.clone());
    Ok(true)
}
