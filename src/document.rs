//! Loading and storing structured documents
//!
//! A [`Document`] remembers the format it was read in, so storing it writes the same
//! format back to the same path.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{self, Result};
use crate::format::{DocumentFormat, FormatRegistry};

/// How a document is written back to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Truncate and rewrite the file directly
    #[default]
    InPlace,
    /// Write a sibling temporary file, then rename it over the original
    Atomic,
}

#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub format: Arc<dyn DocumentFormat>,
    pub value: Value,
}

impl Document {
    /// Read `path`, detect its format and parse it
    pub fn load(path: &Path, registry: &FormatRegistry) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| error::fs::read_failed(path, &e))?;
        let format = registry.detect(path, &content)?;
        let value = format.parse(&content, path)?;

        debug!(path = %path.display(), format = format.name(), "loaded document");

        Ok(Self {
            path: path.to_path_buf(),
            format,
            value,
        })
    }

    /// Serialize the value in the document's own format
    pub fn render(&self) -> Result<String> {
        self.format.serialize(&self.value, &self.path)
    }

    /// Serialize and write the document back to its path
    ///
    /// The content is fully rendered before the file is touched, so a serialization
    /// error leaves the file as it was.
    pub fn store(&self, mode: WriteMode) -> Result<()> {
        let content = self.render()?;
        match mode {
            WriteMode::InPlace => write_in_place(&self.path, &content),
            WriteMode::Atomic => write_atomic(&self.path, &content),
        }
    }
}

fn write_in_place(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| error::fs::write_failed(path, e))
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // The original must exist; keep its permissions on the replacement.
    let permissions = fs::metadata(path)
        .map_err(|e| error::fs::write_failed(path, e))?
        .permissions();

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| error::fs::write_failed(path, e))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| error::fs::write_failed(path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| error::fs::write_failed(path, e))?;
    fs::set_permissions(tmp.path(), permissions).map_err(|e| error::fs::write_failed(path, e))?;

    tmp.persist(path)
        .map_err(|e| error::fs::write_failed(path, e.error))?;
    Ok(())
}
