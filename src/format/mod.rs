//! Document format detection and dispatch
//!
//! Every supported structured-data format implements [`DocumentFormat`] and is registered
//! with a [`FormatRegistry`]. Documents are always held in memory as a
//! [`serde_json::Value`] (with preserved key order), so a schema loaded from one format can
//! be embedded into a bundle written in another.
//!
//! ## Built-in Formats
//!
//! - **json**: `.json`, or content starting with `{` / `[`
//! - **toml**: `.toml`, or content that parses as a TOML table
//! - **yaml**: `.yaml` / `.yml`, and the fallback for anything else YAML accepts
//!
//! ## Detection
//!
//! The file extension wins when one is recognized (case-insensitive). Otherwise each
//! registered format is asked to [`sniff`](DocumentFormat::sniff) the content, in
//! registration order. YAML is a superset of JSON, so it is registered last.
//!
//! ## Adding a Format
//!
//! ```rust,ignore
//! #[derive(Debug)]
//! struct IniFormat;
//!
//! impl DocumentFormat for IniFormat {
//!     fn name(&self) -> &str { "ini" }
//!     fn extensions(&self) -> &[&str] { &["ini"] }
//!     fn sniff(&self, _content: &str) -> bool { false }
//!     fn parse(&self, content: &str, path: &Path) -> Result<Value> { todo!() }
//!     fn serialize(&self, value: &Value, path: &Path) -> Result<String> { todo!() }
//! }
//!
//! let mut registry = FormatRegistry::with_builtins();
//! registry.register(Box::new(IniFormat))?;
//! ```

pub mod json;
pub mod toml;
pub mod yaml;

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{self, BundlerError, Result};

pub use self::json::JsonFormat;
pub use self::toml::TomlFormat;
pub use self::yaml::YamlFormat;

pub trait DocumentFormat: Send + Sync + fmt::Debug {
    /// Unique identifier for this format (e.g., "json", "yaml")
    fn name(&self) -> &str;

    /// File extensions claimed by this format, lowercase and without the dot
    fn extensions(&self) -> &[&str];

    /// Whether `content` looks like a document of this format
    fn sniff(&self, content: &str) -> bool;

    /// Parse `content` read from `path`
    fn parse(&self, content: &str, path: &Path) -> Result<Value>;

    /// Serialize `value` for writing to `path`
    fn serialize(&self, value: &Value, path: &Path) -> Result<String>;

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions()
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }
}

/// Registry of known document formats
///
/// Formats are kept in registration order, which is also the order in which
/// content sniffing is attempted.
#[derive(Debug, Default)]
pub struct FormatRegistry {
    formats: Vec<Arc<dyn DocumentFormat>>,
}

impl FormatRegistry {
    /// Create a new empty format registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with JSON, TOML and YAML registered
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.formats.push(Arc::new(JsonFormat));
        registry.formats.push(Arc::new(TomlFormat));
        registry.formats.push(Arc::new(YamlFormat));
        registry
    }

    /// Register a format
    ///
    /// # Errors
    ///
    /// Returns `BundlerError::DuplicateFormat` if a format with the same name is
    /// already registered.
    #[allow(dead_code)]
    pub fn register(&mut self, format: Box<dyn DocumentFormat>) -> Result<()> {
        if self.get(format.name()).is_some() {
            return Err(BundlerError::DuplicateFormat {
                name: format.name().to_string(),
            });
        }
        self.formats.push(Arc::from(format));
        Ok(())
    }

    /// Get a format by name
    #[allow(dead_code)]
    pub fn get(&self, name: &str) -> Option<Arc<dyn DocumentFormat>> {
        self.formats.iter().find(|f| f.name() == name).cloned()
    }

    /// Names of all registered formats, in registration order
    #[allow(dead_code)]
    pub fn names(&self) -> Vec<&str> {
        self.formats.iter().map(|f| f.name()).collect()
    }

    /// Find the format claiming the extension of `path`
    pub fn by_extension(&self, path: &Path) -> Option<Arc<dyn DocumentFormat>> {
        self.formats
            .iter()
            .find(|f| f.matches_extension(path))
            .cloned()
    }

    /// Detect the format of `content` read from `path`
    pub fn detect(&self, path: &Path, content: &str) -> Result<Arc<dyn DocumentFormat>> {
        if let Some(format) = self.by_extension(path) {
            return Ok(format);
        }

        self.formats
            .iter()
            .find(|f| f.sniff(content))
            .cloned()
            .ok_or_else(|| error::format::unknown(path))
    }
}

/// Human-readable kind of a value, for error messages
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
