//! JSON documents

use std::path::Path;

use serde_json::Value;

use crate::error::{self, Result};
use crate::format::DocumentFormat;

/// JSON, written pretty-printed with two-space indentation
#[derive(Debug)]
pub struct JsonFormat;

impl DocumentFormat for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }

    fn sniff(&self, content: &str) -> bool {
        let trimmed = content.trim_start();
        (trimmed.starts_with('{') || trimmed.starts_with('['))
            && serde_json::from_str::<Value>(trimmed).is_ok()
    }

    fn parse(&self, content: &str, path: &Path) -> Result<Value> {
        serde_json::from_str(content).map_err(|e| error::format::parse_failed(path, self.name(), e))
    }

    fn serialize(&self, value: &Value, path: &Path) -> Result<String> {
        let mut out = serde_json::to_string_pretty(value)
            .map_err(|e| error::format::serialize_failed(path, self.name(), e))?;
        out.push('\n');
        Ok(out)
    }
}
