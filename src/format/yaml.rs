//! YAML documents
//!
//! Scalars are resolved with YAML 1.2 core schema rules, so `8080` is a number,
//! `true` a boolean and `~` null. YAML 1.1 words like `yes`, `no`, `on` and `off`
//! stay strings rather than becoming booleans. Anchors, aliases and `<<` merge keys
//! are resolved on load; they are not reproduced on write. Tagged values such as
//! `!vault key` cannot be written back unchanged and are rejected.

use std::path::Path;

use serde_json::Value;

use crate::error::{self, Result};
use crate::format::DocumentFormat;

#[derive(Debug)]
pub struct YamlFormat;

impl DocumentFormat for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn sniff(&self, content: &str) -> bool {
        serde_yaml::from_str::<serde_yaml::Value>(content).is_ok()
    }

    fn parse(&self, content: &str, path: &Path) -> Result<Value> {
        let mut yaml: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| error::format::parse_failed(path, self.name(), e))?;
        yaml.apply_merge()
            .map_err(|e| error::format::parse_failed(path, self.name(), e))?;
        if let Some((tag, location)) = find_tag(&yaml, "") {
            return Err(error::format::parse_failed(
                path,
                self.name(),
                format!("tagged value `{tag}` at `{location}` is not supported"),
            ));
        }

        // Non-string keys become strings; null keys are rejected.
        serde_json::to_value(yaml)
            .map_err(|e| error::format::parse_failed(path, self.name(), e))
    }

    fn serialize(&self, value: &Value, path: &Path) -> Result<String> {
        serde_yaml::to_string(value)
            .map_err(|e| error::format::serialize_failed(path, self.name(), e))
    }
}

/// Tag and dotted location of the first tagged node in `value`
fn find_tag(value: &serde_yaml::Value, location: &str) -> Option<(String, String)> {
    match value {
        serde_yaml::Value::Tagged(tagged) => Some((tagged.tag.to_string(), location.to_string())),
        serde_yaml::Value::Sequence(items) => items
            .iter()
            .enumerate()
            .find_map(|(i, item)| find_tag(item, &format!("{location}[{i}]"))),
        serde_yaml::Value::Mapping(map) => map.iter().find_map(|(key, item)| {
            let name = match key {
                serde_yaml::Value::String(s) => s.clone(),
                other => serde_yaml::to_string(other)
                    .map(|s| s.trim_end().to_string())
                    .unwrap_or_default(),
            };
            let nested = if location.is_empty() {
                name
            } else {
                format!("{location}.{name}")
            };
            find_tag(key, &nested).or_else(|| find_tag(item, &nested))
        }),
        _ => None,
    }
}
