//! TOML documents
//!
//! TOML has no null, so a document containing one cannot be written back. Date-times
//! and non-finite floats have no counterpart in the in-memory tree and are rejected on
//! load, so a bundle holding one is never rewritten.

use std::path::Path;

use serde_json::{Map, Number, Value};

use crate::error::{self, Result};
use crate::format::DocumentFormat;

#[derive(Debug)]
pub struct TomlFormat;

impl DocumentFormat for TomlFormat {
    fn name(&self) -> &str {
        "toml"
    }

    fn extensions(&self) -> &[&str] {
        &["toml"]
    }

    fn sniff(&self, content: &str) -> bool {
        !content.trim().is_empty() && toml::from_str::<toml::Table>(content).is_ok()
    }

    fn parse(&self, content: &str, path: &Path) -> Result<Value> {
        let table: toml::Table = toml::from_str(content)
            .map_err(|e| error::format::parse_failed(path, self.name(), e))?;
        table_to_json(table, "")
            .map_err(|reason| error::format::parse_failed(path, self.name(), reason))
    }

    fn serialize(&self, value: &Value, path: &Path) -> Result<String> {
        if !value.is_object() {
            return Err(error::format::serialize_failed(
                path,
                self.name(),
                "top-level value must be a table",
            ));
        }
        if let Some(location) = find_null(value, "") {
            return Err(error::format::serialize_failed(
                path,
                self.name(),
                format!("null value at `{location}` has no TOML representation"),
            ));
        }
        toml::to_string_pretty(value)
            .map_err(|e| error::format::serialize_failed(path, self.name(), e))
    }
}

/// Dotted location of the first null in `value`
fn find_null(value: &Value, location: &str) -> Option<String> {
    match value {
        Value::Null => Some(location.to_string()),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .find_map(|(i, item)| find_null(item, &format!("{location}[{i}]"))),
        Value::Object(map) => map
            .iter()
            .find_map(|(key, item)| find_null(item, &child(location, key))),
        _ => None,
    }
}

fn child(location: &str, key: &str) -> String {
    if location.is_empty() {
        key.to_string()
    } else {
        format!("{location}.{key}")
    }
}

fn table_to_json(table: toml::Table, location: &str) -> std::result::Result<Value, String> {
    let mut map = Map::with_capacity(table.len());
    for (key, value) in table {
        let converted = toml_to_json(value, &child(location, &key))?;
        map.insert(key, converted);
    }
    Ok(Value::Object(map))
}

fn toml_to_json(value: toml::Value, location: &str) -> std::result::Result<Value, String> {
    Ok(match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => Value::Number(Number::from_f64(f).ok_or_else(|| {
            format!("non-finite float `{f}` at `{location}` is not supported")
        })?),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => {
            return Err(format!("date-time `{dt}` at `{location}` is not supported"));
        }
        toml::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| toml_to_json(item, &format!("{location}[{i}]")))
                .collect::<std::result::Result<_, _>>()?,
        ),
        toml::Value::Table(table) => table_to_json(table, location)?,
    })
}
