//! Front-matter parsing

use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::path::Path;

use super::error::{ContentError, ContentResult};

lazy_static! {
    static ref MISSING_FIELD: Regex = Regex::new(r"missing field `([^`]+)`").unwrap();
    static ref FIELD_PATH: Regex = Regex::new(r"^([A-Za-z0-9_\-\.\[\]]+): ").unwrap();
}

/// Placeholder used when an error cannot be attributed to a single field
const WHOLE_BLOCK: &str = "<front-matter>";

/// Front-matter block of a content file
///
/// Keeps the YAML source next to the parsed mapping: typed decoding goes
/// through the source text so serde_yaml can report the offending field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    mapping: Mapping,
    source: String,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse<'a>(content: &'a str, path: &Path) -> ContentResult<(Self, &'a str)> {
        let (yaml, body) = Self::split(content);
        let Some(yaml) = yaml else {
            return Ok((Self::default(), body));
        };

        if yaml.trim().is_empty() {
            return Ok((Self::default(), body));
        }

        let value: Value = serde_yaml::from_str(yaml).map_err(|source| ContentError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;

        let mapping = match value {
            Value::Mapping(mapping) => mapping,
            Value::Null => Mapping::new(),
            other => {
                return Err(ContentError::Validation {
                    path: path.to_path_buf(),
                    field: WHOLE_BLOCK.to_string(),
                    message: format!("expected a mapping, found {}", value_kind(&other)),
                })
            }
        };

        Ok((
            Self {
                mapping,
                source: yaml.to_string(),
            },
            body,
        ))
    }

    /// Split a content file into its YAML block and the markdown body
    ///
    /// Returns `None` for the YAML block when the file has no front-matter;
    /// the body is then the whole (left-trimmed) file.
    pub fn split(content: &str) -> (Option<&str>, &str) {
        let content = content.trim_start();

        let Some((opening, rest)) = content.split_once('\n') else {
            return (None, content);
        };
        if !is_fence(opening) {
            return (None, content);
        }

        let Some((yaml_end, body_start)) = closing_fence(rest) else {
            return (None, content);
        };

        let yaml = &rest[..yaml_end];
        let remaining = rest[body_start..].trim_start_matches(['\n', '\r']);

        if !yaml.trim().is_empty() && !looks_like_yaml(yaml) {
            // A thematic break, not front-matter
            return (None, content);
        }

        (Some(yaml), remaining)
    }

    /// Decode the block into a typed record
    ///
    /// Shape mismatches become [`ContentError::Validation`] naming the file
    /// and, where serde_yaml reports it, the offending field.
    pub fn decode<T: DeserializeOwned>(&self, path: &Path) -> ContentResult<T> {
        let source = if self.source.trim().is_empty() {
            "{}"
        } else {
            self.source.as_str()
        };

        serde_yaml::from_str(source).map_err(|e| validation_error(path, &e))
    }

    /// Get a top-level string field
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.mapping.get(key).and_then(Value::as_str)
    }

    /// Get a top-level scalar field as text
    ///
    /// Numbers and booleans are rendered the way YAML wrote them, so
    /// `slug: 2024` reads as `"2024"`. Sequences, mappings and null give
    /// `None`.
    pub fn get_scalar(&self, key: &str) -> Option<String> {
        match self.mapping.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

/// A fence line is exactly `---`
fn is_fence(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r']) == "---"
}

/// Byte range of the closing fence line: (end of YAML, start of body)
fn closing_fence(rest: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if is_fence(line) {
            return Some((offset, offset + line.len()));
        }
        offset += line.len();
    }
    None
}

/// Valid YAML front-matter should have at least one line with 'key: value' pattern
fn looks_like_yaml(block: &str) -> bool {
    block.lines().any(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }
        let Some(colon_pos) = trimmed.find(':') else {
            return false;
        };
        let key = &trimmed[..colon_pos];
        let is_valid_key = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            && !matches!(key, "http" | "https" | "ftp" | "mailto");
        let after_colon = &trimmed[colon_pos + 1..];
        is_valid_key && (after_colon.is_empty() || after_colon.starts_with(' '))
    })
}

fn validation_error(path: &Path, err: &serde_yaml::Error) -> ContentError {
    let message = err.to_string();

    let field = MISSING_FIELD
        .captures(&message)
        .or_else(|| FIELD_PATH.captures(&message))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| WHOLE_BLOCK.to_string());

    ContentError::Validation {
        path: path.to_path_buf(),
        field,
        message,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
