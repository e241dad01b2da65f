//! Layout configuration
//!
//! A layout is an ordered list of named fields plus a starting offset.
//! Sources, lowest priority first:
//! 1. Built-in defaults (offset 0, no fields)
//! 2. Layout file (`.yaml`/`.yml`, `.toml` or `.json`)
//! 3. `BINSPECT_*` environment variables
//!
//! Command-line flags are applied on top by the caller.

use std::path::Path;
use std::str::FromStr;

use binstream::DataType;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Layout errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Invalid field spec '{0}': expected name:type, name:type[count] or name:string[length]")]
    InvalidSpec(String),

    #[error("Field '{field}': unknown type '{kind}'")]
    UnknownType { field: String, kind: String },

    #[error("Field '{field}': type '{kind}' requires a length")]
    MissingLength { field: String, kind: String },

    #[error("Field '{field}': '{attribute}' does not apply to type '{kind}'")]
    UnexpectedAttribute {
        field: String,
        kind: String,
        attribute: &'static str,
    },

    #[error("Unsupported layout file extension: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to load layout: {0}")]
    Load(String),
}

/// What a field decodes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar(DataType),
    Array(DataType, usize),
    /// Fixed-length NUL-terminated UTF-8 text
    String(usize),
    /// Raw bytes, shown as hex
    Bytes(usize),
    /// Bytes stepped over without output
    Skip(usize),
}

/// One field as written in a layout file or on the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Element count for array fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Byte length for string, bytes and skip fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

impl FieldSpec {
    /// Resolve the textual type into a `FieldKind`
    ///
    /// Span types (`string`, `bytes`, `skip`) take `length` only; numeric
    /// types take an optional `count` only.
    pub fn resolve(&self) -> Result<FieldKind, LayoutError> {
        let kind = self.kind.trim().to_lowercase();
        let unexpected = |attribute| LayoutError::UnexpectedAttribute {
            field: self.name.clone(),
            kind: self.kind.clone(),
            attribute,
        };

        if matches!(kind.as_str(), "string" | "str" | "bytes" | "skip" | "pad") {
            if self.count.is_some() {
                return Err(unexpected("count"));
            }
            let length = self.length.ok_or_else(|| LayoutError::MissingLength {
                field: self.name.clone(),
                kind: self.kind.clone(),
            })?;
            return Ok(match kind.as_str() {
                "bytes" => FieldKind::Bytes(length),
                "skip" | "pad" => FieldKind::Skip(length),
                _ => FieldKind::String(length),
            });
        }

        let data_type = DataType::from_str(&kind).ok_or_else(|| LayoutError::UnknownType {
            field: self.name.clone(),
            kind: self.kind.clone(),
        })?;
        if self.length.is_some() {
            return Err(unexpected("length"));
        }
        Ok(match self.count {
            Some(count) => FieldKind::Array(data_type, count),
            None => FieldKind::Scalar(data_type),
        })
    }
}

impl FromStr for FieldSpec {
    type Err = LayoutError;

    /// Parse `name:type`, `name:type[count]`, `name:string[length]`,
    /// `name:bytes[length]` or `name:skip[length]`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LayoutError::InvalidSpec(s.to_string());

        let (name, kind) = s.split_once(':').ok_or_else(invalid)?;
        let (name, kind) = (name.trim(), kind.trim());
        if name.is_empty() || kind.is_empty() {
            return Err(invalid());
        }

        let (kind, size) = match kind.split_once('[') {
            Some((kind, rest)) => {
                let size = rest
                    .strip_suffix(']')
                    .and_then(|n| n.trim().parse::<usize>().ok())
                    .ok_or_else(invalid)?;
                (kind.trim(), Some(size))
            },
            None => (kind, None),
        };

        let is_span = matches!(
            kind.to_lowercase().as_str(),
            "string" | "str" | "bytes" | "skip" | "pad"
        );
        let spec = FieldSpec {
            name: name.to_string(),
            kind: kind.to_string(),
            count: if is_span { None } else { size },
            length: if is_span { size } else { None },
        };
        spec.resolve()?;
        Ok(spec)
    }
}

/// Decoding layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Byte offset of the first field
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl Layout {
    /// Load the layout from defaults, an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self, LayoutError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Layout::default()));

        if let Some(path) = path {
            // figment treats a missing file as an empty source
            if !path.is_file() {
                return Err(LayoutError::Load(format!(
                    "{} does not exist",
                    path.display()
                )));
            }
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_lowercase)
                .unwrap_or_default();
            figment = match ext.as_str() {
                "yaml" | "yml" => figment.merge(Yaml::file(path)),
                "toml" => figment.merge(Toml::file(path)),
                "json" => figment.merge(Json::file(path)),
                _ => return Err(LayoutError::UnsupportedFormat(path.display().to_string())),
            };
        }

        let layout: Layout = figment
            .merge(Env::prefixed("BINSPECT_").only(&["offset"]))
            .extract()
            .map_err(|e| LayoutError::Load(e.to_string()))?;

        for field in &layout.fields {
            field.resolve()?;
        }
        Ok(layout)
    }

    /// Apply command-line overrides: `offset` replaces the loaded offset and
    /// `fields` are appended after the loaded fields
    pub fn apply_overrides(&mut self, offset: Option<usize>, fields: Vec<FieldSpec>) {
        if let Some(offset) = offset {
            self.offset = offset;
        }
        self.fields.extend(fields);
    }
}
