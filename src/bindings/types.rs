//! Type definitions for parsed API descriptions.
//!
//! These mirror the JSON emitted by raylib's `raylib_parser -f JSON`. Every
//! item carries the fields the emitter needs; a missing field is a schema
//! error rather than a silent default. Top-level collections that are absent
//! are treated as empty, and keys the emitter does not use (`defines`) are
//! ignored.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::BindgenError;

/// A parsed API description for one module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiDescription {
    /// Struct declarations
    #[serde(default)]
    pub structs: Vec<Struct>,

    /// Type aliases (`typedef A B;`)
    #[serde(default)]
    pub aliases: Vec<Alias>,

    /// Function-pointer typedefs
    #[serde(default)]
    pub callbacks: Vec<Callback>,

    /// Enumerations
    #[serde(default)]
    pub enums: Vec<Enum>,

    /// Exported functions
    #[serde(default)]
    pub functions: Vec<Function>,
}

impl ApiDescription {
    /// Load a description file.
    ///
    /// Fails with [`BindgenError::MissingInput`] when the file does not exist
    /// and [`BindgenError::MalformedInput`] when it is not valid JSON of the
    /// expected shape.
    pub fn load(path: &Path) -> Result<Self, BindgenError> {
        if !path.exists() {
            return Err(BindgenError::MissingInput {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| BindgenError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, path)
    }

    /// Parse description content. `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self, BindgenError> {
        serde_json::from_str(content).map_err(|source| BindgenError::MalformedInput {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Total number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.structs.len()
            + self.aliases.len()
            + self.callbacks.len()
            + self.enums.len()
            + self.functions.len()
    }
}

/// A C structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Struct {
    pub name: String,
    pub description: String,
    pub fields: Vec<Field>,
}

/// A struct field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub description: String,
}

/// A typedef re-binding one type under another name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alias {
    pub name: String,
    #[serde(rename = "type")]
    pub underlying_type: String,
    pub description: String,
}

/// A function-pointer typedef.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Callback {
    pub name: String,
    #[serde(rename = "returnType")]
    pub return_type: String,
    #[serde(default)]
    pub params: Vec<Param>,
    pub description: String,
}

/// A C enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,
    pub description: String,
    pub values: Vec<EnumValue>,
}

/// One enumerator with its literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub value: i64,
    pub description: String,
}

/// An exported C function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    #[serde(rename = "returnType")]
    pub return_type: String,
    #[serde(default)]
    pub params: Vec<Param>,
    pub description: String,
}

/// A function or callback parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
}

impl Param {
    /// Create a new parameter.
    pub fn new(name: impl Into<String>, param_type: impl Into<String>) -> Self {
        Param {
            name: name.into(),
            param_type: param_type.into(),
        }
    }
}
