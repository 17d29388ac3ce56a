//! Generation settings
//!
//! [`GenConfig`] carries everything the composer needs besides the document
//! itself. It can be built in code, loaded from a YAML or JSON file, or
//! assembled by the command-line front end.

use crate::error::{Error, Result};
use crate::naming::{is_go_identifier, type_name};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Struct tag keys: `xml`, `yaml`, `db`, `mapstructure`, ...
static TAG_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Go reserved words, which cannot be used as a package name
const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Default record name in map mode
pub const DEFAULT_STRUCT_NAME: &str = "Struct";

/// Default package name
pub const DEFAULT_PACKAGE: &str = "main";

// ============================================================================
// Generation Config
// ============================================================================

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenConfig {
    /// Name of the generated type (required)
    pub name: String,

    /// Name of the record type in map mode
    pub struct_name: String,

    /// Go package of the generated file
    pub package: String,

    /// Add an `encoding/json` import
    pub import_json: bool,

    /// Treat the document as `map[string]T` / `map[string][]T`
    pub map_type: bool,

    /// Extra struct tag keys repeating the `json` key
    pub tag_keys: Vec<String>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            struct_name: DEFAULT_STRUCT_NAME.to_string(),
            package: DEFAULT_PACKAGE.to_string(),
            import_json: false,
            map_type: false,
            tag_keys: Vec::new(),
        }
    }
}

impl GenConfig {
    /// Create a config for a type name, everything else defaulted
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the map-mode record name
    #[must_use]
    pub fn with_struct_name(mut self, name: impl Into<String>) -> Self {
        self.struct_name = name.into();
        self
    }

    /// Set the package name
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Enable/disable the `encoding/json` import
    #[must_use]
    pub fn with_import_json(mut self, enabled: bool) -> Self {
        self.import_json = enabled;
        self
    }

    /// Enable/disable map mode
    #[must_use]
    pub fn with_map_type(mut self, enabled: bool) -> Self {
        self.map_type = enabled;
        self
    }

    /// Set the extra tag keys
    #[must_use]
    pub fn with_tag_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Load a config from a YAML (or JSON) file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;
        Self::from_yaml(&content)
    }

    /// Parse a config from YAML text. JSON is accepted as well.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::config(format!("Invalid config file: {e}")))
    }

    /// Validate the settings and return them in canonical form.
    ///
    /// Type names are capitalized, the package is lower-cased and empty
    /// optional names fall back to their defaults.
    pub fn validated(&self) -> Result<Self> {
        let name = type_name(&self.name);
        if name.is_empty() {
            return Err(Error::missing_field("name"));
        }
        if !is_go_identifier(&name) {
            return Err(Error::invalid_value(
                "name",
                format!("'{name}' is not a valid Go identifier"),
            ));
        }

        let struct_name = match type_name(&self.struct_name) {
            s if s.is_empty() => DEFAULT_STRUCT_NAME.to_string(),
            s => s,
        };
        if !is_go_identifier(&struct_name) {
            return Err(Error::invalid_value(
                "struct_name",
                format!("'{struct_name}' is not a valid Go identifier"),
            ));
        }

        let package = match self.package.trim().to_lowercase() {
            p if p.is_empty() => DEFAULT_PACKAGE.to_string(),
            p => p,
        };
        if !is_go_identifier(&package) || GO_KEYWORDS.contains(&package.as_str()) {
            return Err(Error::invalid_value(
                "package",
                format!("'{package}' is not a valid Go package name"),
            ));
        }

        let mut seen = HashSet::new();
        for key in &self.tag_keys {
            if !TAG_KEY_REGEX.is_match(key) {
                return Err(Error::invalid_value(
                    "tag_keys",
                    format!("'{key}' is not a valid struct tag key"),
                ));
            }
            if key == "json" {
                return Err(Error::invalid_value(
                    "tag_keys",
                    "'json' is always written and must not be listed",
                ));
            }
            if !seen.insert(key.as_str()) {
                return Err(Error::invalid_value(
                    "tag_keys",
                    format!("'{key}' is listed more than once"),
                ));
            }
        }

        Ok(Self {
            name,
            struct_name,
            package,
            import_json: self.import_json,
            map_type: self.map_type,
            tag_keys: self.tag_keys.clone(),
        })
    }
}
