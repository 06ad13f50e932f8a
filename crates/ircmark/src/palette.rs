//! YAML palette files.
//!
//! A palette replaces the built-in tables. Both sections are ordered maps and
//! their order becomes the enumeration order:
//!
//! ```yaml
//! colors:
//!   red: "04"
//!   green: "09"
//! formats:
//!   bold: "\x02"
//!   clear: "\x0f"
//! ```
//!
//! Color codes may be quoted (`"04"`) or bare integers (`4`, `04`, `12`); bare
//! integers are zero-padded to two digits. Format codes are single
//! characters, usually written with `\x` escapes in double quotes.
//! Every entry goes through the same checks as [`RegistryBuilder::build`].

use std::path::Path;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::{Family, PaletteError};
use crate::registry::{Registry, RegistryBuilder};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteFile {
    #[serde(default)]
    colors: Mapping,
    #[serde(default)]
    formats: Mapping,
}

impl Registry {
    /// Builds a registry from palette YAML.
    ///
    /// ```rust
    /// use ircmark::Registry;
    ///
    /// let registry = Registry::from_palette_str(
    ///     "colors:\n  alert: \"04\"\nformats:\n  strong: \"\\x02\"\n",
    /// )
    /// .unwrap();
    /// assert_eq!(registry.lookup_color("alert").unwrap(), "\x0304");
    /// assert_eq!(registry.lookup_format("strong").unwrap(), '\x02');
    /// ```
    pub fn from_palette_str(yaml: &str) -> Result<Self, PaletteError> {
        let file: PaletteFile = serde_yaml::from_str(yaml)?;

        let mut builder = RegistryBuilder::new();
        for (name, code) in entries(&file.colors, Family::Color)? {
            builder = builder.color(name, code);
        }
        for (name, code) in entries(&file.formats, Family::Format)? {
            builder = builder.format_str(name, code);
        }

        let registry = builder.build()?;
        tracing::debug!(
            colors = file.colors.len(),
            formats = file.formats.len(),
            "loaded palette"
        );
        Ok(registry)
    }

    /// Reads and builds a registry from a palette file.
    pub fn from_palette_file(path: impl AsRef<Path>) -> Result<Self, PaletteError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| PaletteError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "reading palette");
        Self::from_palette_str(&yaml)
    }
}

/// Converts one section to string pairs, keeping file order.
fn entries(section: &Mapping, family: Family) -> Result<Vec<(String, String)>, PaletteError> {
    section
        .iter()
        .map(|(key, code)| match (key, code) {
            (Value::String(name), Value::String(code)) => Ok((name.clone(), code.clone())),
            // YAML reads `04` as a string but `12` as a number.
            (Value::String(name), Value::Number(n)) if family == Family::Color => match n.as_u64() {
                Some(n) => Ok((name.clone(), format!("{:02}", n))),
                None => Err(PaletteError::NotAString {
                    family,
                    entry: describe(key),
                }),
            },
            _ => Err(PaletteError::NotAString {
                family,
                entry: describe(key),
            }),
        })
        .collect()
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| "<unprintable>".to_string()),
    }
}
