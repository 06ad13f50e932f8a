//! Lookup and palette errors.

use std::fmt;
use std::path::PathBuf;

/// Which table a directive name was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Color,
    Format,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Color => f.write_str("color"),
            Family::Format => f.write_str("format"),
        }
    }
}

/// A directive name that is not registered in the table it was looked up in.
///
/// This is the only failure of [`render`](crate::render) and
/// [`resolve`](crate::resolve). The message wording depends on the family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveNotFound {
    /// The name as it was written, after trimming.
    pub name: String,
    /// The table that missed.
    pub family: Family,
}

impl DirectiveNotFound {
    pub(crate) fn new(name: &str, family: Family) -> Self {
        Self {
            name: name.to_string(),
            family,
        }
    }
}

impl fmt::Display for DirectiveNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.family {
            Family::Color => write!(f, "{} not in the list of available colours", self.name),
            Family::Format => write!(
                f,
                "{} not found in the list of available formats",
                self.name
            ),
        }
    }
}

impl std::error::Error for DirectiveNotFound {}

/// Error returned when a palette file cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    /// The palette file could not be read.
    #[error("failed to read palette '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The palette is not valid YAML or has the wrong shape.
    #[error("invalid palette: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A key or value in the palette is not a string.
    #[error("{family} entry {entry} must map a string name to a string code")]
    NotAString { family: Family, entry: String },

    /// A name cannot be written inside `$(...)`.
    #[error("invalid {family} name '{name}': {reason}")]
    InvalidName {
        family: Family,
        name: String,
        reason: &'static str,
    },

    /// A code does not have the fixed width its family requires.
    #[error("invalid {family} code {code:?} for '{name}': {reason}")]
    InvalidCode {
        family: Family,
        name: String,
        code: String,
        reason: &'static str,
    },

    /// The same name appears twice in one family.
    #[error("duplicate {family} name '{name}'")]
    Duplicate { family: Family, name: String },

    /// The palette defines no colors, so `random` has nothing to pick from.
    #[error("palette defines no colors")]
    NoColors,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_not_found_display() {
        let err = DirectiveNotFound::new("cake", Family::Color);
        assert_eq!(err.to_string(), "cake not in the list of available colours");
    }

    #[test]
    fn test_format_not_found_display() {
        let err = DirectiveNotFound::new("cake", Family::Format);
        assert_eq!(
            err.to_string(),
            "cake not found in the list of available formats"
        );
    }

    #[test]
    fn test_not_found_keeps_name_and_family() {
        let err = DirectiveNotFound::new("fake", Family::Format);
        assert_eq!(err.name, "fake");
        assert_eq!(err.family, Family::Format);
    }

    #[test]
    fn test_family_display() {
        assert_eq!(Family::Color.to_string(), "color");
        assert_eq!(Family::Format.to_string(), "format");
    }

    #[test]
    fn test_palette_error_display() {
        let err = PaletteError::InvalidCode {
            family: Family::Color,
            name: "red".to_string(),
            code: "4".to_string(),
            reason: "expected two digits",
        };
        let msg = err.to_string();
        assert!(msg.contains("color"));
        assert!(msg.contains("red"));
        assert!(msg.contains("two digits"));

        let err = PaletteError::Duplicate {
            family: Family::Format,
            name: "bold".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate format name 'bold'");
    }
}
