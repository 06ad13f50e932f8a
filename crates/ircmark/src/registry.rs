//! Name tables for color and format directives.
//!
//! A [`Registry`] maps directive names to IRC control codes. It holds two
//! independent families:
//!
//! - **colors**: a name maps to a two-digit code (`red` -> `"04"`). Written
//!   into text after the color introducer `\x03`.
//! - **formats**: a name maps to a single control character
//!   (`bold` -> `'\x02'`).
//!
//! Both tables keep registration order, which is the order [`Registry::colors`]
//! and [`Registry::formats`] enumerate names in. Lookups are exact and
//! case-sensitive. The pseudo-color `random` is never stored; it is answered
//! by picking one registered color uniformly at lookup time.
//!
//! A registry is immutable once built. Use [`Registry::standard`] for the
//! built-in IRC tables, [`Registry::builder`] to assemble custom tables, or
//! [`Registry::from_palette_file`](crate::Registry::from_palette_file) to load
//! them from YAML.

use std::collections::HashMap;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::{DirectiveNotFound, Family, PaletteError};

/// Byte that starts a color control sequence.
pub const COLOR_INTRODUCER: char = '\x03';

/// Pseudo-color resolved to a uniformly chosen registered color.
pub const RANDOM_COLOR: &str = "random";

/// The built-in IRC color table, in enumeration order.
pub const STANDARD_COLORS: &[(&str, &str)] = &[
    ("white", "00"),
    ("black", "01"),
    ("dark_blue", "02"),
    ("dark_green", "03"),
    ("red", "04"),
    ("brown", "05"),
    ("purple", "06"),
    ("orange", "07"),
    ("yellow", "08"),
    ("green", "09"),
    ("cyan", "10"),
    ("light_cyan", "11"),
    ("blue", "12"),
    ("pink", "13"),
    ("dark_grey", "14"),
    ("light_grey", "15"),
];

/// The built-in IRC format table, in enumeration order.
pub const STANDARD_FORMATS: &[(&str, char)] = &[
    ("bold", '\x02'),
    ("italic", '\x1d'),
    ("underline", '\x1f'),
    ("reverse", '\x16'),
    ("clear", '\x0f'),
];

/// A registered color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    pub name: String,
    /// Two ASCII digits, without the introducer.
    pub code: String,
}

impl ColorEntry {
    /// The code with [`COLOR_INTRODUCER`] prepended.
    pub fn escaped(&self) -> String {
        format!("{}{}", COLOR_INTRODUCER, self.code)
    }
}

/// A registered format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatEntry<'a> {
    pub name: &'a str,
    pub code: char,
}

/// Whether a color lookup returns the bare digits or the escaped sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CodeForm {
    /// `"\x0304"`
    #[default]
    Escaped,
    /// `"04"`
    Raw,
}

/// Immutable color and format tables.
///
/// # Example
///
/// ```rust
/// use ircmark::{CodeForm, Registry};
///
/// let registry = Registry::standard();
/// assert_eq!(registry.lookup_color("red").unwrap(), "\x0304");
/// assert_eq!(registry.lookup_color_as("red", CodeForm::Raw).unwrap(), "04");
/// assert_eq!(registry.lookup_format("bold").unwrap(), '\x02');
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    colors: Vec<ColorEntry>,
    color_index: HashMap<String, usize>,
    formats: Vec<(String, char)>,
    format_index: HashMap<String, usize>,
}

impl Registry {
    /// Builds the standard IRC tables.
    pub fn standard() -> Self {
        let colors = STANDARD_COLORS
            .iter()
            .map(|(name, code)| (name.to_string(), code.to_string()))
            .collect();
        let formats = STANDARD_FORMATS
            .iter()
            .map(|(name, code)| (name.to_string(), *code))
            .collect();
        Self::from_tables(colors, formats)
    }

    /// Starts an empty builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Assembles a registry from already validated tables.
    fn from_tables(colors: Vec<(String, String)>, formats: Vec<(String, char)>) -> Self {
        let colors: Vec<ColorEntry> = colors
            .into_iter()
            .map(|(name, code)| ColorEntry { name, code })
            .collect();
        let color_index = colors
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.name.clone(), i))
            .collect();
        let format_index = formats
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (name.clone(), i))
            .collect();
        Self {
            colors,
            color_index,
            formats,
            format_index,
        }
    }

    /// Color names in registration order.
    pub fn colors(&self) -> impl Iterator<Item = &str> + '_ {
        self.colors.iter().map(|entry| entry.name.as_str())
    }

    /// Format names in registration order.
    pub fn formats(&self) -> impl Iterator<Item = &str> + '_ {
        self.formats.iter().map(|(name, _)| name.as_str())
    }

    /// Registered colors in registration order.
    pub fn color_entries(&self) -> &[ColorEntry] {
        &self.colors
    }

    /// Registered formats in registration order.
    pub fn format_entries(&self) -> impl Iterator<Item = FormatEntry<'_>> + '_ {
        self.formats.iter().map(|(name, code)| FormatEntry {
            name: name.as_str(),
            code: *code,
        })
    }

    /// Returns true if `name` is a registered color or `random`.
    pub fn has_color(&self, name: &str) -> bool {
        name == RANDOM_COLOR || self.color_index.contains_key(name)
    }

    /// Returns true if `name` is a registered format.
    pub fn has_format(&self, name: &str) -> bool {
        self.format_index.contains_key(name)
    }

    /// Looks up a color and returns it escaped (`"\x0304"`).
    pub fn lookup_color(&self, name: &str) -> Result<String, DirectiveNotFound> {
        self.lookup_color_as(name, CodeForm::Escaped)
    }

    /// Looks up a color in the requested form.
    ///
    /// `random` picks a registered color uniformly using the thread RNG.
    pub fn lookup_color_as(&self, name: &str, form: CodeForm) -> Result<String, DirectiveNotFound> {
        self.lookup_color_with_rng(name, form, &mut rand::rng())
    }

    /// Like [`lookup_color_as`](Self::lookup_color_as) with an explicit
    /// random source for `random`.
    pub fn lookup_color_with_rng<R: Rng + ?Sized>(
        &self,
        name: &str,
        form: CodeForm,
        rng: &mut R,
    ) -> Result<String, DirectiveNotFound> {
        let entry = self.color_entry(name, rng)?;
        Ok(match form {
            CodeForm::Escaped => entry.escaped(),
            CodeForm::Raw => entry.code.clone(),
        })
    }

    /// Raw two-digit code of a color, without the introducer.
    pub fn color_code(&self, name: &str) -> Result<&str, DirectiveNotFound> {
        self.color_entry(name, &mut rand::rng())
            .map(|entry| entry.code.as_str())
    }

    fn color_entry<R: Rng + ?Sized>(
        &self,
        name: &str,
        rng: &mut R,
    ) -> Result<&ColorEntry, DirectiveNotFound> {
        let entry = if name == RANDOM_COLOR {
            self.colors.choose(rng)
        } else {
            self.color_index.get(name).map(|&i| &self.colors[i])
        };
        entry.ok_or_else(|| {
            tracing::debug!(name, "color lookup missed");
            DirectiveNotFound::new(name, Family::Color)
        })
    }

    /// Looks up a format control character.
    pub fn lookup_format(&self, name: &str) -> Result<char, DirectiveNotFound> {
        match self.format_index.get(name) {
            Some(&i) => Ok(self.formats[i].1),
            None => {
                tracing::debug!(name, "format lookup missed");
                Err(DirectiveNotFound::new(name, Family::Format))
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Collects and validates entries for a [`Registry`].
///
/// Entries are checked when [`build`](Self::build) is called, so a builder
/// can be filled from untrusted input and fail with one descriptive error.
///
/// # Example
///
/// ```rust
/// use ircmark::Registry;
///
/// let registry = Registry::builder()
///     .color("alert", "04")
///     .color("calm", "12")
///     .format("strong", '\x02')
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.colors().collect::<Vec<_>>(), ["alert", "calm"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    colors: Vec<(String, String)>,
    formats: Vec<(String, String)>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a color with its two-digit code.
    pub fn color(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.colors.push((name.into(), code.into()));
        self
    }

    /// Adds a format with its control character.
    pub fn format(mut self, name: impl Into<String>, code: char) -> Self {
        self.formats.push((name.into(), code.to_string()));
        self
    }

    /// Adds a format whose code is given as a string of exactly one character.
    pub(crate) fn format_str(mut self, name: String, code: String) -> Self {
        self.formats.push((name, code));
        self
    }

    /// Validates all entries and builds the registry.
    pub fn build(self) -> Result<Registry, PaletteError> {
        if self.colors.is_empty() {
            return Err(PaletteError::NoColors);
        }

        let mut colors = Vec::with_capacity(self.colors.len());
        for (name, code) in self.colors {
            validate_name(&name, Family::Color)?;
            if name == RANDOM_COLOR {
                return Err(PaletteError::InvalidName {
                    family: Family::Color,
                    name,
                    reason: "'random' is reserved",
                });
            }
            if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_digit()) {
                return Err(PaletteError::InvalidCode {
                    family: Family::Color,
                    name,
                    code,
                    reason: "expected exactly two digits",
                });
            }
            if colors.iter().any(|(existing, _)| *existing == name) {
                return Err(PaletteError::Duplicate {
                    family: Family::Color,
                    name,
                });
            }
            colors.push((name, code));
        }

        let mut formats: Vec<(String, char)> = Vec::with_capacity(self.formats.len());
        for (name, code) in self.formats {
            validate_name(&name, Family::Format)?;
            let mut chars = code.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => {
                    return Err(PaletteError::InvalidCode {
                        family: Family::Format,
                        name,
                        code,
                        reason: "expected exactly one character",
                    })
                }
            };
            if formats.iter().any(|(existing, _)| *existing == name) {
                return Err(PaletteError::Duplicate {
                    family: Family::Format,
                    name,
                });
            }
            formats.push((name, ch));
        }

        Ok(Registry::from_tables(colors, formats))
    }
}

/// Rejects names that could never be matched inside `$(...)`.
fn validate_name(name: &str, family: Family) -> Result<(), PaletteError> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.trim() != name {
        "name has surrounding whitespace"
    } else if name.contains([',', '(', ')']) {
        "name contains ',', '(' or ')'"
    } else {
        return Ok(());
    };
    Err(PaletteError::InvalidName {
        family,
        name: name.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_standard_lists_in_order() {
        let registry = Registry::standard();
        let colors: Vec<_> = registry.colors().collect();
        assert_eq!(colors.first(), Some(&"white"));
        assert_eq!(colors.len(), STANDARD_COLORS.len());
        assert!(colors.contains(&"dark_grey"));

        let formats: Vec<_> = registry.formats().collect();
        assert_eq!(formats, ["bold", "italic", "underline", "reverse", "clear"]);
    }

    #[test]
    fn test_lookup_color_forms() {
        let registry = Registry::standard();
        assert_eq!(registry.lookup_color("red").unwrap(), "\x0304");
        assert_eq!(
            registry.lookup_color_as("red", CodeForm::Raw).unwrap(),
            "04"
        );
        assert_eq!(registry.color_code("green").unwrap(), "09");
    }

    #[test]
    fn test_escaped_and_raw_agree_for_every_color() {
        let registry = Registry::standard();
        for entry in registry.color_entries() {
            let escaped = registry.lookup_color(&entry.name).unwrap();
            let raw = registry
                .lookup_color_as(&entry.name, CodeForm::Raw)
                .unwrap();
            assert_eq!(escaped, format!("\x03{}", raw));
        }
    }

    #[test]
    fn test_lookup_color_is_case_sensitive() {
        let registry = Registry::standard();
        let err = registry.lookup_color("Red").unwrap_err();
        assert_eq!(err.name, "Red");
        assert_eq!(err.family, Family::Color);
    }

    #[test]
    fn test_lookup_color_missing() {
        let err = Registry::standard().lookup_color("cake").unwrap_err();
        assert!(err
            .to_string()
            .contains("not in the list of available colours"));
    }

    #[test]
    fn test_lookup_format_missing() {
        let err = Registry::standard().lookup_format("cake").unwrap_err();
        assert_eq!(err.family, Family::Format);
        assert!(err
            .to_string()
            .contains("not found in the list of available formats"));
    }

    #[test]
    fn test_random_color_comes_from_table() {
        let registry = Registry::standard();
        let escaped: Vec<String> = registry.color_entries().iter().map(|e| e.escaped()).collect();
        let raw: Vec<&str> = registry.color_entries().iter().map(|e| e.code.as_str()).collect();

        for _ in 0..64 {
            assert!(escaped.contains(&registry.lookup_color("random").unwrap()));
            let code = registry.lookup_color_as("random", CodeForm::Raw).unwrap();
            assert!(raw.contains(&code.as_str()));
        }
    }

    #[test]
    fn test_random_color_with_seeded_rng_is_deterministic() {
        let registry = Registry::standard();
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..8 {
            assert_eq!(
                registry.lookup_color_with_rng("random", CodeForm::Raw, &mut a),
                registry.lookup_color_with_rng("random", CodeForm::Raw, &mut b)
            );
        }
    }

    #[test]
    fn test_random_is_not_a_format() {
        let registry = Registry::standard();
        assert!(registry.has_color("random"));
        assert!(!registry.has_format("random"));
        assert!(registry.lookup_format("random").is_err());
    }

    #[test]
    fn test_standard_tables_pass_validation() {
        let mut builder = Registry::builder();
        for (name, code) in STANDARD_COLORS {
            builder = builder.color(*name, *code);
        }
        for (name, code) in STANDARD_FORMATS {
            builder = builder.format(*name, *code);
        }
        let built = builder.build().unwrap();
        assert!(built.colors().eq(Registry::standard().colors()));
        assert!(built.formats().eq(Registry::standard().formats()));
    }

    #[test]
    fn test_builder_keeps_registration_order() {
        let registry = Registry::builder()
            .color("zeta", "01")
            .color("alpha", "02")
            .format("loud", '\x02')
            .build()
            .unwrap();
        assert_eq!(registry.colors().collect::<Vec<_>>(), ["zeta", "alpha"]);
        assert_eq!(registry.lookup_color("alpha").unwrap(), "\x0302");
        assert_eq!(registry.lookup_format("loud").unwrap(), '\x02');
    }

    #[test]
    fn test_builder_rejects_bad_color_code() {
        let err = Registry::builder().color("red", "4").build().unwrap_err();
        assert!(matches!(err, PaletteError::InvalidCode { .. }));

        let err = Registry::builder().color("red", "a4").build().unwrap_err();
        assert!(matches!(err, PaletteError::InvalidCode { .. }));
    }

    #[test]
    fn test_builder_rejects_reserved_and_unmatchable_names() {
        let err = Registry::builder().color("random", "04").build().unwrap_err();
        assert!(matches!(err, PaletteError::InvalidName { .. }));

        for name in ["", " red", "re,d", "re)d"] {
            let err = Registry::builder().color(name, "04").build().unwrap_err();
            assert!(
                matches!(err, PaletteError::InvalidName { .. }),
                "{:?} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_builder_rejects_duplicates() {
        let err = Registry::builder()
            .color("red", "04")
            .color("red", "05")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            PaletteError::Duplicate {
                family: Family::Color,
                ..
            }
        ));
    }

    #[test]
    fn test_builder_requires_a_color() {
        let err = Registry::builder()
            .format("bold", '\x02')
            .build()
            .unwrap_err();
        assert!(matches!(err, PaletteError::NoColors));
    }

    #[test]
    fn test_builder_rejects_multi_char_format() {
        let err = Registry::builder()
            .color("red", "04")
            .format_str("bold".to_string(), "\x02\x02".to_string())
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            PaletteError::InvalidCode {
                family: Family::Format,
                ..
            }
        ));
    }
}
