//! Resolution of a single directive body to control codes.
//!
//! The body is the text between `$(` and `)`. It is split on `,` and each
//! name is trimmed, then:
//!
//! | Body              | Output                                   |
//! |-------------------|------------------------------------------|
//! | `red`             | `\x0304` (color, escaped)                |
//! | `bold`            | `\x02` (format character)                |
//! | `red, green`      | `\x0304,09` (foreground, background)     |
//! | `brown, bold`     | `\x0305\x02` (each name on its own)      |
//!
//! A single name is tried as a color first and as a format second; when both
//! miss, the format error is returned. Only a pair of colors is joined with a
//! comma; any other list resolves name by name and concatenates.

use crate::error::DirectiveNotFound;
use crate::registry::{Registry, COLOR_INTRODUCER};

/// The trimmed, ordered names of one `$(...)` span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
    names: Vec<&'a str>,
}

impl<'a> Directive<'a> {
    /// Splits a directive body on `,` and trims each name.
    ///
    /// Names are kept as written; an empty body yields one empty name.
    pub fn parse(body: &'a str) -> Self {
        Self {
            names: body.split(',').map(str::trim).collect(),
        }
    }

    pub fn names(&self) -> &[&'a str] {
        &self.names
    }

    /// Resolves every name against `registry` and returns the emitted codes.
    pub fn resolve(&self, registry: &Registry) -> Result<String, DirectiveNotFound> {
        if let [fg, bg] = self.names.as_slice() {
            if registry.has_color(fg) && registry.has_color(bg) {
                let fg = registry.color_code(fg)?;
                let bg = registry.color_code(bg)?;
                return Ok(format!("{}{},{}", COLOR_INTRODUCER, fg, bg));
            }
        }

        let mut out = String::new();
        for name in &self.names {
            resolve_name(registry, name, &mut out)?;
        }
        Ok(out)
    }
}

/// Appends the code for one name: color first, then format.
fn resolve_name(registry: &Registry, name: &str, out: &mut String) -> Result<(), DirectiveNotFound> {
    if registry.has_color(name) {
        out.push_str(&registry.lookup_color(name)?);
        return Ok(());
    }
    out.push(registry.lookup_format(name)?);
    Ok(())
}

/// Resolves a directive body against `registry`.
///
/// # Example
///
/// ```rust
/// use ircmark::{resolve_with, Registry};
///
/// let registry = Registry::standard();
/// assert_eq!(resolve_with(&registry, "red, green").unwrap(), "\x0304,09");
/// assert_eq!(resolve_with(&registry, " bold ").unwrap(), "\x02");
/// assert!(resolve_with(&registry, "cats").is_err());
/// ```
pub fn resolve_with(registry: &Registry, body: &str) -> Result<String, DirectiveNotFound> {
    let result = Directive::parse(body).resolve(registry);
    tracing::trace!(body, ok = result.is_ok(), "resolved directive");
    result
}
