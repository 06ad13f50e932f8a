//! # ircmark - inline styling markup for IRC text
//!
//! Text embeds directives of the form `$(name)` or `$(name, name)`. A scanner
//! either renders them to IRC control codes or strips them to get plain text:
//!
//! ```rust
//! let text = "The quick $(brown, bold)brown$(clear) fox";
//!
//! assert_eq!(ircmark::render(text).unwrap(), "The quick \x0305\x02brown\x0f fox");
//! assert_eq!(ircmark::strip(text), "The quick brown fox");
//! ```
//!
//! ## Core Concepts
//!
//! - [`Registry`]: immutable color and format tables
//! - [`Directive`]: the names inside one `$(...)`, resolved by [`resolve_with`]
//! - [`Markup`]: the scanner, bound to a registry
//! - [`DirectiveNotFound`]: the only error of rendering
//!
//! ## Directive Syntax
//!
//! | Markup            | Meaning                                  |
//! |-------------------|------------------------------------------|
//! | `$(red)`          | foreground color                         |
//! | `$(red, green)`   | foreground and background                |
//! | `$(bold)`         | format toggle (`bold`, `italic`, ...)    |
//! | `$(clear)`        | reset all formatting                     |
//! | `$(random)`       | a color picked at random                 |
//!
//! Names are trimmed and matched exactly. Spans end at the first `)` and do
//! not nest. An unterminated `$(` is left in the text as is.
//!
//! ## Registries
//!
//! The free functions in this crate use the standard IRC tables, built once
//! on first use. To use other names, build a [`Registry`] (with
//! [`Registry::builder`] or from a YAML palette) and scan with [`Markup`]:
//!
//! ```rust
//! use ircmark::{Markup, Registry};
//!
//! let registry = Registry::builder()
//!     .color("alert", "04")
//!     .format("strong", '\x02')
//!     .build()
//!     .unwrap();
//!
//! let markup = Markup::new(&registry);
//! assert_eq!(markup.render("$(alert)!").unwrap(), "\x0304!");
//! assert!(markup.render("$(red)!").is_err());
//! ```
//!
//! ## Control Codes
//!
//! Already rendered text can be cleaned with [`strip_control`], or shown in a
//! terminal with [`preview`].

mod control;
mod error;
mod palette;
mod preview;
mod registry;
mod resolve;
mod scan;

use once_cell::sync::Lazy;

pub use control::{strip_control, tokenize, ControlToken, ControlTokens, Toggle};
pub use error::{DirectiveNotFound, Family, PaletteError};
pub use preview::{irc_to_ansi256, preview, rgb_to_ansi256};
pub use registry::{
    CodeForm, ColorEntry, FormatEntry, Registry, RegistryBuilder, COLOR_INTRODUCER, RANDOM_COLOR,
    STANDARD_COLORS, STANDARD_FORMATS,
};
pub use resolve::{resolve_with, Directive};
pub use scan::{spans, strip, Markup, MarkupMode, MarkupSpan, MarkupSpans};

static STANDARD: Lazy<Registry> = Lazy::new(Registry::standard);

/// The shared registry with the standard IRC tables.
pub fn standard_registry() -> &'static Registry {
    &STANDARD
}

/// Renders markup with the standard registry.
///
/// # Errors
///
/// Returns [`DirectiveNotFound`] for the first span naming an unknown color
/// or format.
pub fn render(text: &str) -> Result<String, DirectiveNotFound> {
    Markup::new(standard_registry()).render(text)
}

/// Strips markup, then any IRC control codes already in the text.
pub fn strip_all(text: &str) -> String {
    strip_control(&strip(text))
}

/// Resolves one directive body with the standard registry.
pub fn resolve(body: &str) -> Result<String, DirectiveNotFound> {
    resolve_with(standard_registry(), body)
}

/// Standard color names in enumeration order.
pub fn list_colors() -> Vec<&'static str> {
    standard_registry().colors().collect()
}

/// Standard format names in enumeration order.
pub fn list_formats() -> Vec<&'static str> {
    standard_registry().formats().collect()
}

/// Looks up a standard color, escaped.
pub fn lookup_color(name: &str) -> Result<String, DirectiveNotFound> {
    standard_registry().lookup_color(name)
}

/// Looks up a standard color in the given form.
pub fn lookup_color_as(name: &str, form: CodeForm) -> Result<String, DirectiveNotFound> {
    standard_registry().lookup_color_as(name, form)
}

/// Looks up a standard format character.
pub fn lookup_format(name: &str) -> Result<char, DirectiveNotFound> {
    standard_registry().lookup_format(name)
}
