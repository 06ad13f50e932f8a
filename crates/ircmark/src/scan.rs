//! Markup scanning: locating `$(...)` spans and rewriting them.
//!
//! Scanning is a single left-to-right pass. Text is copied verbatim until a
//! literal `$(`; the span then runs to the first `)` after it. There is no
//! nesting and no escaping, so `$(a$(b)` is one span with body `a$(b`.
//!
//! A `$(` that is never closed is not an error. It and everything after it
//! are copied as plain text, so prose that happens to contain `$(` survives.

use std::convert::Infallible;

use crate::error::DirectiveNotFound;
use crate::registry::Registry;
use crate::resolve::resolve_with;

const OPEN: &str = "$(";
const CLOSE: char = ')';

/// One well-formed `$(...)` occurrence in a source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupSpan<'a> {
    /// Byte offset of the `$`.
    pub start: usize,
    /// Byte offset one past the closing `)`.
    pub end: usize,
    /// The text between `$(` and `)`, untrimmed.
    pub body: &'a str,
}

/// Iterator over the spans of a string, in order. See [`spans`].
#[derive(Debug, Clone)]
pub struct MarkupSpans<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for MarkupSpans<'a> {
    type Item = MarkupSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let open = rest.find(OPEN)?;
        let body_start = self.pos + open + OPEN.len();
        let Some(close) = self.text[body_start..].find(CLOSE) else {
            // Unterminated: nothing after this point can close a span either.
            self.pos = self.text.len();
            return None;
        };
        let body_end = body_start + close;
        let span = MarkupSpan {
            start: self.pos + open,
            end: body_end + 1,
            body: &self.text[body_start..body_end],
        };
        self.pos = span.end;
        Some(span)
    }
}

/// Returns the well-formed spans of `text`, left to right.
///
/// ```rust
/// let spans: Vec<_> = ircmark::spans("a $(bold)b$( c").collect();
/// assert_eq!(spans.len(), 1);
/// assert_eq!(spans[0].body, "bold");
/// assert_eq!((spans[0].start, spans[0].end), (2, 9));
/// ```
pub fn spans(text: &str) -> MarkupSpans<'_> {
    MarkupSpans { text, pos: 0 }
}

/// What to do with each span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupMode {
    /// Replace spans with resolved control codes.
    Render,
    /// Delete spans.
    Strip,
}

/// Scanner bound to a registry.
///
/// # Example
///
/// ```rust
/// use ircmark::{Markup, MarkupMode, Registry};
///
/// let registry = Registry::standard();
/// let markup = Markup::new(&registry);
///
/// let input = "$(bold)hello$(clear) $(red)world";
/// assert_eq!(markup.render(input).unwrap(), "\x02hello\x0f \x0304world");
/// assert_eq!(markup.strip(input), "hello world");
/// assert_eq!(markup.process(input, MarkupMode::Strip).unwrap(), "hello world");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Markup<'r> {
    registry: &'r Registry,
}

impl<'r> Markup<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Replaces every span with its resolved codes.
    ///
    /// # Errors
    ///
    /// Fails on the first span containing an unknown name. No partial output
    /// is returned.
    pub fn render(&self, text: &str) -> Result<String, DirectiveNotFound> {
        splice(text, |body, out| -> Result<(), DirectiveNotFound> {
            out.push_str(&resolve_with(self.registry, body)?);
            Ok(())
        })
    }

    /// Deletes every span. Never consults the registry.
    pub fn strip(&self, text: &str) -> String {
        strip(text)
    }

    /// Runs [`render`](Self::render) or [`strip`](Self::strip).
    pub fn process(&self, text: &str, mode: MarkupMode) -> Result<String, DirectiveNotFound> {
        match mode {
            MarkupMode::Render => self.render(text),
            MarkupMode::Strip => Ok(self.strip(text)),
        }
    }
}

/// Deletes every well-formed span from `text`.
///
/// All other characters, including whitespace next to a span, are kept.
pub fn strip(text: &str) -> String {
    match splice(text, |_, _| Ok::<(), Infallible>(())) {
        Ok(out) => out,
        Err(never) => match never {},
    }
}

/// Copies `text`, handing each span body to `emit` in place of the span.
fn splice<E>(
    text: &str,
    mut emit: impl FnMut(&str, &mut String) -> Result<(), E>,
) -> Result<String, E> {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    for span in spans(text) {
        out.push_str(&text[copied..span.start]);
        emit(span.body, &mut out)?;
        copied = span.end;
    }
    out.push_str(&text[copied..]);
    Ok(out)
}
