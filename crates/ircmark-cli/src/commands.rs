//! Command implementations.
//!
//! Each command returns the text to print so it can be tested without a
//! terminal.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use clap::Args;
use ircmark::{CodeForm, Markup, Registry};

#[derive(Args, Debug, Default)]
pub(crate) struct RenderArgs {
    /// Text to render. Read from stdin when omitted.
    pub text: Option<String>,

    /// Show the result with terminal colors instead of raw IRC codes.
    #[arg(long)]
    pub preview: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct StripArgs {
    /// Text to strip. Read from stdin when omitted.
    pub text: Option<String>,

    /// Also remove IRC control codes already present in the text.
    #[arg(long)]
    pub all: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct LookupArgs {
    /// Color or format name.
    pub name: String,

    /// Look the name up as a format instead of a color.
    #[arg(long)]
    pub format: bool,

    /// Print a color's digits without the introducer.
    #[arg(long, conflicts_with = "format")]
    pub raw: bool,
}

/// Builds the registry from a palette file, or the standard tables.
pub(crate) fn load_registry(palette: Option<&Path>) -> anyhow::Result<Registry> {
    match palette {
        Some(path) => Registry::from_palette_file(path)
            .with_context(|| format!("could not load palette {}", path.display())),
        None => Ok(Registry::standard()),
    }
}

fn input(text: Option<String>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("could not read stdin")?;
    // Keep interior newlines but drop the one the shell adds.
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

pub(crate) fn render(registry: &Registry, args: RenderArgs) -> anyhow::Result<String> {
    let text = input(args.text)?;
    let rendered = Markup::new(registry).render(&text)?;
    tracing::debug!(bytes = rendered.len(), "rendered");
    Ok(if args.preview {
        ircmark::preview(&rendered)
    } else {
        rendered
    })
}

pub(crate) fn strip(args: StripArgs) -> anyhow::Result<String> {
    let text = input(args.text)?;
    Ok(if args.all {
        ircmark::strip_all(&text)
    } else {
        ircmark::strip(&text)
    })
}

pub(crate) fn list_colors(registry: &Registry) -> String {
    let width = name_width(registry.colors());
    registry
        .color_entries()
        .iter()
        .map(|entry| format!("{:<width$}  {}", entry.name, entry.code))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn list_formats(registry: &Registry) -> String {
    let width = name_width(registry.formats());
    registry
        .format_entries()
        .map(|entry| format!("{:<width$}  {}", entry.name, escape(entry.code)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn lookup(registry: &Registry, args: &LookupArgs) -> anyhow::Result<String> {
    if args.format {
        return Ok(registry.lookup_format(&args.name)?.to_string());
    }
    let form = if args.raw {
        CodeForm::Raw
    } else {
        CodeForm::Escaped
    };
    Ok(registry.lookup_color_as(&args.name, form)?)
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(str::len).max().unwrap_or(0)
}

/// Shows a control character as `\xNN`.
fn escape(code: char) -> String {
    if code.is_control() {
        format!("\\x{:02x}", code as u32)
    } else {
        code.to_string()
    }
}
