//! ANSI preview of IRC-formatted text.
//!
//! Converts the control codes produced by rendering into terminal escape
//! sequences so rendered output can be checked without an IRC client. Colors
//! 00-15 use the common client palette and are mapped to the nearest ANSI-256
//! index. Styling is always forced on.

use console::{Color, Style};

use crate::control::{tokenize, ControlToken, Toggle};

/// RGB values of IRC colors 00-15.
const IRC_RGB: [(u8, u8, u8); 16] = [
    (255, 255, 255),
    (0, 0, 0),
    (0, 0, 127),
    (0, 147, 0),
    (255, 0, 0),
    (127, 0, 0),
    (156, 0, 156),
    (252, 127, 0),
    (255, 255, 0),
    (0, 252, 0),
    (0, 147, 147),
    (0, 255, 255),
    (0, 0, 252),
    (255, 0, 255),
    (127, 127, 127),
    (210, 210, 210),
];

/// IRC color number meaning "default color".
const DEFAULT_COLOR: u8 = 99;

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```rust
/// use ircmark::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// ANSI-256 index for an IRC color number, if it is one of the base 16.
pub fn irc_to_ansi256(code: u8) -> Option<u8> {
    IRC_RGB.get(code as usize).copied().map(rgb_to_ansi256)
}

#[derive(Debug, Default, Clone, Copy)]
struct State {
    bold: bool,
    italic: bool,
    underline: bool,
    reverse: bool,
    fg: Option<u8>,
    bg: Option<u8>,
}

impl State {
    fn apply(&mut self, token: ControlToken<'_>) {
        match token {
            ControlToken::Text(_) => {}
            ControlToken::Reset => *self = State::default(),
            ControlToken::Toggle(Toggle::Bold) => self.bold = !self.bold,
            ControlToken::Toggle(Toggle::Italic) => self.italic = !self.italic,
            ControlToken::Toggle(Toggle::Underline) => self.underline = !self.underline,
            ControlToken::Toggle(Toggle::Reverse) => self.reverse = !self.reverse,
            ControlToken::Color { fg: None, .. } => {
                self.fg = None;
                self.bg = None;
            }
            ControlToken::Color { fg: Some(fg), bg } => {
                set_color(&mut self.fg, fg);
                if let Some(bg) = bg {
                    set_color(&mut self.bg, bg);
                }
            }
        }
    }

    fn style(&self) -> Style {
        let mut style = Style::new().force_styling(true);
        if self.bold {
            style = style.bold();
        }
        if self.italic {
            style = style.italic();
        }
        if self.underline {
            style = style.underlined();
        }
        if self.reverse {
            style = style.reverse();
        }
        if let Some(fg) = self.fg {
            style = style.fg(Color::Color256(fg));
        }
        if let Some(bg) = self.bg {
            style = style.bg(Color::Color256(bg));
        }
        style
    }
}

/// 99 clears the slot, 00-15 set it, anything else leaves it alone.
fn set_color(slot: &mut Option<u8>, code: u8) {
    if code == DEFAULT_COLOR {
        *slot = None;
    } else if let Some(ansi) = irc_to_ansi256(code) {
        *slot = Some(ansi);
    }
}

/// Converts IRC control codes in `text` to ANSI escape sequences.
///
/// ```rust
/// let out = ircmark::preview("\x02bold\x02 plain");
/// assert!(out.contains("\x1b[1m"));
/// assert!(out.ends_with(" plain"));
/// ```
pub fn preview(text: &str) -> String {
    let mut state = State::default();
    let mut out = String::with_capacity(text.len());
    for token in tokenize(text) {
        match token {
            ControlToken::Text(s) => out.push_str(&state.style().apply_to(s).to_string()),
            other => state.apply(other),
        }
    }
    out
}
