//! Tokenizing and stripping IRC control codes.
//!
//! Rendered text carries raw control codes. [`tokenize`] splits such text
//! into runs of plain text and the codes between them; [`strip_control`]
//! keeps only the text.
//!
//! Color sequences follow the usual client rule: `\x03`, then up to two
//! digits of foreground, then optionally `,` and up to two digits of
//! background. The comma belongs to the sequence only when a digit follows
//! it, so `\x0304,hello` keeps `,hello` as text.

/// A single-byte format toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Bold,
    Italic,
    Underline,
    Reverse,
}

/// One piece of IRC-formatted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlToken<'a> {
    Text(&'a str),
    /// `\x03` with its numbers; both `None` means "back to default colors".
    Color { fg: Option<u8>, bg: Option<u8> },
    Toggle(Toggle),
    /// `\x0f`
    Reset,
}

const COLOR: u8 = 0x03;
const BOLD: u8 = 0x02;
const ITALIC: u8 = 0x1d;
const UNDERLINE: u8 = 0x1f;
const REVERSE: u8 = 0x16;
const RESET: u8 = 0x0f;

fn is_control(b: u8) -> bool {
    matches!(b, COLOR | BOLD | ITALIC | UNDERLINE | REVERSE | RESET)
}

/// Iterator returned by [`tokenize`].
#[derive(Debug, Clone)]
pub struct ControlTokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> ControlTokens<'a> {
    /// Reads up to two ASCII digits at the cursor.
    fn number(&mut self) -> Option<u8> {
        let bytes = self.text.as_bytes();
        let start = self.pos;
        while self.pos < bytes.len() && self.pos - start < 2 && bytes[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        self.text[start..self.pos].parse().ok()
    }

    fn color(&mut self) -> ControlToken<'a> {
        let fg = self.number();
        let bytes = self.text.as_bytes();
        let bg = if fg.is_some()
            && bytes.get(self.pos) == Some(&b',')
            && bytes.get(self.pos + 1).is_some_and(u8::is_ascii_digit)
        {
            self.pos += 1;
            self.number()
        } else {
            None
        };
        ControlToken::Color { fg, bg }
    }
}

impl<'a> Iterator for ControlTokens<'a> {
    type Item = ControlToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        let b = *bytes.get(self.pos)?;
        if !is_control(b) {
            let start = self.pos;
            let len = bytes[start..]
                .iter()
                .position(|&b| is_control(b))
                .unwrap_or(bytes.len() - start);
            self.pos += len;
            return Some(ControlToken::Text(&self.text[start..self.pos]));
        }

        self.pos += 1;
        Some(match b {
            COLOR => self.color(),
            BOLD => ControlToken::Toggle(Toggle::Bold),
            ITALIC => ControlToken::Toggle(Toggle::Italic),
            UNDERLINE => ControlToken::Toggle(Toggle::Underline),
            REVERSE => ControlToken::Toggle(Toggle::Reverse),
            _ => ControlToken::Reset,
        })
    }
}

/// Splits IRC-formatted text into text runs and control codes.
///
/// ```rust
/// use ircmark::{tokenize, ControlToken, Toggle};
///
/// let tokens: Vec<_> = tokenize("\x02hi\x0304,09!").collect();
/// assert_eq!(
///     tokens,
///     [
///         ControlToken::Toggle(Toggle::Bold),
///         ControlToken::Text("hi"),
///         ControlToken::Color { fg: Some(4), bg: Some(9) },
///         ControlToken::Text("!"),
///     ]
/// );
/// ```
pub fn tokenize(text: &str) -> ControlTokens<'_> {
    ControlTokens { text, pos: 0 }
}

/// Removes IRC control codes, keeping only the text.
pub fn strip_control(text: &str) -> String {
    tokenize(text)
        .filter_map(|token| match token {
            ControlToken::Text(s) => Some(s),
            _ => None,
        })
        .collect()
}
