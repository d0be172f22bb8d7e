//! Scanning cursor over the source text.
//!
//! Wraps the input characters and a read position. Past the end of input the
//! cursor reports a NUL sentinel, which the grammar treats as "exhausted".
//! The numeric [`Cursor::position`] lets the number parser distinguish a
//! number that is the entire document from one embedded in a container.

/// Sentinel returned once the cursor has run past the end of the input.
pub(crate) const END: char = '\0';

pub(crate) struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    pub(crate) fn new(text: &str) -> Cursor {
        Cursor {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    /// The character at the current position, or [`END`] past the end.
    pub(crate) fn current(&self) -> char {
        self.chars.get(self.pos).copied().unwrap_or(END)
    }

    /// Move one character forward (no-op past the end) and return the new
    /// current character.
    pub(crate) fn advance(&mut self) -> char {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
        self.current()
    }

    /// The current character, skipping forward over any whitespace first.
    pub(crate) fn current_skipping_space(&mut self) -> char {
        let mut c = self.current();
        while is_space(c) {
            c = self.advance();
        }
        c
    }

    /// Advance, then keep advancing while the current character is whitespace.
    pub(crate) fn advance_skipping_space(&mut self) -> char {
        let mut c = self.advance();
        while is_space(c) {
            c = self.advance();
        }
        c
    }

    /// The current offset, in characters.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }
}

/// Space, newline, carriage return or tab.
pub(crate) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\r' | '\t')
}

/// ASCII letter or underscore, the identifier/keyword alphabet.
pub(crate) fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub(crate) fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Value of a hex digit (case-insensitive), or `None`.
pub(crate) fn hex_value(c: char) -> Option<u32> {
    c.to_digit(16)
}
