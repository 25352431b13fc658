//! Byte/character cursor over the input: peek, advance, EOF test, literal
//! word matching, and whitespace/comment skipping.

use crate::options::Options;

/// A read-only cursor over `input`. `pos` is a byte offset and is only ever
/// advanced, except for the string reader's own micro look-aheads, which
/// never mutate `pos` directly: the cursor is monotonically
/// non-decreasing across every public method call.
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Current character, or `None` at EOF.
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Step the cursor past the current character. No-op at EOF.
    pub fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Does the literal `word` occur at the cursor? Does not consume.
    pub fn match_word(&self, word: &str) -> bool {
        self.input[self.pos..].starts_with(word)
    }

    /// The remaining unconsumed input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Consume the UTF-8 byte-order-mark if the cursor is at the very
    /// start of `input` and it's present. Call once, before any other
    /// work.
    pub fn skip_bom(&mut self) {
        if self.pos == 0 && self.input.starts_with('\u{feff}') {
            self.pos += '\u{feff}'.len_utf8();
        }
    }

    /// Consume runs of Unicode whitespace, interleaved with `//` and
    /// `/* */` comments when `allow_comments` is set. Any mixture in any
    /// order is handled by looping until neither applies.
    pub fn skip_whitespace(&mut self, options: &Options) {
        loop {
            let mut advanced = false;
            while let Some(c) = self.peek() {
                if c.is_whitespace() {
                    self.advance();
                    advanced = true;
                } else {
                    break;
                }
            }
            if options.allow_comments {
                if self.match_word("//") {
                    self.advance();
                    self.advance();
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                    advanced = true;
                } else if self.match_word("/*") {
                    self.advance();
                    self.advance();
                    loop {
                        if self.eof() {
                            break;
                        }
                        if self.match_word("*/") {
                            self.advance();
                            self.advance();
                            break;
                        }
                        self.advance();
                    }
                    advanced = true;
                }
            }
            if !advanced {
                break;
            }
        }
    }
}
