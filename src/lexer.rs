//! Character-level scanner for selector text
//!
//! The selector grammar is small enough that the parser drives this cursor
//! directly instead of going through a token stream. The scanner only knows
//! how to advance, peek and read the handful of lexical shapes the grammar
//! uses (bare words, quoted literals, raw runs up to a stop character).

/// Character cursor over a selector string.
pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    current_char: Option<char>,
}

impl Lexer {
    /// Create a new scanner for the given input
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let current_char = chars.first().copied();

        Self {
            chars,
            position: 0,
            current_char,
        }
    }

    /// Advance to the next character
    pub fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.chars.get(self.position).copied();
    }

    /// Current character without advancing
    pub fn current(&self) -> Option<char> {
        self.current_char
    }

    /// Peek at the next character without advancing
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.position + 1).copied()
    }

    pub fn at_end(&self) -> bool {
        self.current_char.is_none()
    }

    /// Consume `c` if it is the current character
    pub fn eat(&mut self, c: char) -> bool {
        if self.current_char == Some(c) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skip whitespace characters
    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Read a bare word: any run of characters up to whitespace or a bracket.
    pub fn read_word(&mut self) -> String {
        let start = self.position;

        while let Some(c) = self.current_char {
            if c.is_whitespace() || c == '[' || c == ']' {
                break;
            }
            self.advance();
        }

        self.chars[start..self.position].iter().collect()
    }

    /// Read a quoted literal verbatim. The opening quote has already been
    /// consumed; the closing quote is consumed here. An unterminated quote
    /// reads to end of input.
    pub fn read_quoted(&mut self, quote: char) -> String {
        let mut value = String::new();

        while let Some(c) = self.current_char {
            if c == quote {
                self.advance();
                break;
            }
            value.push(c);
            self.advance();
        }

        value
    }

    /// Read a raw run of characters up to (not including) any of `stops` or
    /// end of input.
    pub fn read_until(&mut self, stops: &[char]) -> String {
        let start = self.position;

        while let Some(c) = self.current_char {
            if stops.contains(&c) {
                break;
            }
            self.advance();
        }

        self.chars[start..self.position].iter().collect()
    }
}
