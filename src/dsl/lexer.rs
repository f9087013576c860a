//! Lexer (tokenizer) for the circuit description language.

use crate::error::{CircuitPadError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier (line keyword, component name, net name, etc.)
    Identifier,
    /// A number (integer or floating point, possibly with SI prefix and unit)
    Number,
    /// Colon ':' separating a line keyword from its payload
    Colon,
    /// Equals sign '='
    Equals,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Lexer for tokenizing circuit description input.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let ch = match self.chars.peek().copied() {
            Some((_, ch)) => ch,
            None => {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    text: String::new(),
                    line: self.line,
                    column: self.column,
                });
            }
        };

        let start_line = self.line;
        let start_column = self.column;

        let token = match ch {
            '\n' => {
                self.advance();
                Token {
                    kind: TokenKind::Newline,
                    text: "\n".to_string(),
                    line: start_line,
                    column: start_column,
                }
            }
            ':' => {
                self.advance();
                Token {
                    kind: TokenKind::Colon,
                    text: ":".to_string(),
                    line: start_line,
                    column: start_column,
                }
            }
            '=' => {
                self.advance();
                Token {
                    kind: TokenKind::Equals,
                    text: "=".to_string(),
                    line: start_line,
                    column: start_column,
                }
            }
            '-' | '+' | '0'..='9' => {
                let text = self.read_number();
                Token {
                    kind: TokenKind::Number,
                    text,
                    line: start_line,
                    column: start_column,
                }
            }
            _ if ch.is_alphabetic() || ch == '_' => {
                let text = self.read_identifier();
                Token {
                    kind: TokenKind::Identifier,
                    text,
                    line: start_line,
                    column: start_column,
                }
            }
            _ => {
                return Err(CircuitPadError::scan(
                    start_line,
                    start_column,
                    format!("unexpected character '{}'", ch),
                ));
            }
        };

        Ok(token)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((_, ch)) = self.chars.next() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(ch)
        } else {
            None
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' {
                self.advance();
            } else if ch == '#' {
                // Skip comment until end of line
                while let Some(&(_, c)) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut text = String::new();
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        text
    }

    fn read_number(&mut self) -> String {
        let mut text = String::new();

        // Optional sign
        if let Some(&(_, ch)) = self.chars.peek() {
            if ch == '-' || ch == '+' {
                text.push(ch);
                self.advance();
            }
        }

        // Integer part
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Decimal part
        if let Some(&(_, '.')) = self.chars.peek() {
            text.push('.');
            self.advance();
            while let Some(&(_, ch)) = self.chars.peek() {
                if ch.is_ascii_digit() {
                    text.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        // Exponent part
        if let Some(&(_, ch)) = self.chars.peek() {
            if ch == 'e' || ch == 'E' {
                text.push(ch);
                self.advance();
                if let Some(&(_, sign)) = self.chars.peek() {
                    if sign == '-' || sign == '+' {
                        text.push(sign);
                        self.advance();
                    }
                }
                while let Some(&(_, ch)) = self.chars.peek() {
                    if ch.is_ascii_digit() {
                        text.push(ch);
                        self.advance();
                    } else {
                        break;
                    }
                }
            }
        }

        // SI prefix (p, n, u, m, k, M, G)
        if let Some(&(_, ch)) = self.chars.peek() {
            if matches!(ch, 'p' | 'n' | 'u' | 'µ' | 'm' | 'k' | 'K' | 'M' | 'G') {
                text.push(ch);
                self.advance();
            }
        }

        // Unit letter (V, F, H, A)
        if let Some(&(_, ch)) = self.chars.peek() {
            if matches!(ch, 'V' | 'F' | 'H' | 'A') {
                text.push(ch);
                self.advance();
            }
        }

        text
    }
}

/// Parse a number string with optional SI prefix and unit letter.
///
/// Accepts the forms seen in circuit descriptions: `10k`, `1uF`, `5V`,
/// `100n`, `2.2`, `1e-9`. The unit letter is informational only and does
/// not affect the returned value.
pub fn parse_value(text: &str) -> Option<f64> {
    let mut text = text.trim();
    if text.is_empty() {
        return None;
    }

    // Strip a trailing unit letter
    if let Some(last) = text.chars().last() {
        if matches!(last, 'V' | 'F' | 'H' | 'A') {
            text = &text[..text.len() - last.len_utf8()];
        }
    }

    let (num_str, multiplier) = if let Some(last) = text.chars().last() {
        let mult = match last {
            'p' => 1e-12,
            'n' => 1e-9,
            'u' | 'µ' => 1e-6,
            'm' => 1e-3,
            'k' | 'K' => 1e3,
            'M' => 1e6,
            'G' => 1e9,
            _ => 1.0,
        };
        if mult != 1.0 {
            (&text[..text.len() - last.len_utf8()], mult)
        } else {
            (text, 1.0)
        }
    } else {
        (text, 1.0)
    };

    num_str.parse::<f64>().ok().map(|v| v * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_value() {
        assert_relative_eq!(parse_value("10k").unwrap(), 10_000.0);
        assert_relative_eq!(parse_value("100n").unwrap(), 100e-9);
        assert_relative_eq!(parse_value("4.7u").unwrap(), 4.7e-6);
        assert_relative_eq!(parse_value("1M").unwrap(), 1_000_000.0);
        assert_relative_eq!(parse_value("2.2").unwrap(), 2.2);
        assert_relative_eq!(parse_value("1e-9").unwrap(), 1e-9);
    }

    #[test]
    fn test_parse_value_with_units() {
        assert_relative_eq!(parse_value("5V").unwrap(), 5.0);
        assert_relative_eq!(parse_value("1uF").unwrap(), 1e-6);
        assert_relative_eq!(parse_value("3.3mV").unwrap(), 3.3e-3);
        assert_relative_eq!(parse_value("100nF").unwrap(), 100e-9);
    }

    #[test]
    fn test_parse_value_rejects_garbage() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value("V"), None);
    }

    #[test]
    fn test_lexer_basic() {
        let input = "resistor: name=R1 value=10k";
        let mut lexer = Lexer::new(input);

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.text, "resistor");

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Colon);

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.text, "name");

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Equals);

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.text, "R1");
    }

    #[test]
    fn test_lexer_numbers_with_units() {
        let mut lexer = Lexer::new("5V 1uF 10k");

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Number);
        assert_eq!(tok.text, "5V");

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Number);
        assert_eq!(tok.text, "1uF");

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Number);
        assert_eq!(tok.text, "10k");
    }

    #[test]
    fn test_lexer_comments_and_newlines() {
        let mut lexer = Lexer::new("# a comment\nnet: OUT # trailing\n");

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Newline);

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.text, "net");
        assert_eq!(tok.line, 2);
    }

    #[test]
    fn test_lexer_rejects_unexpected_character() {
        let mut lexer = Lexer::new("net: @");
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        assert!(lexer.next_token().is_err());
    }
}
