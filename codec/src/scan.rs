//! Scanner for assertion line content.
//!
//! The grammar is deliberately tiny: parentheses, identifiers matching
//! `[A-Za-z_][A-Za-z0-9_]*`, signed decimal integers, and the five
//! comparison operator symbols. Anything else invalidates the whole
//! line, and the caller skips it.

use std::iter::Peekable;
use std::str::CharIndices;

use verdict_core::Operator;

/// Tokens of the assertion grammar.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    LParen,
    RParen,
    Ident(String),
    Int(i64),
    Op(Operator),
}

/// Single-pass scanner over one line's content.
pub(crate) struct Scanner<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
        }
    }

    /// Tokenize the whole input, or `None` if any character falls
    /// outside the grammar.
    pub(crate) fn tokenize(mut self) -> Option<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let Some(c) = self.next_char() else {
                return Some(tokens);
            };

            let token = match c {
                '(' => Token::LParen,
                ')' => Token::RParen,
                '>' => {
                    if self.eat('=') {
                        Token::Op(Operator::Ge)
                    } else {
                        Token::Op(Operator::Gt)
                    }
                }
                '<' => {
                    if self.eat('=') {
                        Token::Op(Operator::Le)
                    } else {
                        Token::Op(Operator::Lt)
                    }
                }
                '=' => {
                    // Only `==` is an operator; a lone `=` is malformed.
                    if self.eat('=') {
                        Token::Op(Operator::Eq)
                    } else {
                        return None;
                    }
                }
                '-' | '+' => self.scan_int(c)?,
                '0'..='9' => self.scan_int(c)?,
                'a'..='z' | 'A'..='Z' | '_' => self.scan_ident(c),
                _ => return None,
            };
            tokens.push(token);
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn next_char(&mut self) -> Option<char> {
        self.chars.next().map(|(_, c)| c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek_char() == Some(expected) {
            self.next_char();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn scan_ident(&mut self, first: char) -> Token {
        let mut ident = String::new();
        ident.push(first);

        while let Some(c) = self.peek_char() {
            if c.is_ascii_alphanumeric() || c == '_' {
                ident.push(c);
                self.next_char();
            } else {
                break;
            }
        }

        Token::Ident(ident)
    }

    fn scan_int(&mut self, first: char) -> Option<Token> {
        let mut number = String::new();
        number.push(first);

        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                number.push(c);
                self.next_char();
            } else {
                break;
            }
        }

        // A bare sign, or a value outside i64, is malformed.
        number.parse::<i64>().ok().map(Token::Int)
    }
}
