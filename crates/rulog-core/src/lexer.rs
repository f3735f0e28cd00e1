// Dweve RULOG - Rule Logic Language
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The character tokenizer.
//!
//! [`Lexer`] turns a source string into a lazy token sequence. Buffering is
//! depth-1 at both layers: one held-back character below, one cached token
//! above ([`Lexer::peek_token`]), which together give the parser exactly the
//! lookahead it needs without re-scanning.

use crate::error::{ParseError, ParseResult};
use crate::span::SourcePos;
use crate::sym::Symbol;

/// A token produced by the tokenizer. Tokens are immutable and transient.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// An interned symbol: identifier, operator run, quoted symbol, or
    /// single-character punctuation.
    Sym(Symbol),
    /// 32-bit signed integer literal.
    Int(i32),
    /// Floating-point literal.
    Float(f64),
    /// Boolean literal.
    Bool(bool),
    /// String literal with escapes already resolved.
    Str(String),
    /// End-of-input sentinel.
    Eof,
}

impl Token {
    /// Returns `true` for the end-of-input sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }

    /// The interned symbol, if this token is one.
    #[inline]
    pub fn as_sym(&self) -> Option<Symbol> {
        match self {
            Token::Sym(s) => Some(*s),
            _ => None,
        }
    }

    /// Human-readable description for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Token::Sym(s) => format!("symbol '{}'", s.as_str()),
            Token::Int(n) => format!("integer {}", n),
            Token::Float(x) => format!("float {}", x),
            Token::Bool(b) => format!("boolean {}", b),
            Token::Str(s) => format!("string {:?}", s),
            Token::Eof => "end of input".to_string(),
        }
    }
}

/// Single-character tokens, recognized immediately.
#[inline]
fn is_single_char_token(c: char) -> bool {
    matches!(
        c,
        '{' | '}' | '(' | ')' | '[' | ']' | '|' | ',' | ';' | '.' | '$' | '#' | '@'
    )
}

/// The operator alphabet. A maximal run of these forms one operator symbol,
/// except that single-character tokens always terminate a run.
#[inline]
fn is_oper_char(c: char) -> bool {
    matches!(
        c,
        '@' | '#'
            | '$'
            | '%'
            | '^'
            | '&'
            | '*'
            | ':'
            | '<'
            | '>'
            | '?'
            | '/'
            | '!'
            | '+'
            | '-'
            | '='
            | '|'
            | '~'
            | '\\'
    )
}

/// The character tokenizer.
pub struct Lexer<'a> {
    chars: std::str::Chars<'a>,
    pushback: Option<char>,
    lookahead: Option<Token>,
    pos: SourcePos,
    prev_pos: SourcePos,
}

impl<'a> Lexer<'a> {
    /// Creates a tokenizer over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars(),
            pushback: None,
            lookahead: None,
            pos: SourcePos::start(),
            prev_pos: SourcePos::start(),
        }
    }

    /// The position of the next unread character.
    #[inline]
    pub fn position(&self) -> SourcePos {
        self.pos
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> ParseResult<Token> {
        if let Some(tok) = self.lookahead.take() {
            return Ok(tok);
        }
        self.scan_token()
    }

    /// Returns the next token without consuming it. Idempotent: the token is
    /// cached until [`Lexer::next_token`] takes it.
    pub fn peek_token(&mut self) -> ParseResult<Token> {
        if let Some(tok) = &self.lookahead {
            return Ok(tok.clone());
        }
        let tok = self.scan_token()?;
        self.lookahead = Some(tok.clone());
        Ok(tok)
    }

    fn get(&mut self) -> Option<char> {
        let ch = self.pushback.take().or_else(|| self.chars.next());
        if let Some(c) = ch {
            self.prev_pos = self.pos;
            if c == '\n' {
                self.pos.next_line();
            } else {
                self.pos.advance_col();
            }
        }
        ch
    }

    fn unget(&mut self, c: char) {
        debug_assert!(self.pushback.is_none(), "depth-1 pushback already held");
        self.pushback = Some(c);
        self.pos = self.prev_pos;
    }

    fn scan_token(&mut self) -> ParseResult<Token> {
        loop {
            let start = self.pos;
            let ch = match self.get() {
                None => return Ok(Token::Eof),
                Some(c) => c,
            };
            if ch.is_whitespace() {
                continue;
            }
            if ch == '/' {
                match self.get() {
                    Some('/') => {
                        self.skip_line_comment();
                        continue;
                    }
                    Some('*') => {
                        self.skip_block_comment();
                        continue;
                    }
                    Some(other) => self.unget(other),
                    None => {}
                }
                return Ok(self.scan_oper('/'));
            }
            return match ch {
                '"' => self.scan_string(start),
                '\'' => self.scan_quoted_symbol(start),
                c if is_single_char_token(c) => {
                    let mut buf = [0u8; 4];
                    Ok(Token::Sym(Symbol::intern(c.encode_utf8(&mut buf))))
                }
                c if c.is_alphabetic() || c == '_' => Ok(self.scan_ident(c)),
                c if c.is_ascii_digit() => self.scan_number(c, start),
                c if is_oper_char(c) => Ok(self.scan_oper(c)),
                c => Err(ParseError::InvalidChar { ch: c, pos: start }),
            };
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.get() {
            if c == '\n' {
                break;
            }
        }
    }

    /// Skips a `/* ... */` comment. An unterminated comment consumes the
    /// rest of the input rather than failing.
    fn skip_block_comment(&mut self) {
        loop {
            match self.get() {
                None => return,
                Some('*') => match self.get() {
                    Some('/') | None => return,
                    Some(c) => {
                        if c == '*' {
                            self.unget(c);
                        }
                    }
                },
                Some(_) => {}
            }
        }
    }

    fn scan_string(&mut self, start: SourcePos) -> ParseResult<Token> {
        let mut value = String::new();
        loop {
            match self.get() {
                None => {
                    return Err(ParseError::UnterminatedString {
                        partial: value,
                        pos: start,
                    })
                }
                Some('"') => return Ok(Token::Str(value)),
                Some('\\') => match self.get() {
                    Some('n') => value.push('\n'),
                    Some('r') => value.push('\r'),
                    Some('t') => value.push('\t'),
                    // Any other escaped character passes through literally,
                    // covering \\ and \" among the rest.
                    Some(c) => value.push(c),
                    None => {
                        return Err(ParseError::UnterminatedString {
                            partial: value,
                            pos: start,
                        })
                    }
                },
                Some(c) => value.push(c),
            }
        }
    }

    /// Scans a `'...'` raw symbol literal. No escape processing.
    fn scan_quoted_symbol(&mut self, start: SourcePos) -> ParseResult<Token> {
        let mut name = String::new();
        loop {
            match self.get() {
                None => {
                    return Err(ParseError::UnterminatedSymbol {
                        partial: name,
                        pos: start,
                    })
                }
                Some('\'') => return Ok(Token::Sym(Symbol::intern(&name))),
                Some(c) => name.push(c),
            }
        }
    }

    fn scan_ident(&mut self, first: char) -> Token {
        let mut name = String::new();
        name.push(first);
        while let Some(c) = self.get() {
            if c.is_alphanumeric() || c == '_' || c == '!' {
                name.push(c);
            } else {
                self.unget(c);
                break;
            }
        }
        match name.as_str() {
            "true" | "True" => Token::Bool(true),
            "false" | "False" => Token::Bool(false),
            _ => Token::Sym(Symbol::intern(&name)),
        }
    }

    fn scan_number(&mut self, first: char, start: SourcePos) -> ParseResult<Token> {
        let mut text = String::new();
        text.push(first);
        let mut has_dot = false;
        while let Some(c) = self.get() {
            if c.is_ascii_digit() {
                text.push(c);
            } else if c == '.' && !has_dot {
                has_dot = true;
                text.push(c);
            } else {
                self.unget(c);
                break;
            }
        }
        if has_dot {
            text.parse::<f64>()
                .map(Token::Float)
                .map_err(|_| ParseError::InvalidNumber { text, pos: start })
        } else {
            text.parse::<i32>()
                .map(Token::Int)
                .map_err(|_| ParseError::InvalidNumber { text, pos: start })
        }
    }

    fn scan_oper(&mut self, first: char) -> Token {
        let mut name = String::new();
        name.push(first);
        while let Some(c) = self.get() {
            if is_oper_char(c) && !is_single_char_token(c) {
                name.push(c);
            } else {
                self.unget(c);
                break;
            }
        }
        Token::Sym(Symbol::intern(&name))
    }
}
