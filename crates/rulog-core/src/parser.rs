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

//! The operator-precedence expression parser.
//!
//! [`Parser`] consumes tokens from the [`Lexer`] and an [`OperTable`] passed
//! in by reference, and builds [`Term`] trees by precedence climbing: parse a
//! primary term, then fold binary operators whose binding power meets the
//! current minimum, letting the right-hand side absorb only strictly tighter
//! operators. Equal precedence therefore groups to the left.
//!
//! # Examples
//!
//! ```
//! use rulog_core::{parse_term, OperTable};
//!
//! let ops = OperTable::standard();
//! let term = parse_term("1 + 2 * 3", &ops).unwrap();
//! let call = term.as_call().unwrap();
//! assert_eq!(call.functor().as_str(), "+");
//! ```

use crate::error::{ParseError, ParseResult};
use crate::lexer::{Lexer, Token};
use crate::ops::OperTable;
use crate::sym::Symbol;
use crate::term::Term;

/// Pre-interned punctuation consulted on every primary term.
struct Puncts {
    lparen: Symbol,
    rparen: Symbol,
    lbracket: Symbol,
    rbracket: Symbol,
    comma: Symbol,
    plus: Symbol,
    minus: Symbol,
    item: Symbol,
}

impl Puncts {
    fn new() -> Self {
        Self {
            lparen: Symbol::intern("("),
            rparen: Symbol::intern(")"),
            lbracket: Symbol::intern("["),
            rbracket: Symbol::intern("]"),
            comma: Symbol::intern(","),
            plus: Symbol::intern("+"),
            minus: Symbol::intern("-"),
            item: Symbol::intern("item"),
        }
    }
}

/// The expression parser. One instance owns its tokenizer; the operator
/// table is shared, read-only state.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    ops: &'a OperTable,
    punct: Puncts,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `source` using the given operator table.
    pub fn new(source: &'a str, ops: &'a OperTable) -> Self {
        Self {
            lexer: Lexer::new(source),
            ops,
            punct: Puncts::new(),
        }
    }

    /// Returns `true` when the input holds no further terms.
    pub fn at_eof(&mut self) -> ParseResult<bool> {
        Ok(self.lexer.peek_token()?.is_eof())
    }

    /// Reads one term.
    ///
    /// With `is_argument` set, a top-level comma is left unconsumed for the
    /// enclosing argument list instead of being taken as the binary `,`
    /// operator. The flag applies only to the outermost precedence check;
    /// operands inside a consumed operator open a fresh context.
    pub fn read(&mut self, is_argument: bool) -> ParseResult<Term> {
        let first = self.primary()?;
        self.climb(first, 0, is_argument)
    }

    /// Folds binary operators into `lhs` while their binding power is at
    /// least `min_prec`.
    fn climb(&mut self, mut lhs: Term, min_prec: u16, is_argument: bool) -> ParseResult<Term> {
        while let Some((op, prec)) = self.peek_binary()? {
            if prec < min_prec || (is_argument && op == self.punct.comma) {
                break;
            }
            self.lexer.next_token()?;
            let mut rhs = self.primary()?;
            // The right operand absorbs only strictly tighter operators;
            // equal precedence folds left.
            while let Some((_, next)) = self.peek_binary()? {
                if next <= prec {
                    break;
                }
                rhs = self.climb(rhs, next, false)?;
            }
            lhs = Term::call(op, vec![lhs, rhs]);
        }
        Ok(lhs)
    }

    fn peek_binary(&mut self) -> ParseResult<Option<(Symbol, u16)>> {
        Ok(match self.lexer.peek_token()? {
            Token::Sym(s) => self.ops.binary_prec(s).map(|p| (s, p)),
            _ => None,
        })
    }

    fn primary(&mut self) -> ParseResult<Term> {
        let pos = self.lexer.position();
        match self.lexer.next_token()? {
            Token::Eof => Err(ParseError::UnexpectedEof {
                expected: "a term".to_string(),
                pos,
            }),
            Token::Int(n) => Ok(Term::Int(n)),
            Token::Float(x) => Ok(Term::Float(x)),
            Token::Bool(b) => Ok(Term::Bool(b)),
            Token::Str(s) => Ok(Term::Str(s)),
            Token::Sym(s) => self.primary_sym(s),
        }
    }

    fn primary_sym(&mut self, s: Symbol) -> ParseResult<Term> {
        // Grouping and sequence literals.
        if s == self.punct.lparen {
            let inner = self.read(false)?;
            self.expect_sym(self.punct.rparen, "')'")?;
            return Ok(inner);
        }
        if s == self.punct.lbracket {
            return self.finish_seq();
        }

        // A sign immediately before a numeric literal folds into it.
        if s == self.punct.plus || s == self.punct.minus {
            if matches!(self.lexer.peek_token()?, Token::Int(_) | Token::Float(_)) {
                let negate = s == self.punct.minus;
                let pos = self.lexer.position();
                return match self.lexer.next_token()? {
                    Token::Int(n) => Ok(Term::Int(if negate { -n } else { n })),
                    Token::Float(x) => Ok(Term::Float(if negate { -x } else { x })),
                    other => Err(ParseError::UnexpectedToken {
                        found: other.describe(),
                        expected: "a numeric literal".to_string(),
                        pos,
                    }),
                };
            }
        }

        // Call and index sugar.
        match self.lexer.peek_token()? {
            Token::Sym(p) if p == self.punct.lparen => {
                self.lexer.next_token()?;
                return self.finish_call(s);
            }
            Token::Sym(p) if p == self.punct.lbracket => {
                self.lexer.next_token()?;
                let index = self.read(false)?;
                self.expect_sym(self.punct.rbracket, "']'")?;
                return Ok(Term::call(self.punct.item, vec![Term::Sym(s), index]));
            }
            _ => {}
        }

        // Prefix operator application.
        if let Some(prec) = self.ops.prefix_prec(s) {
            let operand = self.primary()?;
            let operand = self.climb(operand, prec, false)?;
            return Ok(Term::call(s, vec![operand]));
        }

        Ok(Term::Sym(s))
    }

    /// Parses `arg, arg, ...)` after the opening parenthesis of a call.
    fn finish_call(&mut self, functor: Symbol) -> ParseResult<Term> {
        let mut args = Vec::new();
        if matches!(self.lexer.peek_token()?, Token::Sym(s) if s == self.punct.rparen) {
            self.lexer.next_token()?;
            return Ok(Term::call(functor, args));
        }
        loop {
            args.push(self.read(true)?);
            let pos = self.lexer.position();
            match self.lexer.next_token()? {
                Token::Sym(s) if s == self.punct.comma => {}
                Token::Sym(s) if s == self.punct.rparen => break,
                Token::Eof => {
                    return Err(ParseError::UnexpectedEof {
                        expected: "',' or ')'".to_string(),
                        pos,
                    })
                }
                other => {
                    return Err(ParseError::UnexpectedToken {
                        found: other.describe(),
                        expected: "',' or ')' in argument list".to_string(),
                        pos,
                    })
                }
            }
        }
        Ok(Term::call(functor, args))
    }

    /// Parses `elem, elem, ...]` after an opening bracket.
    fn finish_seq(&mut self) -> ParseResult<Term> {
        let mut items = Vec::new();
        if matches!(self.lexer.peek_token()?, Token::Sym(s) if s == self.punct.rbracket) {
            self.lexer.next_token()?;
            return Ok(Term::Seq(items));
        }
        loop {
            items.push(self.read(true)?);
            let pos = self.lexer.position();
            match self.lexer.next_token()? {
                Token::Sym(s) if s == self.punct.comma => {}
                Token::Sym(s) if s == self.punct.rbracket => break,
                Token::Eof => {
                    return Err(ParseError::UnexpectedEof {
                        expected: "',' or ']'".to_string(),
                        pos,
                    })
                }
                other => {
                    return Err(ParseError::UnexpectedToken {
                        found: other.describe(),
                        expected: "',' or ']' in sequence".to_string(),
                        pos,
                    })
                }
            }
        }
        Ok(Term::Seq(items))
    }

    fn expect_sym(&mut self, expected: Symbol, what: &str) -> ParseResult<()> {
        let pos = self.lexer.position();
        match self.lexer.next_token()? {
            Token::Sym(s) if s == expected => Ok(()),
            Token::Eof => Err(ParseError::UnexpectedEof {
                expected: what.to_string(),
                pos,
            }),
            other => Err(ParseError::UnexpectedToken {
                found: other.describe(),
                expected: what.to_string(),
                pos,
            }),
        }
    }
}

/// Parses `source` as exactly one term, requiring the input to be exhausted.
pub fn parse_term(source: &str, ops: &OperTable) -> ParseResult<Term> {
    let mut parser = Parser::new(source, ops);
    let term = parser.read(false)?;
    if !parser.at_eof()? {
        let pos = parser.lexer.position();
        let trailing = parser.lexer.peek_token()?;
        return Err(ParseError::UnexpectedToken {
            found: trailing.describe(),
            expected: "end of input".to_string(),
            pos,
        });
    }
    Ok(term)
}
