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

//! Core tokenizer, term model, and expression parser for RULOG.
//!
//! This crate is the textual front end of the RULOG logic-programming
//! language: it turns characters into the term representation consumed by
//! the compiler/engine.
//!
//! - [`Lexer`] — character tokenizer with depth-1 lookahead at both the
//!   character and token layers.
//! - [`OperTable`] — immutable operator fixity/precedence registry, built
//!   once through [`OperTableBuilder`] and shared by reference.
//! - [`Parser`] — precedence-climbing expression parser producing [`Term`]
//!   trees; operator applications are ordinary [`Call`] terms.
//! - [`TermDisplay`] — operator-aware rendering back to text.
//!
//! # Examples
//!
//! ```
//! use rulog_core::{parse_term, OperTable, Term};
//!
//! let ops = OperTable::standard();
//! let term = parse_term("path(X, Y) <-- edge(X, Y)", &ops).unwrap();
//! let rule = term.as_call().unwrap();
//! assert_eq!(rule.functor().as_str(), "<--");
//! assert_eq!(rule.arity(), 2);
//! ```

mod display;
mod error;
mod lexer;
mod ops;
mod parser;
mod span;
mod sym;
mod term;

pub use display::TermDisplay;
pub use error::{ParseError, ParseResult};
pub use lexer::{Lexer, Token};
pub use ops::{OperInfo, OperTable, OperTableBuilder};
pub use parser::{parse_term, Parser};
pub use span::SourcePos;
pub use sym::Symbol;
pub use term::{Call, Term};
