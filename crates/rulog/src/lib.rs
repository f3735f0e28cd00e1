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

//! RULOG - Rule Logic Language.
//!
//! This facade crate re-exports the RULOG textual front end: the tokenizer,
//! operator-precedence parser, and term model from `rulog-core`, plus the
//! tabular fact loader from `rulog-facts` (behind the default `facts`
//! feature).
//!
//! # Quick Start
//!
//! ```
//! use rulog::{parse_term, OperTable};
//!
//! let ops = OperTable::standard();
//! let term = parse_term("path(X, Y) <-- edge(X, Z) , path(Z, Y)", &ops).unwrap();
//! assert_eq!(term.display(&ops).to_string(),
//!            "path(X, Y) <-- edge(X, Z) , path(Z, Y)");
//! ```
//!
//! # Features
//!
//! - `facts` (default) — re-export the tabular fact loader.
//! - `serde` — serde support for the term model.

pub use rulog_core::{
    parse_term, Call, Lexer, OperInfo, OperTable, OperTableBuilder, ParseError, ParseResult,
    Parser, SourcePos, Symbol, Term, TermDisplay, Token,
};

#[cfg(feature = "facts")]
pub use rulog_facts::{
    load_facts, load_facts_from_reader, Column, ColumnType, FactLoader, FactsError, NoExpanders,
    RecordReader, Signature, StructExpander,
};
