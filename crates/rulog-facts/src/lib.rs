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

//! Schema-driven tabular fact loading for RULOG.
//!
//! This crate turns row-oriented delimited text (spreadsheet/CSV exports)
//! into typed fact rows for the RULOG engine. The first non-comment row is
//! the mandatory header: each cell may carry a `name(type)` suffix selecting
//! that column's decode rule; every following data row is decoded into a
//! flat array of [`rulog_core::Term`] values and handed to a row handler in
//! input order.
//!
//! # Examples
//!
//! ```
//! use rulog_core::{OperTable, Term};
//! use rulog_facts::{load_facts, NoExpanders};
//!
//! let ops = OperTable::standard();
//! let input = "name(symbol),qty(int)\nbolt,12\nnut,\n";
//! let mut rows = Vec::new();
//! load_facts(input, "parts.csv", b',', &ops, &NoExpanders, |n, values| {
//!     rows.push((n, values));
//! })
//! .unwrap();
//!
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].1[1], Term::Int(12));
//! assert_eq!(rows[1].1[1], Term::Int(0)); // empty numeric cell
//! ```

mod error;
mod loader;
mod reader;
mod schema;

pub use error::{FactsError, Result};
pub use loader::{load_facts, load_facts_from_reader, FactLoader, NoExpanders, StructExpander};
pub use reader::RecordReader;
pub use schema::{Column, ColumnType, Signature};
