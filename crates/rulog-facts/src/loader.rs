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

//! Schema-driven fact loading.
//!
//! [`FactLoader`] reads a header row into a [`Signature`], then decodes each
//! data row into a flat, ordered array of typed [`Term`] values, delivered in
//! input order to a caller-supplied row handler with 1-based row numbers
//! (comment rows are never numbered). Cells whose declared type is not a
//! built-in scalar are decoded through the expression parser; struct-typed
//! cells are additionally flattened into the row by a [`StructExpander`].

use crate::error::{FactsError, Result};
use crate::reader::RecordReader;
use crate::schema::{Column, ColumnType, Signature};
use rulog_core::{parse_term, OperTable, Symbol, Term};
use std::io::Read;

/// Expands one decoded struct value into positional row slots.
///
/// Struct flattening is owned by the schema layer above this crate; the
/// loader only dispatches on the column's type tag. Implementations append
/// the flattened values to `out` in column order.
pub trait StructExpander {
    /// Flattens `value` (the parsed cell expression) for the struct type
    /// `tag`, appending the resulting row slots to `out`.
    fn expand(&self, tag: Symbol, value: Term, out: &mut Vec<Term>) -> Result<()>;
}

/// A [`StructExpander`] with no registered types: every struct column fails
/// with [`FactsError::UnknownStructType`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NoExpanders;

impl StructExpander for NoExpanders {
    fn expand(&self, tag: Symbol, _value: Term, _out: &mut Vec<Term>) -> Result<()> {
        Err(FactsError::UnknownStructType {
            tag: tag.as_str().to_string(),
        })
    }
}

/// Loads typed fact rows from delimited text.
pub struct FactLoader<'a> {
    reader: RecordReader<'a>,
    source: String,
    signature: Signature,
    ops: &'a OperTable,
    expander: &'a dyn StructExpander,
}

impl<'a> FactLoader<'a> {
    /// Creates a loader over `input`, reading the header row immediately.
    ///
    /// `source` is the input's identity (typically a file name) used when
    /// wrapping row errors.
    pub fn new(
        input: &'a str,
        source: impl Into<String>,
        delimiter: u8,
        ops: &'a OperTable,
        expander: &'a dyn StructExpander,
    ) -> Result<Self> {
        let mut reader = RecordReader::new(input, delimiter);
        let header = reader.next_record()?.ok_or(FactsError::MissingHeader)?;
        Ok(Self {
            reader,
            source: source.into(),
            signature: Signature::from_header(&header),
            ops,
            expander,
        })
    }

    /// The column schema fixed by the header row.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Reads every data row, passing the 1-based row number and the decoded
    /// values to `handler` in input order.
    ///
    /// Any decoding failure is returned wrapped with this input's identity
    /// and the offending row number; iteration does not continue past it.
    pub fn read<F>(&mut self, mut handler: F) -> Result<()>
    where
        F: FnMut(usize, Vec<Term>),
    {
        let mut row = 0usize;
        loop {
            let record = match self.reader.next_record() {
                Ok(Some(record)) => record,
                Ok(None) => return Ok(()),
                Err(err) => return Err(self.wrap(row + 1, err)),
            };
            row += 1;
            let values = self
                .decode_row(&record)
                .map_err(|err| self.wrap(row, err))?;
            handler(row, values);
        }
    }

    fn wrap(&self, row: usize, err: FactsError) -> FactsError {
        FactsError::Row {
            file: self.source.clone(),
            row,
            source: Box::new(err),
        }
    }

    fn decode_row(&self, record: &[String]) -> Result<Vec<Term>> {
        if record.len() != self.signature.len() {
            return Err(FactsError::Shape {
                expected: self.signature.len(),
                actual: record.len(),
            });
        }
        let mut values = Vec::with_capacity(record.len());
        for (cell, column) in record.iter().zip(self.signature.columns()) {
            self.decode_cell(cell, column, &mut values)?;
        }
        Ok(values)
    }

    fn decode_cell(&self, cell: &str, column: &Column, out: &mut Vec<Term>) -> Result<()> {
        match column.ty {
            ColumnType::Integer => {
                let text = cell.trim();
                let value = if text.is_empty() {
                    0
                } else {
                    text.parse::<i32>().map_err(|_| FactsError::Number {
                        column: column.name.clone(),
                        expected: "integer",
                        value: cell.to_string(),
                    })?
                };
                out.push(Term::Int(value));
            }
            ColumnType::Float => {
                let text = cell.trim();
                let value = if text.is_empty() {
                    0.0
                } else {
                    text.parse::<f64>().map_err(|_| FactsError::Number {
                        column: column.name.clone(),
                        expected: "float",
                        value: cell.to_string(),
                    })?
                };
                out.push(Term::Float(value));
            }
            ColumnType::Str => out.push(Term::Str(cell.to_string())),
            ColumnType::Symbol => {
                let text = cell.trim();
                if text.is_empty() {
                    return Err(FactsError::EmptySymbol {
                        column: column.name.clone(),
                    });
                }
                out.push(Term::Sym(Symbol::intern(text)));
            }
            ColumnType::List => {
                let items = cell
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(|item| Term::Sym(Symbol::intern(item)))
                    .collect();
                out.push(Term::Seq(items));
            }
            ColumnType::Object => out.push(self.parse_cell(cell)?),
            ColumnType::Struct(tag) => {
                let value = self.parse_cell(cell)?;
                self.expander.expand(tag, value, out)?;
            }
        }
        Ok(())
    }

    /// Decodes an untyped cell through the expression parser. The cell must
    /// hold exactly one expression.
    fn parse_cell(&self, cell: &str) -> Result<Term> {
        Ok(parse_term(cell, self.ops)?)
    }
}

/// Loads every fact row from `input`, delivering decoded rows to `handler`.
pub fn load_facts<F>(
    input: &str,
    source: &str,
    delimiter: u8,
    ops: &OperTable,
    expander: &dyn StructExpander,
    handler: F,
) -> Result<()>
where
    F: FnMut(usize, Vec<Term>),
{
    FactLoader::new(input, source, delimiter, ops, expander)?.read(handler)
}

/// Reads `reader` to the end and loads every fact row from it.
pub fn load_facts_from_reader<R, F>(
    mut reader: R,
    source: &str,
    delimiter: u8,
    ops: &OperTable,
    expander: &dyn StructExpander,
    handler: F,
) -> Result<()>
where
    R: Read,
    F: FnMut(usize, Vec<Term>),
{
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    load_facts(&input, source, delimiter, ops, expander, handler)
}
