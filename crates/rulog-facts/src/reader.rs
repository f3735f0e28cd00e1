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

//! Row-oriented delimited-text reading.
//!
//! [`RecordReader`] implements the tabular dialect: a caller-supplied
//! single-byte delimiter, optional `"`-quoting with `""` decoding to one
//! literal quote, and rows separated by `\r`, `\n`, or `\r\n` (tolerating
//! malformed spreadsheet exports). Comment rows — a row whose very first
//! character is `%`, or whose first field starts with `//` — are skipped
//! entirely, as are blank lines. An empty leading cell before the first
//! delimiter is honored as a genuine empty first field.

use crate::error::{FactsError, Result};
use memchr::{memchr, memchr2, memchr3};

/// Reads raw records from delimited text.
pub struct RecordReader<'a> {
    input: &'a str,
    pos: usize,
    delimiter: u8,
}

impl<'a> RecordReader<'a> {
    /// Creates a reader over `input` with the given field delimiter.
    pub fn new(input: &'a str, delimiter: u8) -> Self {
        Self {
            input,
            pos: 0,
            delimiter,
        }
    }

    /// Returns the next data record, skipping comment rows and blank lines.
    /// `None` once the input is exhausted.
    pub fn next_record(&mut self) -> Result<Option<Vec<String>>> {
        loop {
            if self.pos >= self.input.len() {
                return Ok(None);
            }
            let bytes = self.input.as_bytes();
            // Whole-row comment.
            if bytes[self.pos] == b'%' {
                self.skip_line();
                continue;
            }
            // Blank line.
            if matches!(bytes[self.pos], b'\n' | b'\r') {
                self.skip_line();
                continue;
            }
            // Comment row: the first non-delimiter field starts with `//`.
            // Checked against the raw line, so a quoted field is never a
            // comment marker.
            let mut first = self.pos;
            while first < bytes.len() && bytes[first] == self.delimiter {
                first += 1;
            }
            if self.input[first..].starts_with("//") {
                self.skip_line();
                continue;
            }
            return Ok(Some(self.read_record()?));
        }
    }

    fn skip_line(&mut self) {
        let bytes = self.input.as_bytes();
        match memchr2(b'\n', b'\r', &bytes[self.pos..]) {
            Some(offset) => {
                self.pos += offset;
                self.consume_terminator();
            }
            None => self.pos = self.input.len(),
        }
    }

    /// Consumes one `\n`, `\r`, or `\r\n` at the current position.
    fn consume_terminator(&mut self) {
        let bytes = self.input.as_bytes();
        if self.pos >= bytes.len() {
            return;
        }
        if bytes[self.pos] == b'\r' {
            self.pos += 1;
            if self.pos < bytes.len() && bytes[self.pos] == b'\n' {
                self.pos += 1;
            }
        } else if bytes[self.pos] == b'\n' {
            self.pos += 1;
        }
    }

    /// Reads the fields of one record and consumes its line terminator.
    fn read_record(&mut self) -> Result<Vec<String>> {
        let mut fields = Vec::new();
        loop {
            let field = self.read_field()?;
            fields.push(field);
            let bytes = self.input.as_bytes();
            if self.pos >= bytes.len() {
                break;
            }
            let b = bytes[self.pos];
            if b == self.delimiter {
                self.pos += 1;
            } else {
                // Line terminator; read_field stops at nothing else.
                self.consume_terminator();
                break;
            }
        }
        Ok(fields)
    }

    fn read_field(&mut self) -> Result<String> {
        let bytes = self.input.as_bytes();
        if self.pos < bytes.len() && bytes[self.pos] == b'"' {
            self.read_quoted_field()
        } else {
            Ok(self.read_unquoted_field())
        }
    }

    fn read_unquoted_field(&mut self) -> String {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        let end = match memchr3(self.delimiter, b'\n', b'\r', &bytes[start..]) {
            Some(offset) => start + offset,
            None => bytes.len(),
        };
        self.pos = end;
        self.input[start..end].to_string()
    }

    fn read_quoted_field(&mut self) -> Result<String> {
        let bytes = self.input.as_bytes();
        let mut value = String::new();
        let mut cursor = self.pos + 1;
        loop {
            let offset = match memchr(b'"', &bytes[cursor..]) {
                Some(o) => o,
                None => return Err(FactsError::UnclosedQuote),
            };
            value.push_str(&self.input[cursor..cursor + offset]);
            cursor += offset + 1;
            if cursor < bytes.len() && bytes[cursor] == b'"' {
                // Doubled quote decodes to one literal quote.
                value.push('"');
                cursor += 1;
            } else {
                break;
            }
        }
        // After the closing quote only a delimiter or terminator may follow.
        if cursor < bytes.len() {
            let b = bytes[cursor];
            if b != self.delimiter && b != b'\n' && b != b'\r' {
                let found = self.input[cursor..].chars().next().unwrap_or('\0');
                return Err(FactsError::QuoteDelimiter { found });
            }
        }
        self.pos = cursor;
        Ok(value)
    }
}
