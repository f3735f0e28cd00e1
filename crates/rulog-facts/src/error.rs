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

//! Error types for tabular fact loading.
//!
//! Any failure while decoding a data row is re-raised wrapped in
//! [`FactsError::Row`], naming the source's file identity and the 1-based
//! row number while preserving the original error as the cause.

use thiserror::Error;

/// Fact loading error types.
///
/// # Examples
///
/// ```
/// use rulog_facts::FactsError;
///
/// let err = FactsError::Shape { expected: 2, actual: 3 };
/// assert_eq!(
///     err.to_string(),
///     "row width mismatch: expected 2 columns, got 3"
/// );
/// ```
#[derive(Debug, Error)]
pub enum FactsError {
    /// A row-level failure, wrapped with the originating file and row.
    #[error("{file} row {row}: {source}")]
    Row {
        /// Identity of the input (file name or caller-chosen label).
        file: String,
        /// 1-based data-row number where decoding failed.
        row: usize,
        /// The underlying failure.
        #[source]
        source: Box<FactsError>,
    },

    /// The input held no header row.
    #[error("missing header row")]
    MissingHeader,

    /// A data row whose cell count does not match the schema.
    #[error("row width mismatch: expected {expected} columns, got {actual}")]
    Shape {
        /// Declared column count.
        expected: usize,
        /// Cells found in the row.
        actual: usize,
    },

    /// A cell that does not decode as its column's numeric type.
    #[error("column '{column}': invalid {expected} value {value:?}")]
    Number {
        /// Column name from the header.
        column: String,
        /// Expected type tag.
        expected: &'static str,
        /// The offending cell text.
        value: String,
    },

    /// An empty cell in a symbol column.
    #[error("column '{column}': empty cell for symbol column")]
    EmptySymbol {
        /// Column name from the header.
        column: String,
    },

    /// A struct-typed cell whose type tag has no registered expansion.
    #[error("no struct expansion registered for type '{tag}'")]
    UnknownStructType {
        /// The type tag from the header.
        tag: String,
    },

    /// A quoted field that never closes.
    #[error("unclosed quote in field")]
    UnclosedQuote,

    /// Text between a closing quote and the next delimiter.
    #[error("unexpected character {found:?} after closing quote")]
    QuoteDelimiter {
        /// The character found.
        found: char,
    },

    /// An expression cell that failed to parse.
    #[error("syntax error in cell: {0}")]
    Syntax(#[from] rulog_core::ParseError),

    /// I/O error while reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for fact-loading results.
pub type Result<T> = std::result::Result<T, FactsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_shape_display() {
        let err = FactsError::Shape {
            expected: 2,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "row width mismatch: expected 2 columns, got 3"
        );
    }

    #[test]
    fn test_number_display() {
        let err = FactsError::Number {
            column: "qty".to_string(),
            expected: "integer",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "column 'qty': invalid integer value \"abc\"");
    }

    #[test]
    fn test_empty_symbol_display() {
        let err = FactsError::EmptySymbol {
            column: "name".to_string(),
        };
        assert_eq!(err.to_string(), "column 'name': empty cell for symbol column");
    }

    #[test]
    fn test_row_wrapping_preserves_cause() {
        let cause = FactsError::Shape {
            expected: 2,
            actual: 3,
        };
        let err = FactsError::Row {
            file: "facts.csv".to_string(),
            row: 7,
            source: Box::new(cause),
        };
        assert_eq!(
            err.to_string(),
            "facts.csv row 7: row width mismatch: expected 2 columns, got 3"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_syntax_conversion() {
        let parse_err = rulog_core::parse_term("f(", &rulog_core::OperTable::standard()).unwrap_err();
        let err = FactsError::from(parse_err);
        assert!(err.to_string().starts_with("syntax error in cell"));
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = FactsError::from(io_err);
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FactsError>();
    }
}
