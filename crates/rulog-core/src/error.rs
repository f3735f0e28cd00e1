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

//! Error types for tokenizing and parsing.
//!
//! Tokenizer and parser errors are raised immediately at the point of failure
//! and carry the offending fragment plus a [`SourcePos`]; there is no local
//! recovery or skip-and-continue.

use crate::span::SourcePos;
use thiserror::Error;

/// Error raised by the tokenizer or the expression parser.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    // ==================== Tokenizer errors ====================
    /// A character that cannot begin any token.
    #[error("{pos}: invalid character '{ch}'")]
    InvalidChar { ch: char, pos: SourcePos },

    /// Input ended inside a double-quoted string literal.
    #[error("{pos}: unterminated string literal starting with {partial:?}")]
    UnterminatedString { partial: String, pos: SourcePos },

    /// Input ended inside a single-quoted symbol literal.
    #[error("{pos}: unterminated quoted symbol starting with {partial:?}")]
    UnterminatedSymbol { partial: String, pos: SourcePos },

    /// A numeric literal that does not decode as its scanned type.
    #[error("{pos}: invalid number {text:?}")]
    InvalidNumber { text: String, pos: SourcePos },

    // ==================== Parser errors ====================
    /// A token that cannot appear where it was found.
    #[error("{pos}: expected {expected}, found {found}")]
    UnexpectedToken {
        found: String,
        expected: String,
        pos: SourcePos,
    },

    /// Input ended where a term or closing delimiter was required.
    #[error("{pos}: unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String, pos: SourcePos },
}

impl ParseError {
    /// The position where this error occurred.
    #[inline]
    pub fn position(&self) -> SourcePos {
        match self {
            ParseError::InvalidChar { pos, .. }
            | ParseError::UnterminatedString { pos, .. }
            | ParseError::UnterminatedSymbol { pos, .. }
            | ParseError::InvalidNumber { pos, .. }
            | ParseError::UnexpectedToken { pos, .. }
            | ParseError::UnexpectedEof { pos, .. } => *pos,
        }
    }

    /// Returns `true` for errors produced while scanning characters into
    /// tokens (as opposed to structural parse errors).
    #[inline]
    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            ParseError::InvalidChar { .. }
                | ParseError::UnterminatedString { .. }
                | ParseError::UnterminatedSymbol { .. }
                | ParseError::InvalidNumber { .. }
        )
    }
}

/// Result type for tokenizer and parser operations.
pub type ParseResult<T> = Result<T, ParseError>;
