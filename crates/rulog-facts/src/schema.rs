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

//! Column schema decoding from the header row.
//!
//! The first non-comment row fixes the [`Signature`]: one [`Column`] per
//! header cell, its type selected by a trailing parenthesized suffix
//! (`name(type)`). The schema never changes length afterward; every data row
//! must produce exactly that many logical values.

use rulog_core::Symbol;

/// The decode rule for one column, decided once at header-parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// 32-bit integer; an empty cell decodes to zero.
    Integer,
    /// Floating point; an empty cell decodes to zero.
    Float,
    /// Text passed through unchanged.
    Str,
    /// Non-empty text interned as a symbol.
    Symbol,
    /// Comma-separated symbol sequence.
    List,
    /// A full expression appended as one term.
    Object,
    /// A full expression flattened through the struct expander for this tag.
    Struct(Symbol),
}

impl ColumnType {
    /// Maps a header type tag to its column type. `int` normalizes to
    /// [`ColumnType::Integer`]; unrecognized tags become struct columns
    /// keyed verbatim by the tag.
    pub fn from_tag(tag: &str) -> ColumnType {
        match tag {
            "int" | "integer" => ColumnType::Integer,
            "float" => ColumnType::Float,
            "string" => ColumnType::Str,
            "symbol" => ColumnType::Symbol,
            "list" => ColumnType::List,
            "object" => ColumnType::Object,
            other => ColumnType::Struct(Symbol::intern(other)),
        }
    }
}

/// One declared column: header name plus decode rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name (the header cell with any type suffix removed).
    pub name: String,
    /// Decode rule for this column's cells.
    pub ty: ColumnType,
}

/// The positional column schema, fixed once the header row is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    columns: Vec<Column>,
}

impl Signature {
    /// Builds the schema from the header row's cells.
    ///
    /// A cell of the form `name(type)` selects `type` for that column; a
    /// missing or malformed suffix defaults the column to
    /// [`ColumnType::Str`].
    pub fn from_header(cells: &[String]) -> Signature {
        let columns = cells
            .iter()
            .map(|cell| {
                let text = cell.trim();
                match split_type_suffix(text) {
                    Some((name, tag)) => Column {
                        name: name.to_string(),
                        ty: ColumnType::from_tag(tag),
                    },
                    None => Column {
                        name: text.to_string(),
                        ty: ColumnType::Str,
                    },
                }
            })
            .collect();
        Signature { columns }
    }

    /// Number of declared columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the header declared no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The declared columns, in input order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }
}

/// Splits `name(type)` into its parts, returning `None` when the suffix is
/// absent or malformed.
fn split_type_suffix(cell: &str) -> Option<(&str, &str)> {
    let rest = cell.strip_suffix(')')?;
    let open = rest.find('(')?;
    let (name, tag) = rest.split_at(open);
    let tag = tag[1..].trim();
    if tag.is_empty() {
        return None;
    }
    Some((name.trim(), tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[&str]) -> Signature {
        let cells: Vec<String> = cells.iter().map(|s| s.to_string()).collect();
        Signature::from_header(&cells)
    }

    #[test]
    fn test_typed_columns() {
        let sig = header(&["name(symbol)", "qty(int)", "price(float)"]);
        assert_eq!(sig.len(), 3);
        assert_eq!(sig.columns()[0].name, "name");
        assert_eq!(sig.columns()[0].ty, ColumnType::Symbol);
        assert_eq!(sig.columns()[1].ty, ColumnType::Integer);
        assert_eq!(sig.columns()[2].ty, ColumnType::Float);
    }

    #[test]
    fn test_int_normalizes_to_integer() {
        let sig = header(&["a(int)", "b(integer)"]);
        assert_eq!(sig.columns()[0].ty, ColumnType::Integer);
        assert_eq!(sig.columns()[1].ty, ColumnType::Integer);
    }

    #[test]
    fn test_no_suffix_defaults_to_string() {
        let sig = header(&["plain"]);
        assert_eq!(sig.columns()[0].name, "plain");
        assert_eq!(sig.columns()[0].ty, ColumnType::Str);
    }

    #[test]
    fn test_malformed_suffix_defaults_to_string() {
        let sig = header(&["odd(", "other)", "empty()"]);
        assert!(sig.columns().iter().all(|c| c.ty == ColumnType::Str));
        assert_eq!(sig.columns()[0].name, "odd(");
        assert_eq!(sig.columns()[2].name, "empty()");
    }

    #[test]
    fn test_unknown_tag_becomes_struct() {
        let sig = header(&["origin(point)"]);
        match sig.columns()[0].ty {
            ColumnType::Struct(tag) => assert_eq!(tag.as_str(), "point"),
            other => panic!("expected struct column, got {:?}", other),
        }
    }

    #[test]
    fn test_builtin_tags() {
        let sig = header(&[
            "a(string)",
            "b(symbol)",
            "c(list)",
            "d(object)",
            "e(float)",
        ]);
        let types: Vec<ColumnType> = sig.columns().iter().map(|c| c.ty).collect();
        assert_eq!(
            types,
            vec![
                ColumnType::Str,
                ColumnType::Symbol,
                ColumnType::List,
                ColumnType::Object,
                ColumnType::Float
            ]
        );
    }

    #[test]
    fn test_whitespace_tolerant_header() {
        let sig = header(&[" name ( symbol ) ", "  qty(int)"]);
        assert_eq!(sig.columns()[0].name, "name");
        assert_eq!(sig.columns()[0].ty, ColumnType::Symbol);
        assert_eq!(sig.columns()[1].name, "qty");
    }

    #[test]
    fn test_empty_header() {
        let sig = Signature::from_header(&[]);
        assert!(sig.is_empty());
    }
}
