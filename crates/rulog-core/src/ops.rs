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

//! Operator fixity and precedence registry.
//!
//! An [`OperTable`] maps operator symbols to their [`OperInfo`] record and is
//! sealed at construction: build one through [`OperTableBuilder`] (or take
//! [`OperTable::standard`]) before the first parse, then share it by
//! reference across parser instances. One record exists per symbol, so a
//! symbol readable both prefix and infix must be registered with
//! [`OperTableBuilder::binary_prefix`] in a single call — a later
//! registration for the same name replaces the whole record.
//!
//! Higher precedence numbers bind tighter.

use crate::sym::Symbol;
use std::collections::HashMap;

/// Fixity metadata for one operator symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperInfo {
    /// Binding power when used infix; `None` means not a binary operator.
    pub binary: Option<u16>,
    /// Binding power when used prefix; `None` means not a prefix operator.
    pub prefix: Option<u16>,
}

/// Builder for an [`OperTable`].
#[derive(Debug, Default)]
pub struct OperTableBuilder {
    map: HashMap<Symbol, OperInfo>,
}

impl OperTableBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` as a binary operator.
    pub fn binary(mut self, name: &str, prec: u16) -> Self {
        self.map.insert(
            Symbol::intern(name),
            OperInfo {
                binary: Some(prec),
                prefix: None,
            },
        );
        self
    }

    /// Registers `name` as both a binary and a prefix operator.
    pub fn binary_prefix(mut self, name: &str, prec: u16, prefix_prec: u16) -> Self {
        self.map.insert(
            Symbol::intern(name),
            OperInfo {
                binary: Some(prec),
                prefix: Some(prefix_prec),
            },
        );
        self
    }

    /// Registers `name` as a prefix operator.
    pub fn prefix(mut self, name: &str, prec: u16) -> Self {
        self.map.insert(
            Symbol::intern(name),
            OperInfo {
                binary: None,
                prefix: Some(prec),
            },
        );
        self
    }

    /// Seals the builder into an immutable table.
    pub fn build(self) -> OperTable {
        OperTable { map: self.map }
    }
}

/// An immutable operator table, consulted read-only by the parser and the
/// term renderer.
#[derive(Debug, Clone)]
pub struct OperTable {
    map: HashMap<Symbol, OperInfo>,
}

impl OperTable {
    /// An empty table: every symbol parses as a plain atom or call.
    pub fn empty() -> Self {
        OperTableBuilder::new().build()
    }

    /// Looks up the fixity record for a symbol.
    #[inline]
    pub fn lookup(&self, sym: Symbol) -> Option<&OperInfo> {
        self.map.get(&sym)
    }

    /// Binary binding power of `sym`, if it is a binary operator.
    #[inline]
    pub fn binary_prec(&self, sym: Symbol) -> Option<u16> {
        self.lookup(sym).and_then(|info| info.binary)
    }

    /// Prefix binding power of `sym`, if it is a prefix operator.
    #[inline]
    pub fn prefix_prec(&self, sym: Symbol) -> Option<u16> {
        self.lookup(sym).and_then(|info| info.prefix)
    }

    /// Number of registered operator symbols.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no operators are registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The built-in operator set.
    ///
    /// Precedences, low to high: rule definition `<--`, the argument-building
    /// comma, alternation `|`, implication `->`, declaration keywords,
    /// comparison and assignment, allocation `new`, additive, multiplicative,
    /// member access `.`, and finally prefix `$` and scope `::`.
    pub fn standard() -> OperTable {
        OperTableBuilder::new()
            .binary("<--", 10)
            .binary(",", 20)
            .binary("|", 21)
            .binary("->", 22)
            .prefix("set", 25)
            .prefix("function", 25)
            .prefix("table", 25)
            .prefix("global", 25)
            .prefix("struct", 25)
            .prefix("signature", 25)
            .prefix("trace", 25)
            .prefix("notrace", 25)
            .binary("=", 30)
            .binary("+=", 30)
            .binary("\\=", 30)
            .binary("<", 30)
            .binary("=<", 30)
            .binary(">", 30)
            .binary(">=", 30)
            .binary("in", 30)
            .prefix("new", 50)
            .binary_prefix("+", 110, 110)
            .binary_prefix("-", 110, 110)
            .binary("*", 120)
            .binary("/", 120)
            .binary("%", 120)
            .binary(":", 120)
            .binary(">>", 120)
            .binary(".", 200)
            .prefix("$", 300)
            .binary("::", 300)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(name: &str) -> Symbol {
        Symbol::intern(name)
    }

    #[test]
    fn test_empty_table() {
        let t = OperTable::empty();
        assert!(t.is_empty());
        assert_eq!(t.lookup(sym("+")), None);
    }

    #[test]
    fn test_binary_registration() {
        let t = OperTableBuilder::new().binary("+", 110).build();
        assert_eq!(t.binary_prec(sym("+")), Some(110));
        assert_eq!(t.prefix_prec(sym("+")), None);
    }

    #[test]
    fn test_prefix_registration() {
        let t = OperTableBuilder::new().prefix("new", 50).build();
        assert_eq!(t.prefix_prec(sym("new")), Some(50));
        assert_eq!(t.binary_prec(sym("new")), None);
    }

    #[test]
    fn test_binary_prefix_registration() {
        let t = OperTableBuilder::new().binary_prefix("-", 110, 110).build();
        let info = t.lookup(sym("-")).unwrap();
        assert_eq!(info.binary, Some(110));
        assert_eq!(info.prefix, Some(110));
    }

    #[test]
    fn test_later_registration_replaces() {
        // Registering the same name twice keeps only the last record.
        let t = OperTableBuilder::new()
            .prefix("-", 900)
            .binary("-", 110)
            .build();
        let info = t.lookup(sym("-")).unwrap();
        assert_eq!(info.binary, Some(110));
        assert_eq!(info.prefix, None);
    }

    #[test]
    fn test_standard_precedence_ordering() {
        let t = OperTable::standard();
        let rule = t.binary_prec(sym("<--")).unwrap();
        let comma = t.binary_prec(sym(",")).unwrap();
        let cmp = t.binary_prec(sym("=")).unwrap();
        let add = t.binary_prec(sym("+")).unwrap();
        let mul = t.binary_prec(sym("*")).unwrap();
        let access = t.binary_prec(sym(".")).unwrap();
        let scope = t.binary_prec(sym("::")).unwrap();
        assert!(rule < comma);
        assert!(comma < cmp);
        assert!(cmp < add);
        assert!(add < mul);
        assert!(mul < access);
        assert!(access < scope);
    }

    #[test]
    fn test_standard_dual_fixity_minus() {
        let t = OperTable::standard();
        let info = t.lookup(sym("-")).unwrap();
        assert_eq!(info.binary, Some(110));
        assert_eq!(info.prefix, Some(110));
    }

    #[test]
    fn test_standard_keyword_prefixes() {
        let t = OperTable::standard();
        for kw in [
            "set",
            "function",
            "table",
            "global",
            "struct",
            "signature",
            "trace",
            "notrace",
        ] {
            assert_eq!(t.prefix_prec(sym(kw)), Some(25), "keyword {}", kw);
            assert_eq!(t.binary_prec(sym(kw)), None, "keyword {}", kw);
        }
        assert_eq!(t.prefix_prec(sym("new")), Some(50));
        assert_eq!(t.prefix_prec(sym("$")), Some(300));
    }

    #[test]
    fn test_standard_comparisons_share_precedence() {
        let t = OperTable::standard();
        let expected = t.binary_prec(sym("=")).unwrap();
        for op in ["+=", "\\=", "<", "=<", ">", ">=", "in"] {
            assert_eq!(t.binary_prec(sym(op)), Some(expected), "operator {}", op);
        }
    }

    #[test]
    fn test_standard_non_operator_lookup() {
        let t = OperTable::standard();
        assert_eq!(t.lookup(sym("likes")), None);
        assert_eq!(t.lookup(sym("(")), None);
    }
}
