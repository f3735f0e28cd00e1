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

//! Whole-table loading tests, including struct expansion and messy
//! spreadsheet exports.

use rulog_core::{OperTable, Symbol, Term};
use rulog_facts::{load_facts, ColumnType, FactLoader, FactsError, NoExpanders, StructExpander};

/// Expands `point(X, Y)` cells into two integer row slots and `span(A, B)`
/// cells into two symbols, mimicking a schema-directed record flattener.
struct DemoExpander;

impl StructExpander for DemoExpander {
    fn expand(
        &self,
        tag: Symbol,
        value: Term,
        out: &mut Vec<Term>,
    ) -> rulog_facts::Result<()> {
        match tag.as_str() {
            "point" | "span" => {
                let call = value.as_call().ok_or(FactsError::UnknownStructType {
                    tag: tag.as_str().to_string(),
                })?;
                out.extend(call.args().iter().cloned());
                Ok(())
            }
            _ => Err(FactsError::UnknownStructType {
                tag: tag.as_str().to_string(),
            }),
        }
    }
}

#[test]
fn mixed_schema_with_struct_flattening() {
    let input = "\
% machine-generated, do not edit
id(symbol),label,qty(int),pos(point),tags(list)
m1,\"first, quoted\",3,\"point(1, 2)\",\" a, b ,c\"
// a comment row between data rows
m2,plain,,\"point(0, 0)\",\"\"
";
    let ops = OperTable::standard();
    let mut rows = Vec::new();
    load_facts(input, "machines.csv", b',', &ops, &DemoExpander, |n, vs| {
        rows.push((n, vs))
    })
    .unwrap();

    assert_eq!(rows.len(), 2);

    let (n, first) = &rows[0];
    assert_eq!(*n, 1);
    assert_eq!(
        first.as_slice(),
        &[
            Term::sym("m1"),
            Term::Str("first, quoted".to_string()),
            Term::Int(3),
            Term::Int(1),
            Term::Int(2),
            Term::Seq(vec![Term::sym("a"), Term::sym("b"), Term::sym("c")]),
        ]
    );

    let (n, second) = &rows[1];
    assert_eq!(*n, 2);
    assert_eq!(second[2], Term::Int(0));
    assert_eq!(second[5], Term::Seq(vec![]));
}

#[test]
fn crlf_terminated_export() {
    let input = "name(symbol),qty(int)\r\nalpha,1\r\nbeta,2\r\n";
    let ops = OperTable::standard();
    let mut rows = Vec::new();
    load_facts(input, "export.csv", b',', &ops, &NoExpanders, |n, vs| {
        rows.push((n, vs))
    })
    .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].1[0], Term::sym("beta"));
}

#[test]
fn semicolon_delimited_table() {
    let input = "a(int);b(int)\n1;2\n";
    let ops = OperTable::standard();
    let mut rows = Vec::new();
    load_facts(input, "semi.csv", b';', &ops, &NoExpanders, |n, vs| {
        rows.push((n, vs))
    })
    .unwrap();
    assert_eq!(rows, vec![(1, vec![Term::Int(1), Term::Int(2)])]);
}

#[test]
fn object_column_uses_operator_table() {
    let input = "rule(object)\n\"p(X) <-- q(X)\"\n";
    let ops = OperTable::standard();
    let mut rows = Vec::new();
    load_facts(input, "rules.csv", b',', &ops, &NoExpanders, |n, vs| {
        rows.push((n, vs))
    })
    .unwrap();
    let rule = rows[0].1[0].as_call().unwrap();
    assert_eq!(rule.functor().as_str(), "<--");
}

#[test]
fn error_carries_file_and_row_through_display() {
    let input = "qty(int)\n1\n2\nnot_a_number\n";
    let ops = OperTable::standard();
    let err = load_facts(input, "inventory.csv", b',', &ops, &NoExpanders, |_, _| {})
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("inventory.csv"), "message: {}", msg);
    assert!(msg.contains("row 3"), "message: {}", msg);
    assert!(msg.contains("not_a_number"), "message: {}", msg);
}

#[test]
fn loader_exposes_frozen_signature() {
    let input = "id(symbol),qty(int)\n";
    let ops = OperTable::standard();
    let loader = FactLoader::new(input, "x.csv", b',', &ops, &NoExpanders).unwrap();
    let sig = loader.signature();
    assert_eq!(sig.len(), 2);
    assert_eq!(sig.columns()[0].ty, ColumnType::Symbol);
    assert_eq!(sig.columns()[1].ty, ColumnType::Integer);
}

#[test]
fn handler_sees_rows_in_input_order() {
    let mut input = String::from("n(int)\n");
    for i in 0..100 {
        input.push_str(&format!("{}\n", i));
    }
    let ops = OperTable::standard();
    let mut expected = 0;
    load_facts(&input, "seq.csv", b',', &ops, &NoExpanders, |n, vs| {
        expected += 1;
        assert_eq!(n, expected);
        assert_eq!(vs[0], Term::Int((expected - 1) as i32));
    })
    .unwrap();
    assert_eq!(expected, 100);
}
