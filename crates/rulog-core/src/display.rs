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

//! Operator-aware term rendering.
//!
//! [`TermDisplay`] renders a [`Term`] back to its textual form for
//! diagnostics. Binary and prefix operator calls print in operator notation,
//! parenthesized only where a child's binding power is lower than its
//! position requires, so canonical forms survive a parse → render → parse
//! round trip.

use crate::ops::OperTable;
use crate::sym::Symbol;
use crate::term::{Call, Term};
use std::fmt;

/// Arguments and sequence elements render one step above the comma operator
/// so an embedded comma term stays parenthesized.
const ARG_MIN: u16 = 21;

/// A [`Term`] paired with the operator table that governs its notation.
///
/// # Examples
///
/// ```
/// use rulog_core::{parse_term, OperTable};
///
/// let ops = OperTable::standard();
/// let term = parse_term("1+2*3", &ops).unwrap();
/// assert_eq!(term.display(&ops).to_string(), "1 + 2 * 3");
/// ```
pub struct TermDisplay<'a> {
    term: &'a Term,
    ops: &'a OperTable,
}

impl Term {
    /// Returns a [`fmt::Display`] adapter rendering this term with the given
    /// operator table.
    #[inline]
    pub fn display<'a>(&'a self, ops: &'a OperTable) -> TermDisplay<'a> {
        TermDisplay { term: self, ops }
    }
}

impl fmt::Display for TermDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_term(f, self.term, self.ops, 0)
    }
}

fn write_term(f: &mut fmt::Formatter<'_>, term: &Term, ops: &OperTable, min: u16) -> fmt::Result {
    match term {
        Term::Null => f.write_str("null"),
        Term::Bool(b) => write!(f, "{}", b),
        Term::Int(n) => write!(f, "{}", n),
        Term::Float(x) => write_float(f, *x),
        Term::Str(s) => write_string(f, s),
        Term::Sym(s) => write_symbol(f, *s),
        Term::Seq(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_term(f, item, ops, ARG_MIN)?;
            }
            f.write_str("]")
        }
        Term::Call(c) => write_call(f, c, ops, min),
    }
}

fn write_call(f: &mut fmt::Formatter<'_>, c: &Call, ops: &OperTable, min: u16) -> fmt::Result {
    let functor = c.functor();
    let args = c.args();

    if args.len() == 2 {
        if let Some(prec) = ops.binary_prec(functor) {
            let parens = prec < min;
            if parens {
                f.write_str("(")?;
            }
            write_term(f, &args[0], ops, prec)?;
            write!(f, " {} ", functor.as_str())?;
            write_term(f, &args[1], ops, prec + 1)?;
            if parens {
                f.write_str(")")?;
            }
            return Ok(());
        }
        // Index sugar prints back as written.
        if functor == Symbol::intern("item") {
            if let Term::Sym(base) = &args[0] {
                write_symbol(f, *base)?;
                f.write_str("[")?;
                write_term(f, &args[1], ops, 0)?;
                return f.write_str("]");
            }
        }
    }

    if args.len() == 1 {
        if let Some(prec) = ops.prefix_prec(functor) {
            // Operator notation is unusable when the operand's leading token
            // would fuse with the operator on the way back in: a sign before
            // a numeric literal folds into it, and any symbol before `[`
            // becomes index sugar. Those cases keep functional form.
            let leading = leading_term(&args[0], ops);
            let ambiguous = matches!(leading, Term::Seq(_))
                || ((functor == Symbol::intern("-") || functor == Symbol::intern("+"))
                    && matches!(leading, Term::Int(_) | Term::Float(_)));
            if !ambiguous {
                let parens = prec < min;
                if parens {
                    f.write_str("(")?;
                }
                write_symbol(f, functor)?;
                f.write_str(" ")?;
                write_term(f, &args[0], ops, prec)?;
                if parens {
                    f.write_str(")")?;
                }
                return Ok(());
            }
        }
    }

    write_symbol(f, functor)?;
    f.write_str("(")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_term(f, arg, ops, ARG_MIN)?;
    }
    f.write_str(")")
}

/// The term supplying the leftmost token of `term`'s rendered form,
/// descending through infix-rendered children.
fn leading_term<'t>(term: &'t Term, ops: &OperTable) -> &'t Term {
    match term {
        Term::Call(c) if c.args().len() == 2 && ops.binary_prec(c.functor()).is_some() => {
            leading_term(&c.args()[0], ops)
        }
        other => other,
    }
}

/// Identifier-shaped names print bare; everything else prints as a quoted
/// symbol literal.
fn is_plain_symbol(text: &str) -> bool {
    if matches!(text, "true" | "false" | "True" | "False") {
        return false;
    }
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '!')
}

fn write_symbol(f: &mut fmt::Formatter<'_>, sym: Symbol) -> fmt::Result {
    let text = sym.as_str();
    if is_plain_symbol(text) {
        f.write_str(text)
    } else {
        write!(f, "'{}'", text)
    }
}

fn write_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for ch in s.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '"' => f.write_str("\\\"")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c => write!(f, "{}", c)?,
        }
    }
    f.write_str("\"")
}

/// Floats always render with a decimal point so they read back as floats.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_finite() && x.fract() == 0.0 {
        write!(f, "{:.1}", x)
    } else {
        write!(f, "{}", x)
    }
}
